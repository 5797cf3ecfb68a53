//! User (patron) model and related types

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as stored in the `users` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
}

impl UserDocument {
    pub fn new(id: ObjectId, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone_num: fields.phone_num,
        }
    }
}

/// Create / replace user request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: String,
}

impl From<UserDocument> for User {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            first_name: doc.first_name,
            last_name: doc.last_name,
            phone_num: doc.phone_num,
        }
    }
}

/// Response of a user deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDeleted {
    pub message: String,
    /// Books whose owner was cleared by the deletion
    pub books_updated: u64,
}
