//! Rental (rent) model and related types

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::deserialize_object_id;

/// Rental as stored in the `rents` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub book_id: ObjectId,
    pub user_id: ObjectId,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub end_date: DateTime<Utc>,
}

impl RentalDocument {
    pub fn new(id: ObjectId, fields: RentalFields) -> Self {
        Self {
            id,
            book_id: fields.book_id,
            user_id: fields.user_id,
            start_date: fields.start_date,
            end_date: fields.end_date,
        }
    }
}

/// Create / replace rental request.
///
/// Referenced ids must be well-formed but are not checked against the
/// books and users collections.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RentalFields {
    #[serde(deserialize_with = "deserialize_object_id")]
    #[schema(value_type = String)]
    pub book_id: ObjectId,
    #[serde(deserialize_with = "deserialize_object_id")]
    #[schema(value_type = String)]
    pub user_id: ObjectId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl RentalFields {
    /// `$set` body replacing the four rental fields
    pub fn to_set_document(&self) -> bson::Document {
        bson::doc! {
            "book_id": self.book_id,
            "user_id": self.user_id,
            "start_date": bson::DateTime::from_chrono(self.start_date),
            "end_date": bson::DateTime::from_chrono(self.end_date),
        }
    }
}

/// Rental as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rental {
    pub id: String,
    pub book_id: String,
    pub user_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<RentalDocument> for Rental {
    fn from(doc: RentalDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            book_id: doc.book_id.to_hex(),
            user_id: doc.user_id.to_hex(),
            start_date: doc.start_date,
            end_date: doc.end_date,
        }
    }
}
