//! Book model and related types

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book as stored in the `books` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub isbn: String,
    /// Current owner, `null` when the book is free
    #[serde(default)]
    pub cur_owner: Option<ObjectId>,
}

impl BookDocument {
    pub fn new(id: ObjectId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            published_year: fields.published_year,
            isbn: fields.isbn,
            cur_owner: None,
        }
    }
}

/// Create / replace book request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub isbn: String,
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub isbn: String,
    /// Id of the owning user
    pub cur_owner: Option<String>,
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            author: doc.author,
            published_year: doc.published_year,
            isbn: doc.isbn,
            cur_owner: doc.cur_owner.map(|owner| owner.to_hex()),
        }
    }
}
