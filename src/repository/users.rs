//! User documents

use bson::{oid::ObjectId, Document};

use super::StoredDocument;
use crate::{
    error::AppResult,
    models::{UserDocument, UserFields},
};

impl StoredDocument for UserDocument {
    type Fields = UserFields;

    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";

    fn from_fields(id: ObjectId, fields: UserFields) -> Self {
        UserDocument::new(id, fields)
    }

    fn set_document(fields: &UserFields) -> AppResult<Document> {
        Ok(bson::to_document(fields)?)
    }
}
