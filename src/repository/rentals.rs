//! Rental documents

use bson::{oid::ObjectId, Document};

use super::StoredDocument;
use crate::{
    error::AppResult,
    models::{RentalDocument, RentalFields},
};

impl StoredDocument for RentalDocument {
    type Fields = RentalFields;

    const COLLECTION: &'static str = "rents";
    const LABEL: &'static str = "Rental";

    fn from_fields(id: ObjectId, fields: RentalFields) -> Self {
        RentalDocument::new(id, fields)
    }

    fn set_document(fields: &RentalFields) -> AppResult<Document> {
        Ok(fields.to_set_document())
    }
}
