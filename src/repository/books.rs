//! Book documents and the ownership updates on them

use bson::{doc, oid::ObjectId, Document};
use mongodb::options::ReturnDocument;

use super::{DocumentRepository, StoredDocument};
use crate::{
    error::AppResult,
    models::{BookDocument, BookFields},
};

impl StoredDocument for BookDocument {
    type Fields = BookFields;

    const COLLECTION: &'static str = "books";
    const LABEL: &'static str = "Book";

    fn from_fields(id: ObjectId, fields: BookFields) -> Self {
        BookDocument::new(id, fields)
    }

    // cur_owner is not part of the fields and survives an update
    fn set_document(fields: &BookFields) -> AppResult<Document> {
        Ok(bson::to_document(fields)?)
    }
}

impl DocumentRepository<BookDocument> {
    /// Set the owner in a single conditional update that only matches a free book.
    /// Returns `None` when the book is missing or already owned.
    pub async fn claim_owner(
        &self,
        book_id: ObjectId,
        owner: ObjectId,
    ) -> AppResult<Option<BookDocument>> {
        let book = self
            .collection()
            .find_one_and_update(
                doc! { "_id": book_id, "cur_owner": null },
                doc! { "$set": { "cur_owner": owner } },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(book)
    }

    /// Clear the owner of an owned book.
    /// Returns `None` when the book is missing or not owned.
    pub async fn release_owner(&self, book_id: ObjectId) -> AppResult<Option<BookDocument>> {
        let book = self
            .collection()
            .find_one_and_update(
                doc! { "_id": book_id, "cur_owner": { "$ne": null } },
                doc! { "$set": { "cur_owner": null } },
            )
            .return_document(ReturnDocument::After)
            .await?;
        Ok(book)
    }

    /// Clear `cur_owner` on every book held by `owner`, returning how many changed
    pub async fn clear_owner_references(&self, owner: ObjectId) -> AppResult<u64> {
        let result = self
            .collection()
            .update_many(
                doc! { "cur_owner": owner },
                doc! { "$set": { "cur_owner": null } },
            )
            .await?;
        Ok(result.modified_count)
    }

    pub async fn list_owned(
        &self,
        owner: ObjectId,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<BookDocument>> {
        self.list(doc! { "cur_owner": owner }, skip, limit).await
    }
}
