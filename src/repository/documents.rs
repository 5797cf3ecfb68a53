//! Generic CRUD over one typed collection

use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::{options::ReturnDocument, Collection, Database};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

/// A document kind with its own collection
pub trait StoredDocument: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {
    /// Client-supplied fields for create and update
    type Fields: Send + Sync;

    const COLLECTION: &'static str;
    /// Name used in error messages ("Book", "User", ...)
    const LABEL: &'static str;

    fn from_fields(id: ObjectId, fields: Self::Fields) -> Self;

    /// `$set` body written by an update
    fn set_document(fields: &Self::Fields) -> AppResult<Document>;
}

pub struct DocumentRepository<D: StoredDocument> {
    collection: Collection<D>,
}

impl<D: StoredDocument> Clone for DocumentRepository<D> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

pub(crate) fn not_found<D: StoredDocument>(id: ObjectId) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", D::LABEL, id))
}

impl<D: StoredDocument> DocumentRepository<D> {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<D>(D::COLLECTION),
        }
    }

    pub(crate) fn collection(&self) -> &Collection<D> {
        &self.collection
    }

    /// Insert a new document under a freshly generated id
    pub async fn create(&self, fields: D::Fields) -> AppResult<D> {
        let document = D::from_fields(ObjectId::new(), fields);
        self.collection.insert_one(&document).await?;
        Ok(document)
    }

    pub async fn find(&self, id: ObjectId) -> AppResult<Option<D>> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<D> {
        self.find(id).await?.ok_or_else(|| not_found::<D>(id))
    }

    pub async fn exists(&self, id: ObjectId) -> AppResult<bool> {
        Ok(self.find(id).await?.is_some())
    }

    /// Overwrite the client-supplied fields, leaving any others untouched
    pub async fn update(&self, id: ObjectId, fields: &D::Fields) -> AppResult<D> {
        let set = D::set_document(fields)?;
        self.collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| not_found::<D>(id))
    }

    /// Returns false when nothing matched
    pub async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Page through documents matching `filter`, in insertion order
    pub async fn list(&self, filter: Document, skip: u64, limit: u64) -> AppResult<Vec<D>> {
        // limit(0) means "no limit" to the server
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(filter)
            .sort(doc! { "_id": 1 })
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;

        let documents: Vec<D> = cursor.try_collect().await?;
        Ok(documents)
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
