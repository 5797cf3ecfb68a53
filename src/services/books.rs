//! Book catalog service

use bson::{doc, oid::ObjectId};

use super::ownership;
use crate::{
    error::AppResult,
    models::{Book, BookDocument, BookFields, ListQuery},
    repository::{documents::not_found, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, fields: BookFields) -> AppResult<Book> {
        let book = self.repository.books.create(fields).await?;
        tracing::info!("Created book id={} isbn={}", book.id, book.isbn);
        Ok(book.into())
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<Book> {
        self.repository.books.get(id).await.map(Book::from)
    }

    /// Replace the bibliographic fields, keeping the current owner
    pub async fn update(&self, id: ObjectId, fields: &BookFields) -> AppResult<Book> {
        let book = self.repository.books.update(id, fields).await?;
        tracing::debug!("Updated book id={}", id);
        Ok(book.into())
    }

    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        if !self.repository.books.delete(id).await? {
            return Err(not_found::<BookDocument>(id));
        }
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Book>> {
        let books = self
            .repository
            .books
            .list(doc! {}, query.skip(), query.limit())
            .await?;
        Ok(books.into_iter().map(Book::from).collect())
    }

    pub async fn assign(&self, book_id: ObjectId, user_id: ObjectId) -> AppResult<Book> {
        let book = ownership::assign(&self.repository, book_id, user_id)
            .await
            .inspect_err(|e| tracing::warn!("Assign book {} to {} refused: {}", book_id, user_id, e))?;
        tracing::info!("Book {} assigned to user {}", book_id, user_id);
        Ok(book.into())
    }

    pub async fn release(&self, book_id: ObjectId) -> AppResult<Book> {
        let book = ownership::release(&self.repository, book_id)
            .await
            .inspect_err(|e| tracing::warn!("Release of book {} refused: {}", book_id, e))?;
        tracing::info!("Book {} released", book_id);
        Ok(book.into())
    }

    /// Books currently owned by `user_id`; the user itself is not looked up
    pub async fn list_owned(&self, user_id: ObjectId, query: &ListQuery) -> AppResult<Vec<Book>> {
        let books = self
            .repository
            .books
            .list_owned(user_id, query.skip(), query.limit())
            .await?;
        Ok(books.into_iter().map(Book::from).collect())
    }
}
