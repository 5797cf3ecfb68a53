//! Assigning books to users, releasing them, and freeing the books of a removed user

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::{
    error::{AppError, AppResult},
    models::{BookDocument, UserDocument},
    repository::{documents::not_found, Repository},
};

/// Store operations the ownership rules rely on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnershipStore: Send + Sync {
    async fn find_book(&self, book_id: ObjectId) -> AppResult<Option<BookDocument>>;

    async fn user_exists(&self, user_id: ObjectId) -> AppResult<bool>;

    /// Conditional write: only matches a book without owner
    async fn claim_owner(
        &self,
        book_id: ObjectId,
        owner: ObjectId,
    ) -> AppResult<Option<BookDocument>>;

    /// Conditional write: only matches an owned book
    async fn release_owner(&self, book_id: ObjectId) -> AppResult<Option<BookDocument>>;

    /// Clear `cur_owner` on every book held by `owner`
    async fn clear_owner_references(&self, owner: ObjectId) -> AppResult<u64>;

    /// Returns false when the user did not exist
    async fn delete_user(&self, user_id: ObjectId) -> AppResult<bool>;
}

#[async_trait]
impl OwnershipStore for Repository {
    async fn find_book(&self, book_id: ObjectId) -> AppResult<Option<BookDocument>> {
        self.books.find(book_id).await
    }

    async fn user_exists(&self, user_id: ObjectId) -> AppResult<bool> {
        self.users.exists(user_id).await
    }

    async fn claim_owner(
        &self,
        book_id: ObjectId,
        owner: ObjectId,
    ) -> AppResult<Option<BookDocument>> {
        self.books.claim_owner(book_id, owner).await
    }

    async fn release_owner(&self, book_id: ObjectId) -> AppResult<Option<BookDocument>> {
        self.books.release_owner(book_id).await
    }

    async fn clear_owner_references(&self, owner: ObjectId) -> AppResult<u64> {
        self.books.clear_owner_references(owner).await
    }

    async fn delete_user(&self, user_id: ObjectId) -> AppResult<bool> {
        self.users.delete(user_id).await
    }
}

fn already_owned(book_id: ObjectId) -> AppError {
    AppError::Conflict(format!("Book with id {} is already owned", book_id))
}

fn not_owned(book_id: ObjectId) -> AppError {
    AppError::Conflict(format!("Book with id {} is not owned", book_id))
}

/// Make `user_id` the owner of a free book.
///
/// Failure order: missing book, already owned, missing user.
pub async fn assign<S>(store: &S, book_id: ObjectId, user_id: ObjectId) -> AppResult<BookDocument>
where
    S: OwnershipStore + ?Sized,
{
    let book = store
        .find_book(book_id)
        .await?
        .ok_or_else(|| not_found::<BookDocument>(book_id))?;

    if book.cur_owner.is_some() {
        return Err(already_owned(book_id));
    }

    if !store.user_exists(user_id).await? {
        return Err(not_found::<UserDocument>(user_id));
    }

    if let Some(book) = store.claim_owner(book_id, user_id).await? {
        return Ok(book);
    }

    // Changed between the read and the conditional write
    match store.find_book(book_id).await? {
        Some(_) => Err(already_owned(book_id)),
        None => Err(not_found::<BookDocument>(book_id)),
    }
}

/// Clear the owner of an owned book
pub async fn release<S>(store: &S, book_id: ObjectId) -> AppResult<BookDocument>
where
    S: OwnershipStore + ?Sized,
{
    let book = store
        .find_book(book_id)
        .await?
        .ok_or_else(|| not_found::<BookDocument>(book_id))?;

    if book.cur_owner.is_none() {
        return Err(not_owned(book_id));
    }

    if let Some(book) = store.release_owner(book_id).await? {
        return Ok(book);
    }

    match store.find_book(book_id).await? {
        Some(_) => Err(not_owned(book_id)),
        None => Err(not_found::<BookDocument>(book_id)),
    }
}

/// Free every book owned by `user_id`, then delete the user.
///
/// Books are cleared even when the user document is already gone, so a
/// dangling `cur_owner` can always be removed this way. The count is only
/// returned when the user existed.
pub async fn remove_owner<S>(store: &S, user_id: ObjectId) -> AppResult<u64>
where
    S: OwnershipStore + ?Sized,
{
    let books_updated = store.clear_owner_references(user_id).await?;

    if !store.delete_user(user_id).await? {
        if books_updated > 0 {
            tracing::warn!(
                "Released {} book(s) held by missing user {}",
                books_updated,
                user_id
            );
        }
        return Err(not_found::<UserDocument>(user_id));
    }

    Ok(books_updated)
}
