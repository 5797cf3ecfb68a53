//! User management service

use bson::{doc, oid::ObjectId};

use super::ownership;
use crate::{
    error::AppResult,
    models::{ListQuery, User, UserFields},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, fields: UserFields) -> AppResult<User> {
        let user = self.repository.users.create(fields).await?;
        tracing::info!("Created user id={}", user.id);
        Ok(user.into())
    }

    pub async fn get(&self, id: ObjectId) -> AppResult<User> {
        self.repository.users.get(id).await.map(User::from)
    }

    pub async fn update(&self, id: ObjectId, fields: &UserFields) -> AppResult<User> {
        let user = self.repository.users.update(id, fields).await?;
        tracing::debug!("Updated user id={}", id);
        Ok(user.into())
    }

    /// Free every book the user owns, then delete it.
    ///
    /// Rentals referencing the user are left as they are.
    pub async fn delete(&self, id: ObjectId) -> AppResult<u64> {
        let books_updated = ownership::remove_owner(&self.repository, id).await?;
        tracing::info!("Deleted user id={}, released {} book(s)", id, books_updated);
        Ok(books_updated)
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<User>> {
        let users = self
            .repository
            .users
            .list(doc! {}, query.skip(), query.limit())
            .await?;
        Ok(users.into_iter().map(User::from).collect())
    }
}
