//! Maintenance operations (reset, connectivity)

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct AdminService {
    repository: Repository,
}

/// Documents removed by a reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetCounts {
    pub books: u64,
    pub users: u64,
}

impl AdminService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Empty the books and users collections. Rentals are kept.
    pub async fn delete_all(&self) -> AppResult<ResetCounts> {
        let books = self.repository.books.delete_all().await?;
        let users = self.repository.users.delete_all().await?;
        tracing::warn!("Reset: removed {} book(s) and {} user(s)", books, users);
        Ok(ResetCounts { books, users })
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
