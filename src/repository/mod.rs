//! Repository layer for document store operations

pub mod books;
pub mod documents;
pub mod rentals;
pub mod users;

use bson::doc;
use mongodb::{options::ClientOptions, Client, Database};

pub use documents::{DocumentRepository, StoredDocument};

use crate::{
    config::DatabaseConfig,
    error::AppResult,
    models::{BookDocument, RentalDocument, UserDocument},
};

/// Main repository struct holding one typed handle per collection
#[derive(Clone)]
pub struct Repository {
    pub db: Database,
    pub books: DocumentRepository<BookDocument>,
    pub users: DocumentRepository<UserDocument>,
    pub rentals: DocumentRepository<RentalDocument>,
}

impl Repository {
    /// Create a new repository on the given database
    pub fn new(db: Database) -> Self {
        Self {
            books: DocumentRepository::new(&db),
            users: DocumentRepository::new(&db),
            rentals: DocumentRepository::new(&db),
            db,
        }
    }

    /// Build the shared client and select the configured database.
    ///
    /// The driver connects lazily, so this does not fail when the server
    /// is down; use [`Repository::ping`] for that.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        let client = Client::with_options(options)?;
        Ok(Self::new(client.database(&config.name)))
    }

    /// Round-trip to the server
    pub async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
