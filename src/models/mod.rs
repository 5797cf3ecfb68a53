//! Data models for Bookshelf

pub mod book;
pub mod common;
pub mod rental;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookDocument, BookFields};
pub use common::{ListQuery, MessageResponse};
pub use rental::{Rental, RentalDocument, RentalFields};
pub use user::{User, UserDeleted, UserDocument, UserFields};
