//! Business logic services

pub mod admin;
pub mod books;
pub mod ownership;
pub mod rentals;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub users: users::UsersService,
    pub rentals: rentals::RentalsService,
    pub admin: admin::AdminService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone()),
            admin: admin::AdminService::new(repository),
        }
    }
}
