//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, books, health, rentals, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.3.0",
        description = "Library catalog REST API: books, users, rentals and book ownership"
    ),
    paths(
        // Health
        health::welcome,
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        books::assign_book,
        books::release_book,
        books::list_owned_books,
        // Users
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Rentals
        rentals::list_rentals,
        rentals::create_rental,
        rentals::get_rental,
        rentals::update_rental,
        rentals::delete_rental,
        // Admin
        admin::delete_all,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookFields,
            crate::models::user::User,
            crate::models::user::UserFields,
            crate::models::user::UserDeleted,
            crate::models::rental::Rental,
            crate::models::rental::RentalFields,
            crate::models::common::MessageResponse,
            admin::ResetResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Welcome and health check endpoints"),
        (name = "books", description = "Book catalog and ownership"),
        (name = "users", description = "User management"),
        (name = "rents", description = "Rental records"),
        (name = "admin", description = "Debug maintenance")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
