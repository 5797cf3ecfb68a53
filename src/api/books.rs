//! Book endpoints, including ownership

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::{common::parse_object_id, Book, BookFields, ListQuery, MessageResponse},
};

use super::{JsonBody, ValidatedQuery};

/// List books in storage order
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of books", body = Vec<Book>),
        (status = 422, description = "Malformed paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list(&query).await?;
    Ok(Json(books))
}

/// Create a new book (initially unowned)
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookFields,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 422, description = "Invalid book", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonBody(fields): JsonBody<BookFields>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.create(fields).await?;
    Ok(Json(book))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_object_id(&id, "book")?;
    let book = state.services.books.get(id).await?;
    Ok(Json(book))
}

/// Replace a book's fields (the owner is kept)
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = BookFields,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 422, description = "Invalid book", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<BookFields>,
) -> AppResult<Json<Book>> {
    let id = parse_object_id(&id, "book")?;
    let book = state.services.books.update(id, &fields).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_object_id(&id, "book")?;
    state.services.books.delete(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

/// Assign a free book to a user
#[utoipa::path(
    put,
    path = "/books/{id}/assign/{user_id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID"),
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Book assigned", body = Book),
        (status = 404, description = "Book or user not found", body = ErrorResponse),
        (status = 409, description = "Book already owned", body = ErrorResponse)
    )
)]
pub async fn assign_book(
    State(state): State<crate::AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> AppResult<Json<Book>> {
    let id = parse_object_id(&id, "book")?;
    let user_id = parse_object_id(&user_id, "user")?;
    let book = state.services.books.assign(id, user_id).await?;
    Ok(Json(book))
}

/// Release an owned book
#[utoipa::path(
    put,
    path = "/books/{id}/release",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book released", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 409, description = "Book not owned", body = ErrorResponse)
    )
)]
pub async fn release_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = parse_object_id(&id, "book")?;
    let book = state.services.books.release(id).await?;
    Ok(Json(book))
}

/// List books owned by a user
#[utoipa::path(
    get,
    path = "/users/{id}/owned_books",
    tag = "books",
    params(
        ("id" = String, Path, description = "User ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Page of owned books", body = Vec<Book>),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 422, description = "Malformed paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_owned_books(
    State(state): State<crate::AppState>,
    Path(user_id): Path<String>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let user_id = parse_object_id(&user_id, "user")?;
    let books = state.services.books.list_owned(user_id, &query).await?;
    Ok(Json(books))
}
