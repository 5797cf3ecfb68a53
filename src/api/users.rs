//! User management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::{common::parse_object_id, ListQuery, User, UserDeleted, UserFields},
};

use super::{JsonBody, ValidatedQuery};

/// List users in storage order
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of users", body = Vec<User>),
        (status = 422, description = "Malformed paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list(&query).await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserFields,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 422, description = "Invalid user", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    JsonBody(fields): JsonBody<UserFields>,
) -> AppResult<Json<User>> {
    let user = state.services.users.create(fields).await?;
    Ok(Json(user))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_object_id(&id, "user")?;
    let user = state.services.users.get(id).await?;
    Ok(Json(user))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UserFields,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Invalid user", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<UserFields>,
) -> AppResult<Json<User>> {
    let id = parse_object_id(&id, "user")?;
    let user = state.services.users.update(id, &fields).await?;
    Ok(Json(user))
}

/// Delete a user and release the books it owns
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = UserDeleted),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserDeleted>> {
    let id = parse_object_id(&id, "user")?;
    let books_updated = state.services.users.delete(id).await?;
    Ok(Json(UserDeleted {
        message: "User deleted successfully".to_string(),
        books_updated,
    }))
}
