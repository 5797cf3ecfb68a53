//! Debug-only reset endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
    pub books_deleted: u64,
    pub users_deleted: u64,
}

/// Delete every book and user (rentals are kept). No confirmation asked.
#[utoipa::path(
    delete,
    path = "/delete_all",
    tag = "admin",
    responses(
        (status = 200, description = "Books and users removed", body = ResetResponse)
    )
)]
pub async fn delete_all(State(state): State<crate::AppState>) -> AppResult<Json<ResetResponse>> {
    let counts = state.services.admin.delete_all().await?;
    Ok(Json(ResetResponse {
        message: "All books and users deleted".to_string(),
        books_deleted: counts.books,
        users_deleted: counts.users,
    }))
}
