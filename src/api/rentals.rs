//! Rental endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::{common::parse_object_id, ListQuery, MessageResponse, Rental, RentalFields},
};

use super::{JsonBody, ValidatedQuery};

/// List rentals in storage order
#[utoipa::path(
    get,
    path = "/rents",
    tag = "rents",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of rentals", body = Vec<Rental>),
        (status = 422, description = "Malformed paging parameters", body = ErrorResponse)
    )
)]
pub async fn list_rentals(
    State(state): State<crate::AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> AppResult<Json<Vec<Rental>>> {
    let rentals = state.services.rentals.list(&query).await?;
    Ok(Json(rentals))
}

/// Record a rental
#[utoipa::path(
    post,
    path = "/rents",
    tag = "rents",
    request_body = RentalFields,
    responses(
        (status = 200, description = "Rental created", body = Rental),
        (status = 422, description = "Invalid rental", body = ErrorResponse)
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    JsonBody(fields): JsonBody<RentalFields>,
) -> AppResult<Json<Rental>> {
    let rental = state.services.rentals.create(fields).await?;
    Ok(Json(rental))
}

/// Get rental by ID
#[utoipa::path(
    get,
    path = "/rents/{id}",
    tag = "rents",
    params(("id" = String, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental details", body = Rental),
        (status = 404, description = "Rental not found", body = ErrorResponse)
    )
)]
pub async fn get_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Rental>> {
    let id = parse_object_id(&id, "rental")?;
    let rental = state.services.rentals.get(id).await?;
    Ok(Json(rental))
}

/// Replace a rental
#[utoipa::path(
    put,
    path = "/rents/{id}",
    tag = "rents",
    params(("id" = String, Path, description = "Rental ID")),
    request_body = RentalFields,
    responses(
        (status = 200, description = "Rental updated", body = Rental),
        (status = 404, description = "Rental not found", body = ErrorResponse),
        (status = 422, description = "Invalid rental", body = ErrorResponse)
    )
)]
pub async fn update_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<RentalFields>,
) -> AppResult<Json<Rental>> {
    let id = parse_object_id(&id, "rental")?;
    let rental = state.services.rentals.update(id, &fields).await?;
    Ok(Json(rental))
}

/// Delete a rental
#[utoipa::path(
    delete,
    path = "/rents/{id}",
    tag = "rents",
    params(("id" = String, Path, description = "Rental ID")),
    responses(
        (status = 200, description = "Rental deleted", body = MessageResponse),
        (status = 404, description = "Rental not found", body = ErrorResponse)
    )
)]
pub async fn delete_rental(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_object_id(&id, "rental")?;
    state.services.rentals.delete(id).await?;
    Ok(Json(MessageResponse::new("Rental deleted successfully")))
}
