//! Restaurant handlers
//!
//! Listing, detail and cascading delete for restaurants.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::entities::RestaurantId;
use crate::error::{AppError, DomainError};
use crate::serializer::{RestaurantDetailResponse, RestaurantSummary};
use crate::AppState;

/// Ids that do not parse as integers name no restaurant
fn restaurant_id(path: Result<Path<i32>, PathRejection>) -> Result<RestaurantId, AppError> {
    match path {
        Ok(Path(id)) => Ok(RestaurantId(id)),
        Err(rejection) => {
            tracing::debug!("Unparseable restaurant id: {}", rejection.body_text());
            Err(DomainError::NotFound("Restaurant".to_string()).into())
        }
    }
}

/// GET /restaurants
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, AppError> {
    let restaurants = state.catalog.list_restaurants().await?;
    Ok(Json(restaurants.iter().map(Into::into).collect()))
}

/// GET /restaurants/:id
///
/// The restaurant with every pizza it offers and the price it charges.
pub async fn get_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetailResponse>, AppError> {
    let id = restaurant_id(path)?;
    let menu = state.catalog.get_restaurant(&id).await?;
    Ok(Json((&menu).into()))
}

/// DELETE /restaurants/:id
///
/// Removes the restaurant and its restaurant pizzas. Pizzas are kept.
pub async fn delete_restaurant(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = restaurant_id(path)?;
    state.catalog.delete_restaurant(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
