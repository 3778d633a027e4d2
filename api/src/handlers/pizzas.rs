//! Pizza handlers

use axum::{extract::State, Json};

use crate::error::AppError;
use crate::serializer::PizzaSummary;
use crate::AppState;

/// GET /pizzas
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaSummary>>, AppError> {
    let pizzas = state.catalog.list_pizzas().await?;
    Ok(Json(pizzas.iter().map(Into::into).collect()))
}
