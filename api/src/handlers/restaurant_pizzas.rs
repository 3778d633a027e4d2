//! Restaurant pizza handlers
//!
//! Offering a pizza at a restaurant for a price.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use crate::domain::entities::{PizzaId, RestaurantId};
use crate::error::{AppError, DomainError, ValidationError};
use crate::serializer::RestaurantPizzaResponse;
use crate::AppState;

/// Request body for creating a restaurant pizza
#[derive(Debug, PartialEq, Eq)]
pub struct CreateRestaurantPizzaRequest {
    pub price: i64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

impl CreateRestaurantPizzaRequest {
    /// Read the three required fields, reporting every missing or mistyped one.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let Some(fields) = body.as_object() else {
            return Err(AppError::MalformedBody(
                "Request body must be a JSON object".to_string(),
            ));
        };

        let mut errors = Vec::new();
        let price = read_field(fields, "price", "an integer", &mut errors, |v| v.as_i64());
        let restaurant_id = read_field(fields, "restaurant_id", "an integer id", &mut errors, id);
        let pizza_id = read_field(fields, "pizza_id", "an integer id", &mut errors, id);

        match (price, restaurant_id, pizza_id) {
            (Some(price), Some(restaurant_id), Some(pizza_id)) => Ok(Self {
                price,
                restaurant_id,
                pizza_id,
            }),
            _ => Err(DomainError::Validation(errors).into()),
        }
    }
}

fn id(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|v| i32::try_from(v).ok())
}

fn read_field<T>(
    fields: &Map<String, Value>,
    field: &'static str,
    expected: &'static str,
    errors: &mut Vec<ValidationError>,
    convert: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            errors.push(ValidationError::MissingField(field));
            None
        }
        Some(value) => {
            let converted = convert(value);
            if converted.is_none() {
                errors.push(ValidationError::InvalidField { field, expected });
            }
            converted
        }
    }
}

/// POST /restaurant_pizzas
///
/// Body: `{"price": 10, "restaurant_id": 1, "pizza_id": 1}`.
/// Responds 201 with the new restaurant pizza and both parents embedded.
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;
    let request = CreateRestaurantPizzaRequest::from_json(&body)?;

    let detail = state
        .catalog
        .create_restaurant_pizza(
            request.price,
            RestaurantId(request.restaurant_id),
            PizzaId(request.pizza_id),
        )
        .await?;

    Ok((StatusCode::CREATED, Json((&detail).into())))
}
