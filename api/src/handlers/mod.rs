//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

pub use pizzas::list_pizzas;
pub use restaurant_pizzas::create_restaurant_pizza;
pub use restaurants::{delete_restaurant, get_restaurant, list_restaurants};
