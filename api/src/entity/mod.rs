//! SeaORM table entities
//!
//! One module per table. Converted into domain entities by the SQL adapters.

pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;
