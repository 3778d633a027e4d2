//! Domain layer
//!
//! The pizza catalogue model, free of HTTP and storage concerns.
//! - `entities`: Restaurants, pizzas and the priced links between them
//! - `ports`: Repository traits the storage adapters implement

pub mod entities;
pub mod ports;
