//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.
//! Relationships are held as ids and resolved through the repositories,
//! never as embedded references.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

pub use pizza::{NewPizza, Pizza, PizzaId};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantId};
pub use restaurant_pizza::{
    MenuItem, NewRestaurantPizza, Price, RestaurantMenu, RestaurantPizza, RestaurantPizzaDetail,
    RestaurantPizzaId,
};
