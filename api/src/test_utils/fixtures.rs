//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{NewPizza, NewRestaurant};

/// The restaurant used throughout the API scenarios
pub fn dominion() -> NewRestaurant {
    NewRestaurant {
        name: "Dominion".to_string(),
        address: "1 Main St".to_string(),
    }
}

/// Create a restaurant with a specific name
pub fn test_restaurant_named(name: &str) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        address: format!("{} Plaza", name),
    }
}

/// The pizza used throughout the API scenarios
pub fn margherita() -> NewPizza {
    NewPizza {
        name: "Margherita".to_string(),
        ingredients: "Tomato, Cheese".to_string(),
    }
}

/// Create a pizza with a specific name
pub fn test_pizza_named(name: &str) -> NewPizza {
    NewPizza {
        name: name.to_string(),
        ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
    }
}
