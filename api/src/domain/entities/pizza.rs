//! Pizza domain entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a pizza
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PizzaId(pub i32);

impl std::fmt::Display for PizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pizza recipe; `ingredients` is a freeform description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
}

/// Data needed to create a new pizza
#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}
