//! RestaurantPizza domain entity
//!
//! The priced association between a restaurant and a pizza: "this restaurant
//! offers this pizza at this price". Associations are only ever created
//! through [`NewRestaurantPizza`], whose price has already been checked.

use serde::{Deserialize, Serialize};

use super::{Pizza, PizzaId, Restaurant, RestaurantId};
use crate::error::ValidationError;

/// Unique identifier for a restaurant pizza
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RestaurantPizzaId(pub i32);

impl std::fmt::Display for RestaurantPizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price within the accepted bounds.
///
/// The only way to obtain a `Price` is [`Price::new`], so holding one
/// proves the bound was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i32);

impl Price {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 30;

    /// Validate a raw price. Out-of-range values are rejected, never clamped.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::PriceOutOfRange(value));
        }
        // Bounded above, so the narrowing cannot truncate.
        Ok(Self(value as i32))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted restaurant pizza
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizza {
    pub id: RestaurantPizzaId,
    pub price: i32,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

/// Data needed to create a new restaurant pizza
#[derive(Debug, Clone)]
pub struct NewRestaurantPizza {
    pub price: Price,
    pub restaurant_id: RestaurantId,
    pub pizza_id: PizzaId,
}

impl NewRestaurantPizza {
    pub fn new(price: Price, restaurant_id: RestaurantId, pizza_id: PizzaId) -> Self {
        Self {
            price,
            restaurant_id,
            pizza_id,
        }
    }
}

/// A restaurant pizza together with the pizza it points at
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}

/// A restaurant with every pizza it offers
#[derive(Debug, Clone)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub items: Vec<MenuItem>,
}

/// A restaurant pizza together with both of its parents
#[derive(Debug, Clone)]
pub struct RestaurantPizzaDetail {
    pub restaurant_pizza: RestaurantPizza,
    pub restaurant: Restaurant,
    pub pizza: Pizza,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_bounds() {
        assert_eq!(Price::new(1).unwrap().get(), 1);
        assert_eq!(Price::new(15).unwrap().get(), 15);
        assert_eq!(Price::new(30).unwrap().get(), 30);
    }

    #[test]
    fn price_rejects_below_minimum() {
        assert_eq!(Price::new(0), Err(ValidationError::PriceOutOfRange(0)));
        assert_eq!(Price::new(-5), Err(ValidationError::PriceOutOfRange(-5)));
    }

    #[test]
    fn price_rejects_above_maximum() {
        assert_eq!(Price::new(31), Err(ValidationError::PriceOutOfRange(31)));
        assert_eq!(Price::new(99), Err(ValidationError::PriceOutOfRange(99)));
    }

    #[test]
    fn price_rejects_values_wider_than_storage() {
        // Would wrap to 1 if narrowed before the check
        let wide = i64::from(u32::MAX) + 2;
        assert!(Price::new(wide).is_err());
        assert!(Price::new(i64::MIN).is_err());
    }

    #[test]
    fn new_restaurant_pizza_keeps_checked_price() {
        let new = NewRestaurantPizza::new(Price::new(10).unwrap(), RestaurantId(1), PizzaId(2));
        assert_eq!(new.price.get(), 10);
        assert_eq!(new.restaurant_id, RestaurantId(1));
        assert_eq!(new.pizza_id, PizzaId(2));
    }
}
