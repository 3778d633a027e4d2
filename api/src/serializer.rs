//! Response payloads
//!
//! Converts domain entities into JSON bodies. List views carry scalar fields
//! only. Detail views embed related entities one level deep and never point
//! back at their parent, so a restaurant's `restaurant_pizzas` carry a `pizza`
//! but no `restaurant`.

use serde::Serialize;

use crate::domain::entities::{
    MenuItem, Pizza, Restaurant, RestaurantMenu, RestaurantPizza, RestaurantPizzaDetail,
};

/// `{id, name, address}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantSummary {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id.0,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
        }
    }
}

/// `{id, name, ingredients}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PizzaSummary {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

impl From<&Pizza> for PizzaSummary {
    fn from(pizza: &Pizza) -> Self {
        Self {
            id: pizza.id.0,
            name: pizza.name.clone(),
            ingredients: pizza.ingredients.clone(),
        }
    }
}

/// A restaurant pizza as seen from its restaurant
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        let rp = &item.restaurant_pizza;
        Self {
            id: rp.id.0,
            price: rp.price,
            pizza_id: rp.pizza_id.0,
            restaurant_id: rp.restaurant_id.0,
            pizza: (&item.pizza).into(),
        }
    }
}

/// GET /restaurants/:id
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantDetailResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuItemResponse>,
}

impl From<&RestaurantMenu> for RestaurantDetailResponse {
    fn from(menu: &RestaurantMenu) -> Self {
        Self {
            id: menu.restaurant.id.0,
            name: menu.restaurant.name.clone(),
            address: menu.restaurant.address.clone(),
            restaurant_pizzas: menu.items.iter().map(Into::into).collect(),
        }
    }
}

/// POST /restaurant_pizzas
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantPizzaResponse {
    pub id: i32,
    pub price: i32,
    pub pizza_id: i32,
    pub restaurant_id: i32,
    pub pizza: PizzaSummary,
    pub restaurant: RestaurantSummary,
}

impl RestaurantPizzaResponse {
    fn new(rp: &RestaurantPizza, restaurant: &Restaurant, pizza: &Pizza) -> Self {
        Self {
            id: rp.id.0,
            price: rp.price,
            pizza_id: rp.pizza_id.0,
            restaurant_id: rp.restaurant_id.0,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}

impl From<&RestaurantPizzaDetail> for RestaurantPizzaResponse {
    fn from(detail: &RestaurantPizzaDetail) -> Self {
        Self::new(&detail.restaurant_pizza, &detail.restaurant, &detail.pizza)
    }
}
