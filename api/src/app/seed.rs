//! Demo data
//!
//! A small catalogue inserted on start when `SEED_DEMO_DATA` is set and the
//! store has no restaurants yet.

use crate::domain::entities::{NewPizza, NewRestaurant};
use crate::domain::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use crate::error::AppError;

use super::CatalogService;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price)
const MENU: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// Seed the demo catalogue. Returns `false` if the store already had data.
pub async fn seed_demo_data<RR, PR, RPR>(
    catalog: &CatalogService<RR, PR, RPR>,
) -> Result<bool, AppError>
where
    RR: RestaurantRepository,
    PR: PizzaRepository,
    RPR: RestaurantPizzaRepository,
{
    if !catalog.list_restaurants().await?.is_empty() {
        tracing::info!("Store already has restaurants, skipping demo data");
        return Ok(false);
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = catalog
            .add_restaurant(&NewRestaurant {
                name: name.to_string(),
                address: address.to_string(),
            })
            .await?;
        restaurants.push(restaurant);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = catalog
            .add_pizza(&NewPizza {
                name: name.to_string(),
                ingredients: ingredients.to_string(),
            })
            .await?;
        pizzas.push(pizza);
    }

    for &(restaurant, pizza, price) in MENU {
        catalog
            .create_restaurant_pizza(price, restaurants[restaurant].id, pizzas[pizza].id)
            .await?;
    }

    tracing::info!(
        restaurants = restaurants.len(),
        pizzas = pizzas.len(),
        "Seeded demo data"
    );
    Ok(true)
}
