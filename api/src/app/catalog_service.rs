//! Catalog service
//!
//! Restaurants, pizzas and the prices restaurants charge for them.
//! Relationships are resolved through explicit id lookups against the
//! repositories; nothing here holds state between calls.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{
    MenuItem, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaId, Price, Restaurant,
    RestaurantId, RestaurantMenu, RestaurantPizzaDetail,
};
use crate::domain::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use crate::error::{AppError, DomainError, ValidationError};

/// Service for browsing and editing the pizza catalogue
pub struct CatalogService<RR, PR, RPR>
where
    RR: RestaurantRepository,
    PR: PizzaRepository,
    RPR: RestaurantPizzaRepository,
{
    restaurants: Arc<RR>,
    pizzas: Arc<PR>,
    restaurant_pizzas: Arc<RPR>,
}

impl<RR, PR, RPR> CatalogService<RR, PR, RPR>
where
    RR: RestaurantRepository,
    PR: PizzaRepository,
    RPR: RestaurantPizzaRepository,
{
    pub fn new(restaurants: Arc<RR>, pizzas: Arc<PR>, restaurant_pizzas: Arc<RPR>) -> Self {
        Self {
            restaurants,
            pizzas,
            restaurant_pizzas,
        }
    }

    /// List every restaurant
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        Ok(self.restaurants.list().await?)
    }

    /// Get a restaurant together with every pizza it offers
    pub async fn get_restaurant(&self, id: &RestaurantId) -> Result<RestaurantMenu, AppError> {
        let restaurant = self.restaurants.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(restaurant_id = %id, "Restaurant not found");
            DomainError::NotFound("Restaurant".to_string())
        })?;

        let restaurant_pizzas = self.restaurant_pizzas.find_by_restaurant(id).await?;

        let mut pizza_ids: Vec<PizzaId> = restaurant_pizzas.iter().map(|rp| rp.pizza_id).collect();
        pizza_ids.sort();
        pizza_ids.dedup();

        let pizzas: HashMap<PizzaId, Pizza> = self
            .pizzas
            .find_by_ids(&pizza_ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let items = restaurant_pizzas
            .into_iter()
            .filter_map(|restaurant_pizza| {
                let Some(pizza) = pizzas.get(&restaurant_pizza.pizza_id) else {
                    tracing::warn!(
                        restaurant_pizza_id = %restaurant_pizza.id,
                        pizza_id = %restaurant_pizza.pizza_id,
                        "Skipping restaurant pizza with dangling pizza reference"
                    );
                    return None;
                };
                Some(MenuItem {
                    pizza: pizza.clone(),
                    restaurant_pizza,
                })
            })
            .collect();

        Ok(RestaurantMenu { restaurant, items })
    }

    /// Pizzas offered by a restaurant, without prices
    // The two read-through views and pizza deletion have no route
    #[allow(dead_code)]
    pub async fn pizzas_for_restaurant(&self, id: &RestaurantId) -> Result<Vec<Pizza>, AppError> {
        let menu = self.get_restaurant(id).await?;
        let mut pizzas: Vec<Pizza> = menu.items.into_iter().map(|item| item.pizza).collect();
        pizzas.sort_by_key(|p| p.id);
        pizzas.dedup_by_key(|p| p.id);
        Ok(pizzas)
    }

    /// Restaurants offering a pizza
    #[allow(dead_code)]
    pub async fn restaurants_for_pizza(&self, id: &PizzaId) -> Result<Vec<Restaurant>, AppError> {
        if self.pizzas.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound("Pizza".to_string()).into());
        }

        let mut restaurant_ids: Vec<RestaurantId> = self
            .restaurant_pizzas
            .find_by_pizza(id)
            .await?
            .into_iter()
            .map(|rp| rp.restaurant_id)
            .collect();
        restaurant_ids.sort();
        restaurant_ids.dedup();

        Ok(self.restaurants.find_by_ids(&restaurant_ids).await?)
    }

    /// Delete a restaurant and every restaurant pizza referencing it.
    /// The pizzas themselves are kept.
    pub async fn delete_restaurant(&self, id: &RestaurantId) -> Result<(), AppError> {
        match self.restaurants.delete(id).await? {
            Some(removed) => {
                tracing::info!(
                    restaurant_id = %id,
                    restaurant_pizzas_removed = removed,
                    "Deleted restaurant"
                );
                Ok(())
            }
            None => {
                tracing::debug!(restaurant_id = %id, "Restaurant not found");
                Err(DomainError::NotFound("Restaurant".to_string()).into())
            }
        }
    }

    /// List every pizza
    pub async fn list_pizzas(&self) -> Result<Vec<Pizza>, AppError> {
        Ok(self.pizzas.list().await?)
    }

    /// Delete a pizza and every restaurant pizza referencing it
    #[allow(dead_code)]
    pub async fn delete_pizza(&self, id: &PizzaId) -> Result<(), AppError> {
        match self.pizzas.delete(id).await? {
            Some(removed) => {
                tracing::info!(
                    pizza_id = %id,
                    restaurant_pizzas_removed = removed,
                    "Deleted pizza"
                );
                Ok(())
            }
            None => Err(DomainError::NotFound("Pizza".to_string()).into()),
        }
    }

    /// Add a restaurant
    pub async fn add_restaurant(&self, restaurant: &NewRestaurant) -> Result<Restaurant, AppError> {
        let restaurant = self.restaurants.create(restaurant).await?;
        tracing::info!(
            restaurant_id = %restaurant.id,
            name = %restaurant.name,
            "Created restaurant"
        );
        Ok(restaurant)
    }

    /// Add a pizza
    pub async fn add_pizza(&self, pizza: &NewPizza) -> Result<Pizza, AppError> {
        let pizza = self.pizzas.create(pizza).await?;
        tracing::info!(pizza_id = %pizza.id, name = %pizza.name, "Created pizza");
        Ok(pizza)
    }

    /// Offer a pizza at a restaurant for a price.
    ///
    /// The price bound and both references are all checked before anything
    /// is written, and every failure is reported together.
    pub async fn create_restaurant_pizza(
        &self,
        price: i64,
        restaurant_id: RestaurantId,
        pizza_id: PizzaId,
    ) -> Result<RestaurantPizzaDetail, AppError> {
        let mut errors = Vec::new();

        let price = match Price::new(price) {
            Ok(price) => Some(price),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let restaurant = self.restaurants.find_by_id(&restaurant_id).await?;
        if restaurant.is_none() {
            errors.push(ValidationError::UnknownRestaurant(restaurant_id.0));
        }

        let pizza = self.pizzas.find_by_id(&pizza_id).await?;
        if pizza.is_none() {
            errors.push(ValidationError::UnknownPizza(pizza_id.0));
        }

        let (Some(price), Some(restaurant), Some(pizza)) = (price, restaurant, pizza) else {
            tracing::debug!(?errors, "Rejected restaurant pizza");
            return Err(DomainError::Validation(errors).into());
        };

        let new = NewRestaurantPizza::new(price, restaurant.id, pizza.id);
        let restaurant_pizza = self.restaurant_pizzas.create(&new).await?;

        tracing::info!(
            restaurant_pizza_id = %restaurant_pizza.id,
            restaurant_id = %restaurant.id,
            pizza_id = %pizza.id,
            price = restaurant_pizza.price,
            "Created restaurant pizza"
        );

        Ok(RestaurantPizzaDetail {
            restaurant_pizza,
            restaurant,
            pizza,
        })
    }
}
