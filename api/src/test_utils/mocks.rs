//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaId, Restaurant, RestaurantId,
    RestaurantPizza, RestaurantPizzaId,
};
use crate::domain::ports::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Catalogue
// ============================================================================

#[derive(Default)]
struct Tables {
    restaurants: BTreeMap<RestaurantId, Restaurant>,
    pizzas: BTreeMap<PizzaId, Pizza>,
    restaurant_pizzas: BTreeMap<RestaurantPizzaId, RestaurantPizza>,
    next_id: i32,
    fail_writes: bool,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            Err(DomainError::Database("simulated write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

/// One store backing all three repository ports
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with a database error
    pub fn failing_writes(self) -> Self {
        self.tables.write().unwrap().fail_writes = true;
        self
    }

    /// Insert a restaurant pizza without any checks, for seeding dangling rows
    pub fn with_raw_restaurant_pizza(self, price: i32, restaurant: i32, pizza: i32) -> Self {
        {
            let mut tables = self.tables.write().unwrap();
            let id = RestaurantPizzaId(tables.next_id());
            tables.restaurant_pizzas.insert(
                id,
                RestaurantPizza {
                    id,
                    price,
                    restaurant_id: RestaurantId(restaurant),
                    pizza_id: PizzaId(pizza),
                },
            );
        }
        self
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Restaurant>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.restaurants.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.restaurants.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[RestaurantId]) -> Result<Vec<Restaurant>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .restaurants
            .values()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect())
    }

    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, DomainError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_writable()?;

        let restaurant = Restaurant {
            id: RestaurantId(tables.next_id()),
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
        };
        tables.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn delete(&self, id: &RestaurantId) -> Result<Option<u64>, DomainError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_writable()?;

        if tables.restaurants.remove(id).is_none() {
            return Ok(None);
        }
        let before = tables.restaurant_pizzas.len();
        tables
            .restaurant_pizzas
            .retain(|_, rp| rp.restaurant_id != *id);
        Ok(Some((before - tables.restaurant_pizzas.len()) as u64))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.restaurants.len() as u64)
    }
}

#[async_trait]
impl PizzaRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Pizza>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.pizzas.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &PizzaId) -> Result<Option<Pizza>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.pizzas.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[PizzaId]) -> Result<Vec<Pizza>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .pizzas
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn create(&self, pizza: &NewPizza) -> Result<Pizza, DomainError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_writable()?;

        let pizza = Pizza {
            id: PizzaId(tables.next_id()),
            name: pizza.name.clone(),
            ingredients: pizza.ingredients.clone(),
        };
        tables.pizzas.insert(pizza.id, pizza.clone());
        Ok(pizza)
    }

    async fn delete(&self, id: &PizzaId) -> Result<Option<u64>, DomainError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_writable()?;

        if tables.pizzas.remove(id).is_none() {
            return Ok(None);
        }
        let before = tables.restaurant_pizzas.len();
        tables.restaurant_pizzas.retain(|_, rp| rp.pizza_id != *id);
        Ok(Some((before - tables.restaurant_pizzas.len()) as u64))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.pizzas.len() as u64)
    }
}

#[async_trait]
impl RestaurantPizzaRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<RestaurantPizza>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.restaurant_pizzas.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: &RestaurantPizzaId,
    ) -> Result<Option<RestaurantPizza>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.restaurant_pizzas.get(id).cloned())
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<RestaurantPizza>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .restaurant_pizzas
            .values()
            .filter(|rp| rp.restaurant_id == *restaurant_id)
            .cloned()
            .collect())
    }

    async fn find_by_pizza(&self, pizza_id: &PizzaId) -> Result<Vec<RestaurantPizza>, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .restaurant_pizzas
            .values()
            .filter(|rp| rp.pizza_id == *pizza_id)
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        restaurant_pizza: &NewRestaurantPizza,
    ) -> Result<RestaurantPizza, DomainError> {
        let mut tables = self.tables.write().unwrap();
        tables.check_writable()?;

        if !tables
            .restaurants
            .contains_key(&restaurant_pizza.restaurant_id)
            || !tables.pizzas.contains_key(&restaurant_pizza.pizza_id)
        {
            return Err(DomainError::Database(
                "FOREIGN KEY constraint failed".to_string(),
            ));
        }

        let created = RestaurantPizza {
            id: RestaurantPizzaId(tables.next_id()),
            price: restaurant_pizza.price.get(),
            restaurant_id: restaurant_pizza.restaurant_id,
            pizza_id: restaurant_pizza.pizza_id,
        };
        tables.restaurant_pizzas.insert(created.id, created.clone());
        Ok(created)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let tables = self.tables.read().unwrap();
        Ok(tables.restaurant_pizzas.len() as u64)
    }
}
