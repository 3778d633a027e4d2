//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite or PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, PizzaId, Restaurant, RestaurantId,
    RestaurantPizza, RestaurantPizzaId,
};
use crate::error::DomainError;

/// Repository for Restaurant entities
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// List every restaurant in storage order
    async fn list(&self) -> Result<Vec<Restaurant>, DomainError>;

    /// Find a restaurant by ID
    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError>;

    /// Find all restaurants whose ID is in `ids`; unknown IDs are skipped
    async fn find_by_ids(&self, ids: &[RestaurantId]) -> Result<Vec<Restaurant>, DomainError>;

    /// Create a new restaurant
    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, DomainError>;

    /// Delete a restaurant and all of its restaurant pizzas in one commit.
    ///
    /// Returns `None` if the restaurant does not exist, otherwise the number
    /// of restaurant pizzas removed with it.
    async fn delete(&self, id: &RestaurantId) -> Result<Option<u64>, DomainError>;

    /// Count restaurants
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for Pizza entities
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// List every pizza in storage order
    async fn list(&self) -> Result<Vec<Pizza>, DomainError>;

    /// Find a pizza by ID
    async fn find_by_id(&self, id: &PizzaId) -> Result<Option<Pizza>, DomainError>;

    /// Find all pizzas whose ID is in `ids`; unknown IDs are skipped
    async fn find_by_ids(&self, ids: &[PizzaId]) -> Result<Vec<Pizza>, DomainError>;

    /// Create a new pizza
    async fn create(&self, pizza: &NewPizza) -> Result<Pizza, DomainError>;

    /// Delete a pizza and all of its restaurant pizzas in one commit.
    ///
    /// Returns `None` if the pizza does not exist, otherwise the number
    /// of restaurant pizzas removed with it.
    async fn delete(&self, id: &PizzaId) -> Result<Option<u64>, DomainError>;

    /// Count pizzas
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for RestaurantPizza associations
#[async_trait]
pub trait RestaurantPizzaRepository: Send + Sync {
    /// List every restaurant pizza in storage order
    async fn list(&self) -> Result<Vec<RestaurantPizza>, DomainError>;

    /// Find a restaurant pizza by ID
    async fn find_by_id(
        &self,
        id: &RestaurantPizzaId,
    ) -> Result<Option<RestaurantPizza>, DomainError>;

    /// Find all restaurant pizzas offered by a restaurant
    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<RestaurantPizza>, DomainError>;

    /// Find all restaurant pizzas referencing a pizza
    async fn find_by_pizza(&self, pizza_id: &PizzaId) -> Result<Vec<RestaurantPizza>, DomainError>;

    /// Create a new restaurant pizza
    async fn create(
        &self,
        restaurant_pizza: &NewRestaurantPizza,
    ) -> Result<RestaurantPizza, DomainError>;

    /// Count restaurant pizzas
    async fn count(&self) -> Result<u64, DomainError>;
}
