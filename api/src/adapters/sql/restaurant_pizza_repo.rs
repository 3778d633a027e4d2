//! SeaORM adapter for RestaurantPizzaRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{
    NewRestaurantPizza, PizzaId, RestaurantId, RestaurantPizza, RestaurantPizzaId,
};
use crate::domain::ports::RestaurantPizzaRepository;
use crate::entity::restaurant_pizzas;
use crate::error::DomainError;

/// SQL implementation of RestaurantPizzaRepository
pub struct SqlRestaurantPizzaRepository {
    db: DatabaseConnection,
}

impl SqlRestaurantPizzaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantPizzaRepository for SqlRestaurantPizzaRepository {
    async fn list(&self) -> Result<Vec<RestaurantPizza>, DomainError> {
        let results = restaurant_pizzas::Entity::find()
            .order_by_asc(restaurant_pizzas::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(
        &self,
        id: &RestaurantPizzaId,
    ) -> Result<Option<RestaurantPizza>, DomainError> {
        let result = restaurant_pizzas::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<RestaurantPizza>, DomainError> {
        let results = restaurant_pizzas::Entity::find()
            .filter(restaurant_pizzas::Column::RestaurantId.eq(restaurant_id.0))
            .order_by_asc(restaurant_pizzas::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_pizza(&self, pizza_id: &PizzaId) -> Result<Vec<RestaurantPizza>, DomainError> {
        let results = restaurant_pizzas::Entity::find()
            .filter(restaurant_pizzas::Column::PizzaId.eq(pizza_id.0))
            .order_by_asc(restaurant_pizzas::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(
        &self,
        restaurant_pizza: &NewRestaurantPizza,
    ) -> Result<RestaurantPizza, DomainError> {
        let model = restaurant_pizzas::ActiveModel {
            price: Set(restaurant_pizza.price.get()),
            restaurant_id: Set(restaurant_pizza.restaurant_id.0),
            pizza_id: Set(restaurant_pizza.pizza_id.0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        restaurant_pizzas::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl From<restaurant_pizzas::Model> for RestaurantPizza {
    fn from(model: restaurant_pizzas::Model) -> Self {
        RestaurantPizza {
            id: RestaurantPizzaId(model.id),
            price: model.price,
            restaurant_id: RestaurantId(model.restaurant_id),
            pizza_id: PizzaId(model.pizza_id),
        }
    }
}
