//! SeaORM adapter for RestaurantRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantId};
use crate::domain::ports::RestaurantRepository;
use crate::entity::{restaurant_pizzas, restaurants};
use crate::error::DomainError;

/// SQL implementation of RestaurantRepository
pub struct SqlRestaurantRepository {
    db: DatabaseConnection,
}

impl SqlRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantRepository for SqlRestaurantRepository {
    async fn list(&self) -> Result<Vec<Restaurant>, DomainError> {
        let results = restaurants::Entity::find()
            .order_by_asc(restaurants::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let result = restaurants::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_ids(&self, ids: &[RestaurantId]) -> Result<Vec<Restaurant>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = restaurants::Entity::find()
            .filter(restaurants::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .order_by_asc(restaurants::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, restaurant: &NewRestaurant) -> Result<Restaurant, DomainError> {
        let model = restaurants::ActiveModel {
            name: Set(restaurant.name.clone()),
            address: Set(restaurant.address.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &RestaurantId) -> Result<Option<u64>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = restaurants::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .is_some();

        if !exists {
            txn.rollback()
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;
            return Ok(None);
        }

        // Cascade explicitly; sqlite connections may have foreign keys disabled
        let removed = restaurant_pizzas::Entity::delete_many()
            .filter(restaurant_pizzas::Column::RestaurantId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        restaurants::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(removed.rows_affected))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        restaurants::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl From<restaurants::Model> for Restaurant {
    fn from(model: restaurants::Model) -> Self {
        Restaurant {
            id: RestaurantId(model.id),
            name: model.name,
            address: model.address,
        }
    }
}
