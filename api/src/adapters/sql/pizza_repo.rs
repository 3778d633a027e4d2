//! SeaORM adapter for PizzaRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::entities::{NewPizza, Pizza, PizzaId};
use crate::domain::ports::PizzaRepository;
use crate::entity::{pizzas, restaurant_pizzas};
use crate::error::DomainError;

/// SQL implementation of PizzaRepository
pub struct SqlPizzaRepository {
    db: DatabaseConnection,
}

impl SqlPizzaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PizzaRepository for SqlPizzaRepository {
    async fn list(&self) -> Result<Vec<Pizza>, DomainError> {
        let results = pizzas::Entity::find()
            .order_by_asc(pizzas::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &PizzaId) -> Result<Option<Pizza>, DomainError> {
        let result = pizzas::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_ids(&self, ids: &[PizzaId]) -> Result<Vec<Pizza>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = pizzas::Entity::find()
            .filter(pizzas::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .order_by_asc(pizzas::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn create(&self, pizza: &NewPizza) -> Result<Pizza, DomainError> {
        let model = pizzas::ActiveModel {
            name: Set(pizza.name.clone()),
            ingredients: Set(pizza.ingredients.clone()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &PizzaId) -> Result<Option<u64>, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let exists = pizzas::Entity::find_by_id(id.0)
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

        let removed = restaurant_pizzas::Entity::delete_many()
            .filter(restaurant_pizzas::Column::PizzaId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        pizzas::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(removed.rows_affected))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        pizzas::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

/// Convert SeaORM model to domain entity
impl From<pizzas::Model> for Pizza {
    fn from(model: pizzas::Model) -> Self {
        Pizza {
            id: PizzaId(model.id),
            name: model.name,
            ingredients: model.ingredients,
        }
    }
}
