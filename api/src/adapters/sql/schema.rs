//! Idempotent schema creation
//!
//! Creates the three catalogue tables if they are absent. Foreign keys follow
//! the `fk_<table>_<column>_<referred table>` naming convention and cascade on
//! delete.

use sea_orm::sea_query::{
    ColumnDef, Expr, ForeignKey, ForeignKeyAction, Table, TableCreateStatement,
};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::domain::entities::Price;
use crate::entity::{pizzas, restaurant_pizzas, restaurants};
use crate::error::DomainError;

/// Name a foreign key constraint from its table, column and referred table
pub fn foreign_key_name(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{}_{}_{}", table, column, referred_table)
}

fn restaurants_table() -> TableCreateStatement {
    Table::create()
        .table(restaurants::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(restaurants::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(restaurants::Column::Name).string().not_null())
        .col(
            ColumnDef::new(restaurants::Column::Address)
                .string()
                .not_null(),
        )
        .to_owned()
}

fn pizzas_table() -> TableCreateStatement {
    Table::create()
        .table(pizzas::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(pizzas::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(pizzas::Column::Name).string().not_null())
        .col(
            ColumnDef::new(pizzas::Column::Ingredients)
                .string()
                .not_null(),
        )
        .to_owned()
}

fn restaurant_pizzas_table() -> TableCreateStatement {
    Table::create()
        .table(restaurant_pizzas::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(restaurant_pizzas::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(restaurant_pizzas::Column::Price)
                .integer()
                .not_null()
                .check(
                    Expr::col(restaurant_pizzas::Column::Price).between(Price::MIN, Price::MAX),
                ),
        )
        .col(
            ColumnDef::new(restaurant_pizzas::Column::RestaurantId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(restaurant_pizzas::Column::PizzaId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name(foreign_key_name(
                    "restaurant_pizzas",
                    "restaurant_id",
                    "restaurants",
                ))
                .from(
                    restaurant_pizzas::Entity,
                    restaurant_pizzas::Column::RestaurantId,
                )
                .to(restaurants::Entity, restaurants::Column::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name(foreign_key_name("restaurant_pizzas", "pizza_id", "pizzas"))
                .from(restaurant_pizzas::Entity, restaurant_pizzas::Column::PizzaId)
                .to(pizzas::Entity, pizzas::Column::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// Create every table that does not exist yet. Safe to call on each start.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();

    for statement in [
        restaurants_table(),
        pizzas_table(),
        restaurant_pizzas_table(),
    ] {
        db.execute(backend.build(&statement))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }

    tracing::debug!("Database schema ready");
    Ok(())
}
