use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::restaurant_pizzas::Entity")]
    RestaurantPizzas,
}

impl Related<super::restaurant_pizzas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantPizzas.def()
    }
}

impl Related<super::pizzas::Entity> for Entity {
    fn to() -> RelationDef {
        super::restaurant_pizzas::Relation::Pizzas.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::restaurant_pizzas::Relation::Restaurants.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
