//! SQL adapters
//!
//! Implementations of repository traits using SeaORM. The same code runs
//! against SQLite and PostgreSQL; the backend is picked by the connection URL.

pub mod pizza_repo;
pub mod restaurant_pizza_repo;
pub mod restaurant_repo;
pub mod schema;


pub use pizza_repo::SqlPizzaRepository;
pub use restaurant_pizza_repo::SqlRestaurantPizzaRepository;
pub use restaurant_repo::SqlRestaurantRepository;
pub use schema::create_schema;
