//! Pizzeria API Server
//!
//! Restaurants, pizzas and the prices restaurants charge for them, over HTTP/JSON.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    response::Html,
    routing::{get, post},
    Json, Router,
};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod serializer;

#[cfg(test)]
mod test_utils;


use adapters::{
    create_schema, SqlPizzaRepository, SqlRestaurantPizzaRepository, SqlRestaurantRepository,
};
use app::{seed_demo_data, CatalogService};
use config::Config;

/// Catalog service wired to the SQL adapters
pub type SqlCatalogService =
    CatalogService<SqlRestaurantRepository, SqlPizzaRepository, SqlRestaurantPizzaRepository>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SqlCatalogService>,
}

impl AppState {
    /// Build every adapter and service over one database handle
    pub fn new(db: DatabaseConnection) -> Self {
        let restaurant_repo = Arc::new(SqlRestaurantRepository::new(db.clone()));
        let pizza_repo = Arc::new(SqlPizzaRepository::new(db.clone()));
        let restaurant_pizza_repo = Arc::new(SqlRestaurantPizzaRepository::new(db));

        Self {
            catalog: Arc::new(CatalogService::new(
                restaurant_repo,
                pizza_repo,
                restaurant_pizza_repo,
            )),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/restaurants", get(handlers::list_restaurants))
        .route(
            "/restaurants/:id",
            get(handlers::get_restaurant).delete(handlers::delete_restaurant),
        )
        .route("/pizzas", get(handlers::list_pizzas))
        .route("/restaurant_pizzas", post(handlers::create_restaurant_pizza))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pizzeria_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Pizzeria API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to the database
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    create_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database connected");

    let state = AppState::new(db);

    if config.seed_demo_data {
        seed_demo_data(state.catalog.as_ref())
            .await
            .context("Failed to seed demo data")?;
    }

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
