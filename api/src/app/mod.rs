//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the repository ports.

pub mod catalog_service;
pub mod seed;

pub use catalog_service::CatalogService;
pub use seed::seed_demo_data;
