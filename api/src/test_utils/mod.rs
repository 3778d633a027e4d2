//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory catalogue implements every repository port over one shared
//! set of tables, so cascades behave the way they do in SQL. HTTP and adapter
//! tests use a real in-memory SQLite database instead (see `database`).

pub mod database;
pub mod fixtures;
pub mod mocks;

pub use database::*;
pub use fixtures::*;
pub use mocks::*;
