//! # machinehub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `machinehub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Map between domain types and database rows
//!
//! The `machines` table is expected to exist already. [`Database::create_schema`]
//! is available for local development and tests.
//!
//! ## Dependency rule
//! Depends on `machinehub-app` (for port traits) and `machinehub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod machine_repo;
pub mod pool;

pub use machine_repo::SqliteMachineRepository;
pub use pool::{Config, Database};
