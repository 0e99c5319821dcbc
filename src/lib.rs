//! # Roombook
//!
//! Meeting-room reservation service: users, rooms and reservations behind
//! a REST API, persisted through SeaORM.
//!
//! ## Architecture
//!
//! - **shared**: error type, pagination, shutdown coordination
//! - **domain**: entities, booking rules and repository traits
//! - **application**: per-resource services (overlap and ownership checks)
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: axum router, DTOs and OpenAPI document
//! - **server**: process lifecycle used by the `roombook` binary

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

pub use interfaces::http::create_api_router;
