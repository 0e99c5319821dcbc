//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, validated JSON extractor
//! - `modules`: per-resource DTOs and handlers
//! - `request_id`: correlation ID middleware
//! - `router`: API router with the OpenAPI document

pub mod common;
pub mod modules;
pub mod request_id;
pub mod router;

pub use router::{create_api_router, ApiDoc};
