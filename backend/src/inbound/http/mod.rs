//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod books;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::{ApiResult, query_config, route_not_found};
