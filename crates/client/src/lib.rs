//! JSON REST client for the warehouse API.
//!
//! Thin transport layer: typed endpoints, status-code mapping, nothing
//! else. Business rules live in `stockroom-domain`; orchestration in
//! `stockroom-service`.

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
