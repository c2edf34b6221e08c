//! HTTP client for the research backend's REST endpoints.
//!
//! [`ApiClient`] holds the connection settings and exposes one async method
//! per endpoint. The free functions in [`api`] call through a process-wide
//! client built from `config.toml`, which is what the UI uses.

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error_convert;

pub use client::{AccountOverview, ApiClient};
