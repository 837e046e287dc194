//! # hirehub-api
//!
//! HTTP API layer for HireHub built on Axum.
//!
//! Provides all REST endpoints, cookie handling, auth extractors, role
//! guards, DTOs, and error mapping.

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
