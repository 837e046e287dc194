//! # hirehub-core
//!
//! Core crate for HireHub. Contains configuration schemas, shared types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other HireHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
