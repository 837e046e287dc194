//! HTTP request handlers, grouped by domain.

pub mod account;
pub mod admin;
pub mod auth;
pub mod health;
pub mod job;
