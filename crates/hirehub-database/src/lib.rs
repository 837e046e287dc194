//! # hirehub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all HireHub entities, plus the transactional
//! cascade executor for multi-table deletes.

pub mod connection;
pub mod migration;
pub mod repositories;
