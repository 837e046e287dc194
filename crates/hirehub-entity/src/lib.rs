//! # hirehub-entity
//!
//! Domain entity models for HireHub: accounts, job postings, job
//! applications, and server-side sessions. All models derive
//! `sqlx::FromRow` and map one-to-one onto the migration schema.

pub mod account;
pub mod application;
pub mod job;
pub mod session;

pub use account::{Account, Role, RoleProfile};
pub use application::{Application, ApplicationStatus};
pub use job::Job;
pub use session::Session;
