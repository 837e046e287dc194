//! Shared domain-agnostic types.

pub mod public_id;

pub use public_id::generate_public_id;
