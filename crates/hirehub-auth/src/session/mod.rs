//! Server-side session lifecycle.

pub mod registry;

pub use registry::SessionRegistry;
