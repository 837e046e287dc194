//! Route guards and tower layers.

pub mod cors;
pub mod rbac;
