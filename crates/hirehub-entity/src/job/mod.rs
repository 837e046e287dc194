//! Job posting entity.

pub mod model;

pub use model::{CreateJob, Job, UpdateJob};
