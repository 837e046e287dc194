//! Account entity and role types.

pub mod model;
pub mod role;

pub use model::{Account, CreateAccount, RoleProfile, UpdateAccount};
pub use role::Role;
