//! Repository implementations, one per table, plus the cascade executor.

pub mod account;
pub mod application;
pub mod bookmark;
pub mod cascade;
pub mod job;
pub mod session;

pub use account::AccountRepository;
pub use application::ApplicationRepository;
pub use bookmark::BookmarkRepository;
pub use cascade::CascadeExecutor;
pub use job::JobRepository;
pub use session::SessionRepository;
