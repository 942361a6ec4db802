//! Application layer with repositories and use cases.

/// Repositories orchestrating service calls.
pub mod repositories;
/// Use case implementations.
pub mod use_cases;

pub use repositories::{PostRepository, UserRepository};
pub use use_cases::{SessionUseCase, TokenSource};
