//! Repositories over the `CodeValley` services.

mod post_repository;
mod user_repository;

pub use post_repository::{PostRepository, language_from_url};
pub use user_repository::UserRepository;
