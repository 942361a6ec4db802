//! Use case implementations.

mod session_use_case;

pub use session_use_case::{SessionUseCase, TokenSource};
