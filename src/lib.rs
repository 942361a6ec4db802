//! `CodeValley` client - authenticated access to the `CodeValley` social coding platform.
//!
//! This crate provides the request pipeline of the `CodeValley` client: wire DTOs,
//! a session token store, bearer-authorized HTTP clients, and repositories that map
//! backend failures into typed results.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing repositories and use cases.
pub mod application;
/// Domain layer containing entities, errors, the session and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing headless screen models.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "codevalley";
