//! HTTP client construction and request execution.

mod client;

pub use client::{ClientFactory, DEFAULT_TIMEOUT, HttpConfig, ServiceClient};
