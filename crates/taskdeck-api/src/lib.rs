//! HTTP client for the taskdeck task service.
//!
//! One method per endpoint of the task collection, plus normalization of
//! the service's error payloads into a uniform [`ApiError`]. The [`TaskApi`]
//! trait is the seam the GUI depends on, so tests can substitute a scripted
//! client for the real HTTP one.

pub mod client;
pub mod error;

pub use client::{ClientConfig, TaskApi, TaskApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;

pub type Result<T> = std::result::Result<T, ApiError>;
