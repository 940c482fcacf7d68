//! # Core Abstractions
//!
//! Foundational types used throughout the Mini App client:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`config`]**: Runtime configuration (`AppConfig`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust
//! use miniapp::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! Stores take `Arc<dyn ApiService>` instead of the concrete client, so tests
//! substitute a scripted mock and the production wiring passes the real
//! [`crate::services::api::ApiClient`].

pub mod config;
pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use service::ApiService;
