//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the CardWatch Mini App client and
//! the CardWatch backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Telegram init-data exchange and session DTOs
//!   - **[`dto::card`]**: Card list and card-add (OTP) DTOs
//!   - **[`dto::transaction`]**: Transaction history and pagination DTOs
//!   - **[`dto::profile`]**: Profile, language and auto-pay DTOs
//!   - **[`dto::subscription`]**: Subscription plan catalog DTOs
//!   - **[`dto::currency`]**: Exchange-rate overview and pair DTOs
//!   - **[`dto::faq`]**: FAQ entry DTOs
//! - **[`utils`]**: Shared formatting helpers
//!   - **[`utils::format_money`]**: Render minor-unit amounts for display
//!   - **[`utils::mask_card_number`]**: Mask a PAN for display
//!
//! ## Wire Format
//!
//! The backend is a Spring-style JSON API:
//! - Field names are **camelCase** on the wire; Rust fields stay snake_case and
//!   carry explicit `#[serde(rename = "...")]` attributes
//! - Optional fields are omitted from JSON when `None`
//!   (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Monetary amounts are integers in minor units (tiyin)
//! - All structs implement both `Serialize` and `Deserialize` for
//!   bidirectional communication
//!
//! ## Usage in the client
//!
//! ```rust
//! use shared::dto::auth::TelegramAuthRequest;
//!
//! let request = TelegramAuthRequest {
//!     init_data: "query_id=...&user=...&hash=...".to_string(),
//! };
//!
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"initData\""));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
