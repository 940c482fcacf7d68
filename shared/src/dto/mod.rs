//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the Mini App client and the CardWatch backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Telegram init-data exchange, session token, error envelope
//! - [`card`] - Card list entries and the two-step card-add (OTP) flow
//! - [`transaction`] - Transaction records and the paginated history envelope
//! - [`profile`] - Profile, language preference and auto-pay DTOs
//! - [`subscription`] - Subscription plan catalog and plan-change DTOs
//! - [`currency`] - Exchange-rate overview and pair snapshots
//! - [`faq`] - FAQ entries
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: camelCase on the wire via explicit `#[serde(rename)]`
//! - **Optional fields**: Omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Amounts**: `i64` minor units (tiyin)
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/telegram
//! Content-Type: application/json
//!
//! {
//!   "initData": "query_id=AAH...&user=%7B%22id%22...&hash=c5011e..."
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "expiresAt": "2025-02-14T10:30:00Z",
//!   "user": { "id": 5012341234, "firstName": "Aziz" }
//! }
//! ```

pub mod auth;
pub mod card;
pub mod currency;
pub mod faq;
pub mod profile;
pub mod subscription;
pub mod transaction;

pub use auth::*;
pub use card::*;
pub use currency::*;
pub use faq::*;
pub use profile::*;
pub use subscription::*;
pub use transaction::*;
