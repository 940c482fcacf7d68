//! # Backend API Client Module
//!
//! HTTP client for the CardWatch REST backend. Handles the Telegram auth
//! exchange, cards, transaction history, profile, subscriptions, currency
//! rates and FAQ content.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient struct and request plumbing
//! ├── interceptor.rs   - Bearer-header decision (pure)
//! ├── auth.rs          - POST /api/auth/telegram
//! ├── cards.rs         - GET/POST/DELETE /api/cards*
//! ├── transactions.rs  - GET /api/history/transactions
//! ├── profile.rs       - GET/PUT /api/profile*
//! ├── subscriptions.rs - GET /api/subscriptions/plans, POST .../change
//! ├── currency.rs      - GET /api/currency/overview, /api/currency/pairs
//! └── faqs.rs          - GET /api/faqs
//! ```
//!
//! Endpoint functions are free `async fn`s taking `&ApiClient`, returning
//! `Result<T, String>` with user-presentable messages. The
//! [`crate::core::ApiService`] trait implemented on [`ApiClient`] delegates
//! to them one-for-one.

pub mod auth;
pub mod cards;
pub mod client;
pub mod currency;
pub mod faqs;
pub mod interceptor;
pub mod profile;
pub mod subscriptions;
pub mod transactions;

pub use client::ApiClient;
pub use transactions::TransactionQuery;
