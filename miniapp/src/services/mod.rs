//! # Services Module
//!
//! External integrations for the CardWatch Mini App client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/         - Backend HTTP client
//! │                  (auth exchange, cards, history, profile,
//! │                   subscriptions, currency, FAQ)
//! ├── storage.rs   - Device key-value storage
//! │                  (JSON file on disk, in-memory for tests)
//! ├── session.rs   - Session token + expiry on top of storage
//! └── telegram.rs  - Telegram WebView bridge
//!                    (init-data exchange, chrome commands)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    MiniApp container                     │
//! │                                                          │
//! │  ┌───────────────┐   ┌───────────────┐   ┌────────────┐  │
//! │  │ TelegramBridge│──▶│   ApiClient   │◀──│  stores    │  │
//! │  └───────┬───────┘   └───────┬───────┘   └────────────┘  │
//! │          │                   │                           │
//! │          ▼                   ▼                           │
//! │  ┌───────────────┐   ┌───────────────┐                   │
//! │  │ SessionStore  │──▶│ KeyValueStorage│                  │
//! │  └───────────────┘   └───────────────┘                   │
//! └──────────────────────────────────────────────────────────┘
//!            │                   │
//!            │ host commands     │ HTTP/JSON + Bearer
//!            ▼                   ▼
//!   Telegram WebView      CardWatch backend
//! ```
//!
//! The bridge writes the session through [`session::SessionStore`]; the HTTP
//! client reads it back on every request to build the `Authorization` header
//! (see [`api::interceptor`]). Storage is the only shared mutable resource,
//! and each access is a single atomic key-value operation.

pub mod api;
pub mod session;
pub mod storage;
pub mod telegram;
