//! # CardWatch Mini App - Client Core
//!
//! The client core of the CardWatch Telegram Mini App: users view aggregated
//! card balances, transaction history, currency exchange rates and manage a
//! subscription plan from a mobile client embedded in Telegram's WebView.
//! This crate contains everything below the rendering layer; views bind to
//! the reactive stores it exposes.
//!
//! ## Architecture
//!
//! Every feature area repeats the same shape:
//!
//! ```text
//! View ──▶ Feature Store ──▶ ApiClient ──▶ CardWatch backend
//!              │                 │
//!              │                 └── bearer header from SessionStore
//!              │                     (fallback token when anonymous)
//!              └── Observable<T> values views subscribe to
//! ```
//!
//! A store holds exactly one cached value per entity collection. A successful
//! load replaces it wholesale; a failed load clears it to empty so views show
//! an empty state instead of stale data. Transaction history additionally
//! supports guarded `load_more` pagination appends.
//!
//! ## Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              miniapp (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client (rustls)                  │
//! │  Tokio         - Async runtime                         │
//! │  parking_lot   - Store state locks                     │
//! │  tracing       - Structured logging                    │
//! │  shared        - Wire DTOs                             │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTP/JSON                    │ host commands
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  CardWatch API  │          │   Telegram WebView      │
//! │  (REST backend) │          │   (initData, chrome)    │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`app::MiniApp`] dependency-injection container; wires config,
//!   storage, session, HTTP client, Telegram bridge and the feature stores,
//!   and owns the startup/logout lifecycle.
//! - **core**: error type, configuration, and the [`core::ApiService`] trait
//!   that lets stores run against a mock backend in tests.
//! - **services**: device storage, session token persistence, the Telegram
//!   bridge, and the per-endpoint HTTP client under `services::api`.
//! - **state**: [`state::Observable`] (single-value publish/subscribe) and the
//!   six feature stores (cards, transactions, profile, plans, currency, FAQ).
//! - **ui**: presentation-state helpers with no rendering - the card swipe
//!   machine and spending summary derivations.
//! - **utils**: input validation for the add-card form.
//!
//! ## Concurrency Model
//!
//! All state lives behind `parking_lot::RwLock` with locks held for minimal
//! duration. There is no cross-call ordering guarantee beyond last-write-wins:
//! if two loads for the same store race, whichever response lands last is the
//! cached one. The only in-flight guard is on pagination (`load_more`), which
//! refuses to overlap itself or run past the final page.

// Re-export main modules for testing and integration
pub mod app;
pub mod core;
pub mod services;
pub mod state;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::MiniApp;
pub use crate::core::{AppError, Result};
