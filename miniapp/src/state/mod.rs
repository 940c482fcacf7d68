//! # Reactive State Module
//!
//! One store per feature area, each owning the cached server state for
//! its screen and exposing it through [`Observable`] cells that views
//! subscribe to.
//!
//! ```text
//! ┌─────────────┐   subscribe    ┌──────────────┐   ApiService   ┌─────────┐
//! │    View     │ ◄───────────── │    Store     │ ─────────────► │ Backend │
//! │  (renders)  │                │ (cache+load) │                │  (REST) │
//! └─────────────┘                └──────────────┘                └─────────┘
//! ```
//!
//! ## Caching Rules
//!
//! - `load` replaces the cache wholesale on success and clears it to the
//!   empty state on failure; the loading flag is cleared on both paths.
//! - Writes surface their error to the caller and leave the cache alone,
//!   then apply the narrowest possible local patch on success (or
//!   re-load where no patch is possible).
//! - Concurrent loads are not serialized; the last response to land
//!   wins. Only [`TransactionStore::load_more`] carries an in-flight
//!   guard, since appends are not idempotent.

pub mod cards;
pub mod currency;
pub mod faqs;
pub mod observable;
pub mod profile;
pub mod subscriptions;
pub mod transactions;

pub use cards::CardStore;
pub use currency::CurrencyStore;
pub use faqs::FaqStore;
pub use observable::{Observable, Subscription};
pub use profile::ProfileStore;
pub use subscriptions::PlanStore;
pub use transactions::{PeriodSummary, TransactionStore};
