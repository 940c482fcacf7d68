//! # View-Model Helpers
//!
//! Pure presentation logic shared by whichever frontend renders the
//! stores: the card swipe gesture machine and the aggregation helpers
//! behind the home header and the monthly expense chart. Nothing in
//! here talks to the network or holds a lock across calls.

pub mod gesture;
pub mod summary;

pub use gesture::{SwipePhase, SwipeTracker, ACTION_WIDTH, REVEAL_THRESHOLD};
pub use summary::{
    group_by_category, group_by_day, recent, recent_months, total_expenses, total_income,
    CategorySlice, DayGroup, MonthWindow,
};
