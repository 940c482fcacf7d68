//! Client-side helpers with no server involvement.

pub mod validation;

pub use validation::ValidationResult;
