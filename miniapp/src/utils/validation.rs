//! Add-card form validation.
//!
//! Runs before anything is sent to the backend, so the form can mark
//! fields as the user types. The backend re-validates everything; these
//! checks only exist to fail fast with a message next to the field.

use chrono::{Datelike, NaiveDate, Utc};

/// Maximum length of the user-chosen card label.
pub const MAX_CARD_NAME_LEN: usize = 25;

/// Outcome of a single field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Card number: exactly 16 digits once spaces are stripped.
pub fn validate_card_number(value: &str) -> ValidationResult {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.is_empty() {
        return ValidationResult::err("Card number is required");
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Card number may contain digits only");
    }
    if digits.len() != 16 {
        return ValidationResult::err("Card number must be 16 digits");
    }

    ValidationResult::ok()
}

/// Expiry in `MM/YY` form, no earlier than the current month.
pub fn validate_expiry_date(value: &str) -> ValidationResult {
    validate_expiry_date_at(value, Utc::now().date_naive())
}

fn validate_expiry_date_at(value: &str, today: NaiveDate) -> ValidationResult {
    let (month_str, year_str) = match value.split_once('/') {
        Some(parts) => parts,
        None => return ValidationResult::err("Expiry must be in MM/YY format"),
    };

    let well_formed = month_str.len() == 2
        && year_str.len() == 2
        && month_str.chars().all(|c| c.is_ascii_digit())
        && year_str.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return ValidationResult::err("Expiry must be in MM/YY format");
    }

    let month: u32 = month_str.parse().unwrap_or(0);
    if !(1..=12).contains(&month) {
        return ValidationResult::err("Expiry month must be between 01 and 12");
    }

    // The card works through the last day of its expiry month.
    let year = 2000 + year_str.parse::<i32>().unwrap_or(0);
    if (year, month) < (today.year(), today.month()) {
        return ValidationResult::err("Card has expired");
    }

    ValidationResult::ok()
}

/// User-chosen card label: non-empty after trimming, at most
/// [`MAX_CARD_NAME_LEN`] characters.
pub fn validate_card_name(value: &str) -> ValidationResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return ValidationResult::err("Card name is required");
    }
    if trimmed.chars().count() > MAX_CARD_NAME_LEN {
        return ValidationResult::err("Card name must be 25 characters or fewer");
    }

    ValidationResult::ok()
}

/// SMS confirmation code: exactly 6 digits.
pub fn validate_otp(value: &str) -> ValidationResult {
    if value.len() == 6 && value.chars().all(|c| c.is_ascii_digit()) {
        ValidationResult::ok()
    } else {
        ValidationResult::err("Code must be 6 digits")
    }
}

/// Strips the expiry input down to the four digits the backend expects
/// (`MMYY`, no separator).
pub fn expiry_wire_format(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
