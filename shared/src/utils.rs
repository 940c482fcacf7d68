//! # Shared Formatting Helpers
//!
//! Display formatting used by every CardWatch surface (client views, the dev
//! binary, log output).
//!
//! ## Money
//!
//! The backend transmits all amounts as integers in minor units (tiyin).
//! [`format_money`] converts to the display form used across the app:
//! two decimals, space-separated thousands.
//!
//! ## Card numbers
//!
//! - [`mask_card_number`] - Mask a full PAN for display (`8600 12** **** 3456`)
//! - [`group_card_number`] - Group a PAN into blocks of four digits
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_money, mask_card_number};
//!
//! assert_eq!(format_money(1_234_567), "12 345.67");
//! assert_eq!(mask_card_number("8600123412343456"), "8600 12** **** 3456");
//! ```

/// Format a minor-unit (tiyin) amount for display.
///
/// The integer amount is divided by 100, rendered with exactly two decimal
/// places, and the integer part is grouped with spaces every three digits.
/// Negative amounts keep a single leading minus sign.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_money;
///
/// assert_eq!(format_money(0), "0.00");
/// assert_eq!(format_money(150_000), "1 500.00");
/// assert_eq!(format_money(-98_765), "-987.65");
/// ```
pub fn format_money(amount: i64) -> String {
    let negative = amount < 0;
    let abs = amount.unsigned_abs();
    let major = abs / 100;
    let cents = abs % 100;

    let digits = major.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, cents)
}

/// Mask a 16-digit PAN for display, keeping the first six and last four digits.
///
/// Produces the form `8600 12** **** 3456`. Inputs shorter than 16 digits are
/// returned unchanged since there is nothing meaningful to mask.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_card_number;
///
/// assert_eq!(mask_card_number("9860010203040545"), "9860 01** **** 0545");
/// assert_eq!(mask_card_number("1234"), "1234");
/// ```
pub fn mask_card_number(card_number: &str) -> String {
    let digits: String = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 16 {
        return card_number.to_string();
    }

    let first4 = &digits[..4];
    let next2 = &digits[4..6];
    let last4 = &digits[12..16];
    format!("{} {}** **** {}", first4, next2, last4)
}

/// Group a card number into blocks of four digits separated by spaces.
///
/// Non-digit characters in the input are dropped before grouping.
///
/// # Examples
///
/// ```rust
/// use shared::utils::group_card_number;
///
/// assert_eq!(group_card_number("8600123412343456"), "8600 1234 1234 3456");
/// ```
pub fn group_card_number(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*ch);
    }
    out
}
