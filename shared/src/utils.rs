//! # Shared Utility Functions
//!
//! Number formatting used by the terminal when displaying prices.
//!
//! ## Price Formatting
//!
//! - [`format_thousands`] - Fixed decimals with `,` grouping of the integer part
//! - [`format_usd`] - [`format_thousands`] with two decimals and a `$` prefix
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_usd;
//!
//! assert_eq!(format_usd(67123.456), "$67,123.46");
//! ```

use num_format::{Locale, ToFormattedString};

/// Format `value` with `decimals` fraction digits and `,` between each group of
/// three integer digits.
///
/// Non-finite values are returned in their plain `Display` form.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_thousands;
///
/// assert_eq!(format_thousands(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_thousands(-9876.0, 0), "-9,876");
/// assert_eq!(format_thousands(999.5, 1), "999.5");
/// ```
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    // Rounding can turn e.g. -0.001 into "0.00"; don't print "-0.00"
    if value.is_sign_negative() && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        grouped.push('-');
    }
    match integer.parse::<u128>() {
        Ok(n) => grouped.push_str(&n.to_formatted_string(&Locale::en)),
        // Beyond u128 the digits are float noise anyway
        Err(_) => grouped.push_str(integer),
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Format a USD amount as `$1,234.56`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_usd;
///
/// assert_eq!(format_usd(0.0), "$0.00");
/// assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
/// ```
pub fn format_usd(value: f64) -> String {
    let formatted = format_thousands(value, 2);
    match formatted.strip_prefix('-') {
        Some(unsigned) => format!("-${}", unsigned),
        None => format!("${}", formatted),
    }
}
