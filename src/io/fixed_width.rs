//! Fixed-width field helpers shared by the accounts and transaction files
//!
//! All functions are pure (no I/O). Widths are measured in characters, not
//! bytes, so holder names with non-ASCII letters line up the same way as
//! ASCII ones.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Width of the rendered amount / balance field
pub const AMOUNT_WIDTH: usize = 8;

/// Width of the holder name field
pub const NAME_WIDTH: usize = 20;

/// Width of the account number field
pub const ACCOUNT_NUMBER_WIDTH: usize = 5;

/// Left-pad `text` with zeros to `width` characters, keeping a leading sign
/// in front of the padding. Text already at or beyond `width` is returned
/// unchanged.
pub fn zfill(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let padding = "0".repeat(width - len);
    match text.strip_prefix(['+', '-']) {
        Some(rest) => format!("{}{}{}", &text[..1], padding, rest),
        None => format!("{}{}", padding, text),
    }
}

/// Left-justify `text` in a field of `width` characters, truncating overflow
pub fn ljust_truncate(text: &str, width: usize) -> String {
    format!("{:<width$.width$}", text, width = width)
}

/// Render a monetary amount as two-decimal text zero-filled to the amount
/// field width. The padding is applied to the formatted text, so values
/// wider than the field are emitted in full.
///
/// Extra places are rounded half to even on the exact decimal value:
/// `10.015` renders as `00010.02` and `10.025` as `00010.02`.
pub fn format_amount(amount: Decimal) -> String {
    zfill(&format!("{:.2}", amount.round_dp(2)), AMOUNT_WIDTH)
}

/// Parse operator or file supplied amount text
///
/// Accepts plain decimal notation (`12.50`) and scientific notation
/// (`1.5e2`). Surrounding whitespace is ignored.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
