//! Success value returned by session operations

use rust_decimal::Decimal;
use std::fmt;

/// Outcome of an accepted operation
///
/// `message` is the text shown to the operator. `balance` carries the
/// computed new balance for operations that change one (withdrawal).
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub message: String,
    pub balance: Option<Decimal>,
}

impl Receipt {
    pub fn new(message: impl Into<String>) -> Self {
        Receipt {
            message: message.into(),
            balance: None,
        }
    }

    pub fn with_balance(message: impl Into<String>, balance: Decimal) -> Self {
        Receipt {
            message: message.into(),
            balance: Some(balance),
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
