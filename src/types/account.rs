//! Account-related types for the banking front end
//!
//! This module defines the Account structure loaded from the Current Bank
//! Accounts file and the in-session mutators applied by the controller.

use crate::io::fixed_width::{
    format_amount, ljust_truncate, zfill, ACCOUNT_NUMBER_WIDTH, NAME_WIDTH,
};
use rust_decimal::Decimal;

/// Account status as stored in the one-character status column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Disabled,
}

impl AccountStatus {
    /// Status column character
    pub fn as_char(self) -> char {
        match self {
            AccountStatus::Active => 'A',
            AccountStatus::Disabled => 'D',
        }
    }

    /// Decode the status column. Only `D` marks a disabled account; any
    /// other text, including an empty column, is treated as active.
    pub fn from_code(code: &str) -> Self {
        if code == "D" {
            AccountStatus::Disabled
        } else {
            AccountStatus::Active
        }
    }
}

/// One bank account
///
/// The account number is fixed at construction and never changes. Balance
/// is not re-validated on mutation; callers check sufficiency first.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: String,

    /// Holder name, at most 20 characters when written to a file
    pub holder_name: String,

    pub status: AccountStatus,

    /// Current balance with two-decimal precision
    pub balance: Decimal,
}

impl Account {
    pub fn new(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        status: AccountStatus,
        balance: Decimal,
    ) -> Self {
        Account {
            account_number: account_number.into(),
            holder_name: holder_name.into(),
            status,
            balance,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn is_disabled(&self) -> bool {
        self.status == AccountStatus::Disabled
    }

    /// Mark the account disabled. Disabling twice is harmless.
    pub fn disable(&mut self) {
        self.status = AccountStatus::Disabled;
    }

    /// Debit `amount` if the balance covers it
    ///
    /// Returns `false` and leaves the balance untouched when the balance is
    /// below `amount`.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Credit `amount` unconditionally
    pub fn deposit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Format this account as one fixed-width Current Bank Accounts line
    ///
    /// Layout: `NNNNN NAME(20) S BALANCE(8)`
    pub fn to_file_string(&self) -> String {
        format!(
            "{} {} {} {}",
            zfill(&self.account_number, ACCOUNT_NUMBER_WIDTH),
            ljust_truncate(&self.holder_name, NAME_WIDTH),
            self.status.as_char(),
            format_amount(self.balance)
        )
    }
}
