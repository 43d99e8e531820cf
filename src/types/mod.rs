//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and status types
//! - `transaction`: Transaction records and codes
//! - `receipt`: Success value of session operations
//! - `error`: Error types for the banking front end

pub mod account;
pub mod error;
pub mod receipt;
pub mod transaction;

pub use account::{Account, AccountStatus};
pub use error::{BankingError, ErrorKind};
pub use receipt::Receipt;
pub use transaction::{Transaction, TransactionCode};
