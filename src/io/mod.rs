//! I/O module
//!
//! Handles the two fixed-width text files the front end reads and writes.
//!
//! # Components
//!
//! - `fixed_width` - Field padding, truncation and amount parsing helpers
//! - `accounts_file` - Current Bank Accounts file parsing and rendering
//! - `transaction_file` - Bank Account Transaction file rendering and output

pub mod accounts_file;
pub mod fixed_width;
pub mod transaction_file;

pub use accounts_file::{format_accounts, parse_accounts};
pub use fixed_width::parse_amount;
pub use transaction_file::{format_transactions, transaction_file_name, write_transaction_file};
