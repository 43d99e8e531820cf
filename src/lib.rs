//! Banking Front End Library
//! # Overview
//!
//! A single-session banking console. An operator logs in as a standard
//! account holder or as an administrator, enters transactions that are
//! validated against the loaded Current Bank Accounts file and per-session
//! limits, and at logout receives a fixed-width Bank Account Transaction
//! file for the back office.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Transaction, errors, receipts)
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Business-rule checks and limit constants
//!   - [`core::session`] - Login state and per-session running totals
//!   - [`core::system`] - Session controller applying transactions
//! - [`io`] - Fixed-width accounts and transaction file formats
//! - [`console`] - Prompt flows and the console loop
//! - [`cli`] - CLI arguments parsing and logger setup
//!
//! # Transaction Types
//!
//! - **Withdrawal**, **Transfer**, **Paybill**: applied to balances
//!   immediately; standard sessions are capped at $500.00, $1000.00 and
//!   $2000.00 per session respectively
//! - **Deposit**, **Create**: recorded only; take effect next session
//! - **Delete**, **Disable**: admin only, applied immediately
//! - **Change plan**: admin only, recorded only

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod types;

pub use console::{Console, ConsoleConfig};
pub use core::{BankingSystem, LoginRequest, SessionResult};
pub use io::{format_accounts, format_transactions, parse_accounts};
pub use types::{Account, AccountStatus, BankingError, ErrorKind, Receipt, Transaction, TransactionCode};
