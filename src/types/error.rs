//! Error types for the banking front end
//!
//! Every failure the session controller can report is a variant of
//! [`BankingError`]. The `Display` text of each variant is the message shown
//! to the operator, so the wording is part of the observable behaviour and
//! must not drift.
//!
//! # Error Categories
//!
//! Variants are grouped by [`ErrorKind`]:
//!
//! - **AuthenticationState**: not logged in, already logged in
//! - **Authorization**: privileged transaction outside an admin session
//! - **NotFound**: account, source or destination missing
//! - **AccountState**: disabled account
//! - **InputDomain**: bad amount, company code, name length or balance range
//! - **SessionCap**: standard-session cumulative limit exceeded
//! - **InsufficientFunds**: balance below the requested amount
//! - **Conflict**: account number already taken on create
//! - **Io**: file access failures in the console layer

use rust_decimal::Decimal;
use thiserror::Error;

/// Broad category of a [`BankingError`], used for typed branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AuthenticationState,
    Authorization,
    NotFound,
    AccountState,
    InputDomain,
    SessionCap,
    InsufficientFunds,
    Conflict,
    Io,
}

/// Main error type for the banking front end
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankingError {
    /// A transaction was attempted with no active session
    #[error("Must be logged in to perform transactions.")]
    NotLoggedIn,

    /// Logout was requested with no active session
    #[error("Not logged in.")]
    LogoutWithoutSession,

    /// Login was requested while a session is active
    #[error("Already logged in. Please logout first.")]
    AlreadyLoggedIn,

    /// Standard login was requested without a holder name
    #[error("Account holder name required for standard login.")]
    MissingHolderName,

    /// Session type was neither `standard` nor `admin`
    #[error("Invalid login mode. Use \"standard\" or \"admin\".")]
    InvalidLoginMode {
        /// The rejected mode text
        mode: String,
    },

    /// Privileged transaction attempted from a standard session
    #[error("{operation} is a privileged transaction. Admin access required.")]
    PrivilegeRequired {
        /// Operation label, e.g. "Create account"
        operation: &'static str,
    },

    #[error("Account not found.")]
    AccountNotFound,

    #[error("Source account not found.")]
    SourceAccountNotFound,

    #[error("Destination account not found.")]
    DestinationAccountNotFound,

    #[error("Account is disabled.")]
    AccountDisabled,

    /// Either side of a transfer is disabled
    #[error("Source or destination account is disabled.")]
    TransferAccountDisabled,

    #[error("Account is already disabled.")]
    AccountAlreadyDisabled,

    #[error("Amount must be positive.")]
    NonPositiveAmount,

    #[error("Invalid company code. Valid codes: EC, CQ, FI.")]
    InvalidCompany {
        /// The rejected company code
        company: String,
    },

    #[error("Account holder name must be at most {max} characters.")]
    NameTooLong {
        /// Maximum permitted length in characters
        max: usize,
    },

    #[error("Initial balance cannot be negative.")]
    NegativeInitialBalance,

    #[error("Maximum account balance is ${max:.2}.")]
    BalanceLimitExceeded {
        /// Largest balance an account may be created with
        max: Decimal,
    },

    /// Standard-session cumulative limit reached for one category
    #[error("Maximum {category} per session is ${limit:.2}.")]
    SessionLimitExceeded {
        /// Category label: withdrawal, transfer or paybill
        category: &'static str,
        /// Session limit for the category
        limit: Decimal,
    },

    #[error("Insufficient funds.")]
    InsufficientFunds,

    #[error("Insufficient funds in source account.")]
    InsufficientSourceFunds,

    #[error("Account number already exists.")]
    AccountNumberExists,

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl BankingError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankingError::NotLoggedIn
            | BankingError::LogoutWithoutSession
            | BankingError::AlreadyLoggedIn
            | BankingError::MissingHolderName
            | BankingError::InvalidLoginMode { .. } => ErrorKind::AuthenticationState,
            BankingError::PrivilegeRequired { .. } => ErrorKind::Authorization,
            BankingError::AccountNotFound
            | BankingError::SourceAccountNotFound
            | BankingError::DestinationAccountNotFound => ErrorKind::NotFound,
            BankingError::AccountDisabled
            | BankingError::TransferAccountDisabled
            | BankingError::AccountAlreadyDisabled => ErrorKind::AccountState,
            BankingError::NonPositiveAmount
            | BankingError::InvalidCompany { .. }
            | BankingError::NameTooLong { .. }
            | BankingError::NegativeInitialBalance
            | BankingError::BalanceLimitExceeded { .. } => ErrorKind::InputDomain,
            BankingError::SessionLimitExceeded { .. } => ErrorKind::SessionCap,
            BankingError::InsufficientFunds | BankingError::InsufficientSourceFunds => {
                ErrorKind::InsufficientFunds
            }
            BankingError::AccountNumberExists => ErrorKind::Conflict,
            BankingError::FileNotFound { .. } | BankingError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Create a PrivilegeRequired error
    pub fn privilege_required(operation: &'static str) -> Self {
        BankingError::PrivilegeRequired { operation }
    }

    /// Create a SessionLimitExceeded error
    pub fn session_limit(category: &'static str, limit: Decimal) -> Self {
        BankingError::SessionLimitExceeded { category, limit }
    }

    /// Create an InvalidCompany error
    pub fn invalid_company(company: &str) -> Self {
        BankingError::InvalidCompany {
            company: company.to_string(),
        }
    }
}

impl From<std::io::Error> for BankingError {
    fn from(error: std::io::Error) -> Self {
        BankingError::Io {
            message: error.to_string(),
        }
    }
}
