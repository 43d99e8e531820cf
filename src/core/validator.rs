//! Business-rule validation
//!
//! Pure functions over already-resolved accounts (`None` when the lookup
//! failed), the requested amount and the session context. Nothing here
//! mutates state.
//!
//! Checks run in a fixed order and the first failure wins:
//! existence, disabled status, domain checks, session caps, then balance
//! sufficiency. Admin sessions skip the session-cap step entirely.

use crate::types::{Account, BankingError};
use rust_decimal::Decimal;

const fn cents(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

/// Cumulative withdrawal limit for one standard session
pub const MAX_WITHDRAWAL_STANDARD: Decimal = cents(50000);

/// Cumulative transfer limit for one standard session
pub const MAX_TRANSFER_STANDARD: Decimal = cents(100000);

/// Cumulative paybill limit for one standard session
pub const MAX_PAYBILL_STANDARD: Decimal = cents(200000);

/// Largest initial balance accepted on create
pub const MAX_ACCOUNT_BALANCE: Decimal = cents(9999999);

/// Longest holder name accepted on create, in characters
pub const MAX_NAME_LENGTH: usize = 20;

/// Companies a bill can be paid to
pub const VALID_COMPANIES: [&str; 3] = ["EC", "CQ", "FI"];

fn require_positive(amount: Decimal) -> Result<(), BankingError> {
    if amount <= Decimal::ZERO {
        return Err(BankingError::NonPositiveAmount);
    }
    Ok(())
}

fn check_session_cap(
    category: &'static str,
    limit: Decimal,
    amount: Decimal,
    is_admin: bool,
    session_total: Decimal,
) -> Result<(), BankingError> {
    if is_admin {
        return Ok(());
    }
    // A total too large to represent is over any cap.
    let exceeded = session_total
        .checked_add(amount)
        .map_or(true, |total| total > limit);
    if exceeded {
        return Err(BankingError::session_limit(category, limit));
    }
    Ok(())
}

pub fn validate_withdrawal(
    account: Option<&Account>,
    amount: Decimal,
    is_admin: bool,
    session_total: Decimal,
) -> Result<(), BankingError> {
    let account = account.ok_or(BankingError::AccountNotFound)?;
    if account.is_disabled() {
        return Err(BankingError::AccountDisabled);
    }
    require_positive(amount)?;
    check_session_cap(
        "withdrawal",
        MAX_WITHDRAWAL_STANDARD,
        amount,
        is_admin,
        session_total,
    )?;
    if account.balance < amount {
        return Err(BankingError::InsufficientFunds);
    }
    Ok(())
}

/// Validate a transfer. The destination balance is only checked for
/// arithmetic overflow, never against the create-time balance limit.
pub fn validate_transfer(
    source: Option<&Account>,
    target: Option<&Account>,
    amount: Decimal,
    is_admin: bool,
    session_total: Decimal,
) -> Result<(), BankingError> {
    let source = source.ok_or(BankingError::SourceAccountNotFound)?;
    let target = target.ok_or(BankingError::DestinationAccountNotFound)?;
    if source.is_disabled() || target.is_disabled() {
        return Err(BankingError::TransferAccountDisabled);
    }
    require_positive(amount)?;
    check_session_cap(
        "transfer",
        MAX_TRANSFER_STANDARD,
        amount,
        is_admin,
        session_total,
    )?;
    if source.balance < amount {
        return Err(BankingError::InsufficientSourceFunds);
    }
    if target.balance.checked_add(amount).is_none() {
        return Err(BankingError::BalanceLimitExceeded {
            max: MAX_ACCOUNT_BALANCE,
        });
    }
    Ok(())
}

pub fn validate_paybill(
    account: Option<&Account>,
    amount: Decimal,
    company: &str,
    is_admin: bool,
    session_total: Decimal,
) -> Result<(), BankingError> {
    let account = account.ok_or(BankingError::AccountNotFound)?;
    if account.is_disabled() {
        return Err(BankingError::AccountDisabled);
    }
    if !VALID_COMPANIES.contains(&company) {
        return Err(BankingError::invalid_company(company));
    }
    require_positive(amount)?;
    check_session_cap(
        "paybill",
        MAX_PAYBILL_STANDARD,
        amount,
        is_admin,
        session_total,
    )?;
    if account.balance < amount {
        return Err(BankingError::InsufficientFunds);
    }
    Ok(())
}

/// Validate a deposit. Deposits have no session cap.
pub fn validate_deposit(account: Option<&Account>, amount: Decimal) -> Result<(), BankingError> {
    let account = account.ok_or(BankingError::AccountNotFound)?;
    if account.is_disabled() {
        return Err(BankingError::AccountDisabled);
    }
    require_positive(amount)
}

pub fn validate_create(
    holder_name: &str,
    initial_balance: Decimal,
    account_exists: bool,
) -> Result<(), BankingError> {
    if holder_name.chars().count() > MAX_NAME_LENGTH {
        return Err(BankingError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    if initial_balance < Decimal::ZERO {
        return Err(BankingError::NegativeInitialBalance);
    }
    if initial_balance > MAX_ACCOUNT_BALANCE {
        return Err(BankingError::BalanceLimitExceeded {
            max: MAX_ACCOUNT_BALANCE,
        });
    }
    if account_exists {
        return Err(BankingError::AccountNumberExists);
    }
    Ok(())
}

/// Existence check used by delete and changeplan
pub fn validate_account_exists(account: Option<&Account>) -> Result<(), BankingError> {
    account.map(|_| ()).ok_or(BankingError::AccountNotFound)
}

pub fn validate_disable(account: Option<&Account>) -> Result<(), BankingError> {
    let account = account.ok_or(BankingError::AccountNotFound)?;
    if account.is_disabled() {
        return Err(BankingError::AccountAlreadyDisabled);
    }
    Ok(())
}
