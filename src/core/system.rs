//! Session controller
//!
//! [`BankingSystem`] owns the loaded accounts, the session transaction log
//! and the login [`Session`]. Every transaction entry point follows the same
//! sequence:
//!
//! 1. Check login state (and admin privilege for create, delete, disable,
//!    changeplan)
//! 2. Resolve the acting holder: the explicit name for admins, the logged-in
//!    name for standard users
//! 3. Look up the account(s) by value against live state
//! 4. Validate
//! 5. Mutate in-memory state (withdrawal, transfer, paybill, disable, delete)
//! 6. Append the transaction record
//! 7. Add to the session running total (withdrawal, transfer, paybill)
//!
//! Deposits, creates and changeplans are recorded only; their effect shows
//! up the next time the accounts file is loaded.

use crate::core::session::{LoginRequest, Session, SessionState};
use crate::core::validator;
use crate::io::accounts_file::parse_accounts;
use crate::io::fixed_width::{zfill, ACCOUNT_NUMBER_WIDTH};
use crate::io::transaction_file::format_transactions;
use crate::types::{Account, BankingError, Receipt, Transaction};
use rust_decimal::Decimal;

/// Result of every session operation
pub type SessionResult = Result<Receipt, BankingError>;

#[derive(Debug, Default)]
pub struct BankingSystem {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    session: Session,
}

impl BankingSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded accounts with the contents of an accounts file
    pub fn load_accounts(&mut self, content: &str) -> usize {
        self.accounts = parse_accounts(content);
        log::info!("Loaded {} accounts", self.accounts.len());
        self.accounts.len()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Transactions accepted so far in the current session
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn find_account_by_number(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number() == account_number)
    }

    /// Find an account matching both holder name and account number
    pub fn find_user_account(&self, holder_name: &str, account_number: &str) -> Option<&Account> {
        self.user_account_index(holder_name, account_number)
            .map(|idx| &self.accounts[idx])
    }

    fn user_account_index(&self, holder_name: &str, account_number: &str) -> Option<usize> {
        self.accounts.iter().position(|account| {
            account.holder_name == holder_name && account.account_number() == account_number
        })
    }

    fn number_index(&self, account_number: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.account_number() == account_number)
    }

    pub fn login(&mut self, request: LoginRequest) -> SessionResult {
        let message = match &request {
            LoginRequest::Admin => "Admin session started.".to_string(),
            LoginRequest::Standard { holder_name } => {
                format!("Standard user {} logged in.", holder_name)
            }
        };
        self.session.login(request)?;
        self.transactions.clear();

        log::info!("{message}");
        Ok(Receipt::new(message))
    }

    pub fn logout(&mut self) -> SessionResult {
        self.session.logout()?;
        log::info!(
            "Session ended with {} accepted transactions",
            self.transactions.len()
        );
        Ok(Receipt::new(
            "Session ended. Transaction file ready for download.",
        ))
    }

    fn require_login(&self) -> Result<(), BankingError> {
        if !self.session.is_logged_in() {
            return Err(BankingError::NotLoggedIn);
        }
        Ok(())
    }

    fn require_admin(&self, operation: &'static str) -> Result<(), BankingError> {
        self.require_login()?;
        if !self.session.is_admin() {
            return Err(BankingError::privilege_required(operation));
        }
        Ok(())
    }

    /// Holder the transaction acts for. Admins name the holder per call; a
    /// missing name matches no account.
    fn acting_holder(&self, holder_name: Option<&str>) -> String {
        match self.session.state() {
            SessionState::Standard { holder_name } => holder_name.clone(),
            _ => holder_name.unwrap_or_default().to_string(),
        }
    }

    fn record(&mut self, tx: Transaction) {
        log::debug!("Recording transaction: {}", tx.to_file_string());
        self.transactions.push(tx);
    }

    fn rejected<T>(operation: &str, error: BankingError) -> Result<T, BankingError> {
        log::warn!("{operation} rejected: {error}");
        Err(error)
    }

    pub fn withdraw(
        &mut self,
        account_number: &str,
        amount: Decimal,
        holder_name: Option<&str>,
    ) -> SessionResult {
        self.require_login()?;

        let owner = self.acting_holder(holder_name);
        let idx = self.user_account_index(&owner, account_number);
        if let Err(e) = validator::validate_withdrawal(
            idx.map(|i| &self.accounts[i]),
            amount,
            self.session.is_admin(),
            self.session.totals().withdrawals,
        ) {
            return Self::rejected("Withdrawal", e);
        }
        let Some(idx) = idx else {
            return Self::rejected("Withdrawal", BankingError::AccountNotFound);
        };

        let account = &mut self.accounts[idx];
        if !account.withdraw(amount) {
            return Self::rejected("Withdrawal", BankingError::InsufficientFunds);
        }
        let balance = account.balance;

        self.record(Transaction::withdrawal(&owner, account_number, amount));
        let totals = self.session.totals_mut();
        totals.withdrawals = totals.withdrawals.saturating_add(amount);

        log::info!("Withdrawal of {amount} from {account_number} accepted");
        Ok(Receipt::with_balance(
            format!(
                "Withdrawal of ${:.2} successful. New balance: ${:.2}",
                amount, balance
            ),
            balance,
        ))
    }

    /// Move funds from one of the holder's accounts to any account
    ///
    /// The destination is looked up by number only and is credited
    /// immediately.
    pub fn transfer(
        &mut self,
        source_number: &str,
        target_number: &str,
        amount: Decimal,
        holder_name: Option<&str>,
    ) -> SessionResult {
        self.require_login()?;

        let owner = self.acting_holder(holder_name);
        let source_idx = self.user_account_index(&owner, source_number);
        let target_idx = self.number_index(target_number);
        if let Err(e) = validator::validate_transfer(
            source_idx.map(|i| &self.accounts[i]),
            target_idx.map(|i| &self.accounts[i]),
            amount,
            self.session.is_admin(),
            self.session.totals().transfers,
        ) {
            return Self::rejected("Transfer", e);
        }
        let (Some(source_idx), Some(target_idx)) = (source_idx, target_idx) else {
            return Self::rejected("Transfer", BankingError::SourceAccountNotFound);
        };

        if !self.accounts[source_idx].withdraw(amount) {
            return Self::rejected("Transfer", BankingError::InsufficientSourceFunds);
        }
        self.accounts[target_idx].deposit(amount);

        self.record(Transaction::transfer(
            &owner,
            source_number,
            target_number,
            amount,
        ));
        let totals = self.session.totals_mut();
        totals.transfers = totals.transfers.saturating_add(amount);

        log::info!("Transfer of {amount} from {source_number} to {target_number} accepted");
        Ok(Receipt::with_balance(
            format!("Transfer of ${:.2} successful.", amount),
            self.accounts[source_idx].balance,
        ))
    }

    pub fn paybill(
        &mut self,
        account_number: &str,
        amount: Decimal,
        company: &str,
        holder_name: Option<&str>,
    ) -> SessionResult {
        self.require_login()?;

        let owner = self.acting_holder(holder_name);
        let idx = self.user_account_index(&owner, account_number);
        if let Err(e) = validator::validate_paybill(
            idx.map(|i| &self.accounts[i]),
            amount,
            company,
            self.session.is_admin(),
            self.session.totals().paybills,
        ) {
            return Self::rejected("Paybill", e);
        }
        let Some(idx) = idx else {
            return Self::rejected("Paybill", BankingError::AccountNotFound);
        };

        let account = &mut self.accounts[idx];
        if !account.withdraw(amount) {
            return Self::rejected("Paybill", BankingError::InsufficientFunds);
        }
        let balance = account.balance;

        self.record(Transaction::paybill(&owner, account_number, amount, company));
        let totals = self.session.totals_mut();
        totals.paybills = totals.paybills.saturating_add(amount);

        log::info!("Paybill of {amount} from {account_number} to {company} accepted");
        Ok(Receipt::with_balance(
            format!("Bill payment of ${:.2} to {} successful.", amount, company),
            balance,
        ))
    }

    /// Record a deposit for the next session. The in-memory balance is not
    /// changed.
    pub fn deposit(
        &mut self,
        account_number: &str,
        amount: Decimal,
        holder_name: Option<&str>,
    ) -> SessionResult {
        self.require_login()?;

        let owner = self.acting_holder(holder_name);
        if let Err(e) =
            validator::validate_deposit(self.find_user_account(&owner, account_number), amount)
        {
            return Self::rejected("Deposit", e);
        }

        self.record(Transaction::deposit(&owner, account_number, amount));

        log::info!("Deposit of {amount} to {account_number} recorded");
        Ok(Receipt::new(format!(
            "Deposit of ${:.2} accepted (available next session).",
            amount
        )))
    }

    /// Record a new account for the next session. The account list is not
    /// changed.
    pub fn create(&mut self, holder_name: &str, initial_balance: Decimal) -> SessionResult {
        self.require_admin("Create account")?;

        let new_number = self.next_account_number();
        let exists = self.find_account_by_number(&new_number).is_some();
        if let Err(e) = validator::validate_create(holder_name, initial_balance, exists) {
            return Self::rejected("Create", e);
        }

        self.record(Transaction::create(holder_name, &new_number, initial_balance));

        log::info!("Account {new_number} for {holder_name} recorded");
        Ok(Receipt::new(format!(
            "Account {} created for {} (available next session).",
            new_number, holder_name
        )))
    }

    /// Remove the account matching both holder name and number
    pub fn delete(&mut self, holder_name: &str, account_number: &str) -> SessionResult {
        self.require_admin("Delete account")?;

        if let Err(e) =
            validator::validate_account_exists(self.find_user_account(holder_name, account_number))
        {
            return Self::rejected("Delete", e);
        }

        self.accounts.retain(|account| {
            !(account.holder_name == holder_name && account.account_number() == account_number)
        });
        self.record(Transaction::delete(holder_name, account_number));

        log::info!("Account {account_number} for {holder_name} deleted");
        Ok(Receipt::new(format!(
            "Account {} for {} deleted.",
            account_number, holder_name
        )))
    }

    pub fn disable(&mut self, holder_name: &str, account_number: &str) -> SessionResult {
        self.require_admin("Disable account")?;

        let idx = self.user_account_index(holder_name, account_number);
        if let Err(e) = validator::validate_disable(idx.map(|i| &self.accounts[i])) {
            return Self::rejected("Disable", e);
        }
        let Some(idx) = idx else {
            return Self::rejected("Disable", BankingError::AccountNotFound);
        };

        self.accounts[idx].disable();
        self.record(Transaction::disable(holder_name, account_number));

        log::info!("Account {account_number} for {holder_name} disabled");
        Ok(Receipt::new(format!(
            "Account {} for {} disabled.",
            account_number, holder_name
        )))
    }

    /// Record a payment plan change. Account state is not changed.
    pub fn change_plan(&mut self, holder_name: &str, account_number: &str) -> SessionResult {
        self.require_admin("Change plan")?;

        if let Err(e) =
            validator::validate_account_exists(self.find_user_account(holder_name, account_number))
        {
            return Self::rejected("Changeplan", e);
        }

        self.record(Transaction::change_plan(holder_name, account_number));

        log::info!("Plan change for {account_number} recorded");
        Ok(Receipt::new(format!(
            "Payment plan changed for account {}.",
            account_number
        )))
    }

    /// Render the transaction file for the current session
    pub fn transaction_file(&self) -> String {
        format_transactions(&self.transactions)
    }

    /// Next sequential account number: one past the largest numeric account
    /// number loaded, zero-padded to five digits. Non-numeric numbers are
    /// ignored.
    fn next_account_number(&self) -> String {
        let max = self
            .accounts
            .iter()
            .filter_map(|account| account.account_number().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        zfill(&(max + 1).to_string(), ACCOUNT_NUMBER_WIDTH)
    }
}
