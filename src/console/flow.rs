//! Guided prompt flows
//!
//! Each transaction is entered over several prompts. [`Flow`] is the step
//! the operator is on together with everything collected so far, and
//! [`Flow::advance`] consumes one input line and says what happens next.
//! Nothing in this module touches the session; completed flows produce a
//! fully-parameterized [`Request`] that is applied in a single call.

use crate::core::{BankingSystem, LoginRequest, SessionResult};
use crate::io::parse_amount;
use rust_decimal::Decimal;

pub const INVALID_POSITIVE_AMOUNT: &str = "Invalid amount. Enter a positive number.";
pub const INVALID_NON_NEGATIVE_AMOUNT: &str = "Invalid amount. Enter a non-negative number.";
pub const INVALID_MODE: &str = "Invalid mode. Use standard or admin.";
pub const INVALID_COMMAND: &str = "Invalid command. Use login, logout, withdrawal, transfer, paybill, deposit, create, delete, disable, changeplan.";

/// Privileged transactions that take a holder name and account number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Delete,
    Disable,
    ChangePlan,
}

/// Transactions that can be started from the top-level prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Withdrawal,
    Transfer,
    Paybill,
    Deposit,
    Create,
    Admin(AdminAction),
}

/// Top-level console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Login,
    Logout,
    Start(TransactionKind),
}

impl Command {
    /// Parse a command word, ignoring case
    pub fn parse(text: &str) -> Option<Self> {
        let command = match text.to_lowercase().as_str() {
            "login" => Command::Login,
            "logout" => Command::Logout,
            "withdrawal" | "withdraw" => Command::Start(TransactionKind::Withdrawal),
            "transfer" => Command::Start(TransactionKind::Transfer),
            "paybill" => Command::Start(TransactionKind::Paybill),
            "deposit" => Command::Start(TransactionKind::Deposit),
            "create" => Command::Start(TransactionKind::Create),
            "delete" => Command::Start(TransactionKind::Admin(AdminAction::Delete)),
            "disable" => Command::Start(TransactionKind::Admin(AdminAction::Disable)),
            "changeplan" => Command::Start(TransactionKind::Admin(AdminAction::ChangePlan)),
            _ => return None,
        };
        Some(command)
    }
}

/// A completed transaction entry, ready for the session controller
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Withdrawal {
        holder: Option<String>,
        account: String,
        amount: Decimal,
    },
    Transfer {
        holder: Option<String>,
        source: String,
        target: String,
        amount: Decimal,
    },
    Paybill {
        holder: Option<String>,
        account: String,
        company: String,
        amount: Decimal,
    },
    Deposit {
        holder: Option<String>,
        account: String,
        amount: Decimal,
    },
    Create {
        name: String,
        balance: Decimal,
    },
    Admin {
        action: AdminAction,
        holder: String,
        account: String,
    },
}

impl Request {
    /// Apply the request to the session controller
    pub fn apply(&self, system: &mut BankingSystem) -> SessionResult {
        match self {
            Request::Withdrawal {
                holder,
                account,
                amount,
            } => system.withdraw(account, *amount, holder.as_deref()),
            Request::Transfer {
                holder,
                source,
                target,
                amount,
            } => system.transfer(source, target, *amount, holder.as_deref()),
            Request::Paybill {
                holder,
                account,
                company,
                amount,
            } => system.paybill(account, *amount, company, holder.as_deref()),
            Request::Deposit {
                holder,
                account,
                amount,
            } => system.deposit(account, *amount, holder.as_deref()),
            Request::Create { name, balance } => system.create(name, *balance),
            Request::Admin {
                action: AdminAction::Delete,
                holder,
                account,
            } => system.delete(holder, account),
            Request::Admin {
                action: AdminAction::Disable,
                holder,
                account,
            } => system.disable(holder, account),
            Request::Admin {
                action: AdminAction::ChangePlan,
                holder,
                account,
            } => system.change_plan(holder, account),
        }
    }
}

/// Current prompt step and the data collected before it
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    LoginMode,
    LoginName,
    AccountsFile { login: LoginRequest },
    WithdrawalName,
    WithdrawalAccount { holder: Option<String> },
    WithdrawalAmount { holder: Option<String>, account: String },
    TransferName,
    TransferSource { holder: Option<String> },
    TransferTarget { holder: Option<String>, source: String },
    TransferAmount { holder: Option<String>, source: String, target: String },
    PaybillName,
    PaybillAccount { holder: Option<String> },
    PaybillCompany { holder: Option<String>, account: String },
    PaybillAmount { holder: Option<String>, account: String, company: String },
    DepositName,
    DepositAccount { holder: Option<String> },
    DepositAmount { holder: Option<String>, account: String },
    CreateName,
    CreateBalance { name: String },
    AdminName { action: AdminAction },
    AdminAccount { action: AdminAction, holder: String },
}

/// What the console does after feeding one line to a flow
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Show the next prompt
    Continue(Flow),
    /// Report an input error and stay on the same step
    Retry { error: &'static str, flow: Flow },
    /// Login mode settled; accounts must be loaded before logging in
    BeginLogin(LoginRequest),
    /// Load accounts from `path`, then log in
    Login { request: LoginRequest, path: String },
    /// Hand the finished request to the controller
    Submit(Request),
}

fn positive_amount(text: &str) -> Option<Decimal> {
    parse_amount(text).filter(|amount| *amount > Decimal::ZERO)
}

fn non_negative_amount(text: &str) -> Option<Decimal> {
    parse_amount(text).filter(|amount| *amount >= Decimal::ZERO)
}

impl Flow {
    /// First step of a transaction flow. Admins name the holder first for
    /// withdrawal, transfer, paybill and deposit.
    pub fn start(kind: TransactionKind, is_admin: bool) -> Self {
        match (kind, is_admin) {
            (TransactionKind::Withdrawal, true) => Flow::WithdrawalName,
            (TransactionKind::Withdrawal, false) => Flow::WithdrawalAccount { holder: None },
            (TransactionKind::Transfer, true) => Flow::TransferName,
            (TransactionKind::Transfer, false) => Flow::TransferSource { holder: None },
            (TransactionKind::Paybill, true) => Flow::PaybillName,
            (TransactionKind::Paybill, false) => Flow::PaybillAccount { holder: None },
            (TransactionKind::Deposit, true) => Flow::DepositName,
            (TransactionKind::Deposit, false) => Flow::DepositAccount { holder: None },
            (TransactionKind::Create, _) => Flow::CreateName,
            (TransactionKind::Admin(action), _) => Flow::AdminName { action },
        }
    }

    /// Prompt shown when entering this step
    pub fn prompt(&self) -> &'static str {
        match self {
            Flow::LoginMode => "Enter session type (standard/admin):",
            Flow::AccountsFile { .. } => "Enter path to Current Bank Accounts file:",
            Flow::LoginName
            | Flow::WithdrawalName
            | Flow::TransferName
            | Flow::PaybillName
            | Flow::DepositName
            | Flow::AdminName { .. } => "Enter account holder name:",
            Flow::WithdrawalAccount { .. }
            | Flow::PaybillAccount { .. }
            | Flow::DepositAccount { .. }
            | Flow::AdminAccount { .. } => "Enter account number:",
            Flow::WithdrawalAmount { .. } => "Enter amount to withdraw:",
            Flow::TransferSource { .. } => "Enter source account number:",
            Flow::TransferTarget { .. } => "Enter destination account number:",
            Flow::TransferAmount { .. } => "Enter amount to transfer:",
            Flow::PaybillCompany { .. } => "Enter company code (EC, CQ, FI):",
            Flow::PaybillAmount { .. } => "Enter amount to pay:",
            Flow::DepositAmount { .. } => "Enter amount to deposit:",
            Flow::CreateName => "Enter new account holder name:",
            Flow::CreateBalance { .. } => "Enter initial balance:",
        }
    }

    /// Consume one trimmed, non-empty input line
    pub fn advance(self, text: &str) -> Step {
        let text = text.to_string();
        match self {
            Flow::LoginMode => match text.to_lowercase().as_str() {
                "standard" => Step::Continue(Flow::LoginName),
                mode => match LoginRequest::from_mode(mode, None) {
                    Ok(request) => Step::BeginLogin(request),
                    Err(_) => Step::Retry {
                        error: INVALID_MODE,
                        flow: Flow::LoginMode,
                    },
                },
            },
            Flow::LoginName => Step::BeginLogin(LoginRequest::Standard { holder_name: text }),
            Flow::AccountsFile { login } => Step::Login {
                request: login,
                path: text,
            },

            Flow::WithdrawalName => Step::Continue(Flow::WithdrawalAccount { holder: Some(text) }),
            Flow::WithdrawalAccount { holder } => Step::Continue(Flow::WithdrawalAmount {
                holder,
                account: text,
            }),
            Flow::WithdrawalAmount { holder, account } => match positive_amount(&text) {
                Some(amount) => Step::Submit(Request::Withdrawal {
                    holder,
                    account,
                    amount,
                }),
                None => Step::Retry {
                    error: INVALID_POSITIVE_AMOUNT,
                    flow: Flow::WithdrawalAmount { holder, account },
                },
            },

            Flow::TransferName => Step::Continue(Flow::TransferSource { holder: Some(text) }),
            Flow::TransferSource { holder } => Step::Continue(Flow::TransferTarget {
                holder,
                source: text,
            }),
            Flow::TransferTarget { holder, source } => Step::Continue(Flow::TransferAmount {
                holder,
                source,
                target: text,
            }),
            Flow::TransferAmount {
                holder,
                source,
                target,
            } => match positive_amount(&text) {
                Some(amount) => Step::Submit(Request::Transfer {
                    holder,
                    source,
                    target,
                    amount,
                }),
                None => Step::Retry {
                    error: INVALID_POSITIVE_AMOUNT,
                    flow: Flow::TransferAmount {
                        holder,
                        source,
                        target,
                    },
                },
            },

            Flow::PaybillName => Step::Continue(Flow::PaybillAccount { holder: Some(text) }),
            Flow::PaybillAccount { holder } => Step::Continue(Flow::PaybillCompany {
                holder,
                account: text,
            }),
            Flow::PaybillCompany { holder, account } => Step::Continue(Flow::PaybillAmount {
                holder,
                account,
                company: text.to_uppercase(),
            }),
            Flow::PaybillAmount {
                holder,
                account,
                company,
            } => match positive_amount(&text) {
                Some(amount) => Step::Submit(Request::Paybill {
                    holder,
                    account,
                    company,
                    amount,
                }),
                None => Step::Retry {
                    error: INVALID_POSITIVE_AMOUNT,
                    flow: Flow::PaybillAmount {
                        holder,
                        account,
                        company,
                    },
                },
            },

            Flow::DepositName => Step::Continue(Flow::DepositAccount { holder: Some(text) }),
            Flow::DepositAccount { holder } => Step::Continue(Flow::DepositAmount {
                holder,
                account: text,
            }),
            Flow::DepositAmount { holder, account } => match positive_amount(&text) {
                Some(amount) => Step::Submit(Request::Deposit {
                    holder,
                    account,
                    amount,
                }),
                None => Step::Retry {
                    error: INVALID_POSITIVE_AMOUNT,
                    flow: Flow::DepositAmount { holder, account },
                },
            },

            Flow::CreateName => Step::Continue(Flow::CreateBalance { name: text }),
            Flow::CreateBalance { name } => match non_negative_amount(&text) {
                Some(balance) => Step::Submit(Request::Create { name, balance }),
                None => Step::Retry {
                    error: INVALID_NON_NEGATIVE_AMOUNT,
                    flow: Flow::CreateBalance { name },
                },
            },

            Flow::AdminName { action } => Step::Continue(Flow::AdminAccount {
                action,
                holder: text,
            }),
            Flow::AdminAccount { action, holder } => Step::Submit(Request::Admin {
                action,
                holder,
                account: text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Feed lines through a flow, expecting every step but the last to
    /// continue
    fn run(mut flow: Flow, lines: &[&str]) -> Step {
        let (last, rest) = lines.split_last().expect("at least one line");
        for line in rest {
            match flow.advance(line) {
                Step::Continue(next) => flow = next,
                other => panic!("unexpected step {:?} on {:?}", other, line),
            }
        }
        flow.advance(last)
    }

    #[rstest]
    #[case::login("LOGIN", Some(Command::Login))]
    #[case::logout("logout", Some(Command::Logout))]
    #[case::withdraw_alias("withdraw", Some(Command::Start(TransactionKind::Withdrawal)))]
    #[case::changeplan("ChangePlan", Some(Command::Start(TransactionKind::Admin(AdminAction::ChangePlan))))]
    #[case::unknown("balance", None)]
    fn test_command_parse(#[case] text: &str, #[case] expected: Option<Command>) {
        assert_eq!(Command::parse(text), expected);
    }

    #[rstest]
    #[case::standard_withdrawal(TransactionKind::Withdrawal, false, "Enter account number:")]
    #[case::admin_withdrawal(TransactionKind::Withdrawal, true, "Enter account holder name:")]
    #[case::standard_transfer(TransactionKind::Transfer, false, "Enter source account number:")]
    #[case::create(TransactionKind::Create, true, "Enter new account holder name:")]
    #[case::disable(TransactionKind::Admin(AdminAction::Disable), false, "Enter account holder name:")]
    fn test_start_prompt(
        #[case] kind: TransactionKind,
        #[case] is_admin: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(Flow::start(kind, is_admin).prompt(), expected);
    }

    #[test]
    fn test_login_mode_flow() {
        assert_eq!(Flow::LoginMode.advance("ADMIN"), Step::BeginLogin(LoginRequest::Admin));
        assert_eq!(
            Flow::LoginMode.advance("Standard"),
            Step::Continue(Flow::LoginName)
        );
        assert_eq!(
            Flow::LoginMode.advance("guest"),
            Step::Retry {
                error: INVALID_MODE,
                flow: Flow::LoginMode
            }
        );
        assert_eq!(
            Flow::LoginName.advance("Alice"),
            Step::BeginLogin(LoginRequest::Standard {
                holder_name: "Alice".to_string()
            })
        );
    }

    #[test]
    fn test_standard_transfer_flow() {
        let step = run(
            Flow::start(TransactionKind::Transfer, false),
            &["00001", "00002", "300"],
        );

        assert_eq!(
            step,
            Step::Submit(Request::Transfer {
                holder: None,
                source: "00001".to_string(),
                target: "00002".to_string(),
                amount: Decimal::new(300, 0),
            })
        );
    }

    #[test]
    fn test_admin_paybill_flow_uppercases_company() {
        let step = run(
            Flow::start(TransactionKind::Paybill, true),
            &["Alice", "00001", "ec", "45.25"],
        );

        assert_eq!(
            step,
            Step::Submit(Request::Paybill {
                holder: Some("Alice".to_string()),
                account: "00001".to_string(),
                company: "EC".to_string(),
                amount: Decimal::new(4525, 2),
            })
        );
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-5")]
    #[case::text("ten")]
    fn test_invalid_amount_stays_on_step(#[case] amount: &str) {
        let flow = Flow::DepositAmount {
            holder: None,
            account: "00001".to_string(),
        };

        assert_eq!(
            flow.clone().advance(amount),
            Step::Retry {
                error: INVALID_POSITIVE_AMOUNT,
                flow
            }
        );
    }

    #[test]
    fn test_create_balance_accepts_zero() {
        let step = run(Flow::CreateName, &["Bob", "0"]);
        assert_eq!(
            step,
            Step::Submit(Request::Create {
                name: "Bob".to_string(),
                balance: Decimal::ZERO,
            })
        );

        assert_eq!(
            Flow::CreateBalance { name: "Bob".to_string() }.advance("-1"),
            Step::Retry {
                error: INVALID_NON_NEGATIVE_AMOUNT,
                flow: Flow::CreateBalance { name: "Bob".to_string() }
            }
        );
    }

    #[test]
    fn test_admin_action_flow() {
        let step = run(
            Flow::start(TransactionKind::Admin(AdminAction::Delete), true),
            &["Alice", "00001"],
        );

        assert_eq!(
            step,
            Step::Submit(Request::Admin {
                action: AdminAction::Delete,
                holder: "Alice".to_string(),
                account: "00001".to_string(),
            })
        );
    }

    #[test]
    fn test_request_apply_routes_to_system() {
        let mut system = BankingSystem::new();
        system.load_accounts("00001 Alice                A 01000.00\n");
        system.login(LoginRequest::Admin).unwrap();

        let request = Request::Admin {
            action: AdminAction::Disable,
            holder: "Alice".to_string(),
            account: "00001".to_string(),
        };

        assert!(request.apply(&mut system).is_ok());
        assert!(system.accounts()[0].is_disabled());
    }
}
