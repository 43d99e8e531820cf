//! Core business logic module
//!
//! This module contains the transaction validation and application engine:
//! - `validator` - Pure business-rule checks and limit constants
//! - `session` - Login state machine and per-session running totals
//! - `system` - Session controller orchestrating lookup, validation,
//!   mutation and recording

pub mod session;
pub mod system;
pub mod validator;

pub use session::{LoginRequest, Session, SessionState, SessionTotals};
pub use system::{BankingSystem, SessionResult};
