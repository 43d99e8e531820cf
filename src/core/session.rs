//! Login state and per-session running totals
//!
//! The session moves between three states:
//!
//! ```text
//! LoggedOut --admin login------------> Admin
//! LoggedOut --standard login(name)---> Standard(name)
//! Admin | Standard --logout----------> LoggedOut
//! ```
//!
//! The withdrawal, transfer and paybill totals are zeroed on every login
//! and logout.

use crate::types::BankingError;
use rust_decimal::Decimal;

/// Login request handed over by the console layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequest {
    Admin,
    Standard { holder_name: String },
}

impl LoginRequest {
    /// Build a request from the console's mode text and optional name
    pub fn from_mode(mode: &str, holder_name: Option<&str>) -> Result<Self, BankingError> {
        match mode {
            "admin" => Ok(LoginRequest::Admin),
            "standard" => Ok(LoginRequest::Standard {
                holder_name: holder_name.unwrap_or_default().to_string(),
            }),
            _ => Err(BankingError::InvalidLoginMode {
                mode: mode.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    Standard {
        holder_name: String,
    },
    Admin,
}

/// Cumulative amounts accepted in the current session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionTotals {
    pub withdrawals: Decimal,
    pub transfers: Decimal,
    pub paybills: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    totals: SessionTotals,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn totals(&self) -> &SessionTotals {
        &self.totals
    }

    pub fn totals_mut(&mut self) -> &mut SessionTotals {
        &mut self.totals
    }

    pub fn is_logged_in(&self) -> bool {
        self.state != SessionState::LoggedOut
    }

    pub fn is_admin(&self) -> bool {
        self.state == SessionState::Admin
    }

    /// Display identity of the session: `Admin`, the holder name, or none
    pub fn current_user(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedOut => None,
            SessionState::Admin => Some("Admin"),
            SessionState::Standard { holder_name } => Some(holder_name),
        }
    }

    /// Start a session
    ///
    /// Fails when a session is already active or a standard login has an
    /// empty holder name.
    pub fn login(&mut self, request: LoginRequest) -> Result<(), BankingError> {
        if self.is_logged_in() {
            return Err(BankingError::AlreadyLoggedIn);
        }

        self.state = match request {
            LoginRequest::Admin => SessionState::Admin,
            LoginRequest::Standard { holder_name } => {
                if holder_name.is_empty() {
                    return Err(BankingError::MissingHolderName);
                }
                SessionState::Standard { holder_name }
            }
        };
        self.totals = SessionTotals::default();
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), BankingError> {
        if !self.is_logged_in() {
            return Err(BankingError::LogoutWithoutSession);
        }
        self.reset();
        Ok(())
    }

    /// Return to the logged-out state with zeroed totals
    pub fn reset(&mut self) {
        self.state = SessionState::LoggedOut;
        self.totals = SessionTotals::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn standard(name: &str) -> LoginRequest {
        LoginRequest::Standard {
            holder_name: name.to_string(),
        }
    }

    #[test]
    fn test_new_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_admin_login() {
        let mut session = Session::new();
        session.login(LoginRequest::Admin).unwrap();

        assert!(session.is_logged_in());
        assert!(session.is_admin());
        assert_eq!(session.current_user(), Some("Admin"));
    }

    #[test]
    fn test_standard_login() {
        let mut session = Session::new();
        session.login(standard("Alice")).unwrap();

        assert!(session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(
            session.state(),
            &SessionState::Standard {
                holder_name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_standard_login_requires_name() {
        let mut session = Session::new();
        assert_eq!(
            session.login(standard("")).unwrap_err(),
            BankingError::MissingHolderName
        );
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_double_login_rejected() {
        let mut session = Session::new();
        session.login(standard("Alice")).unwrap();

        assert_eq!(
            session.login(LoginRequest::Admin).unwrap_err(),
            BankingError::AlreadyLoggedIn
        );
        assert_eq!(session.current_user(), Some("Alice"));
    }

    #[test]
    fn test_logout_without_session_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.logout().unwrap_err(),
            BankingError::LogoutWithoutSession
        );
    }

    #[test]
    fn test_logout_resets_totals() {
        let mut session = Session::new();
        session.login(standard("Alice")).unwrap();
        session.totals_mut().withdrawals = Decimal::new(500, 0);
        session.totals_mut().paybills = Decimal::new(10, 0);

        session.logout().unwrap();

        assert!(!session.is_logged_in());
        assert_eq!(session.totals(), &SessionTotals::default());
    }

    #[rstest]
    #[case::admin("admin", None, Ok(LoginRequest::Admin))]
    #[case::standard("standard", Some("Alice"), Ok(LoginRequest::Standard { holder_name: "Alice".to_string() }))]
    #[case::standard_without_name("standard", None, Ok(LoginRequest::Standard { holder_name: String::new() }))]
    #[case::unknown("guest", None, Err(BankingError::InvalidLoginMode { mode: "guest".to_string() }))]
    fn test_login_request_from_mode(
        #[case] mode: &str,
        #[case] name: Option<&str>,
        #[case] expected: Result<LoginRequest, BankingError>,
    ) {
        assert_eq!(LoginRequest::from_mode(mode, name), expected);
    }
}
