//! Line-driven console loop
//!
//! Reads operator input line by line, drives the active [`Flow`] or parses a
//! top-level [`Command`], and prints results. Successful operations print
//! their message; failures print `ERROR: <message>`. Nothing the operator
//! types can end the loop except end of input.

use crate::console::flow::{Command, Flow, Request, Step, INVALID_COMMAND};
use crate::console::ConsoleConfig;
use crate::core::{BankingSystem, LoginRequest, SessionResult};
use crate::io::write_transaction_file;
use crate::types::BankingError;
use std::fs;
use std::io::{BufRead, ErrorKind as IoErrorKind, Write};

pub struct Console<W: Write> {
    system: BankingSystem,
    config: ConsoleConfig,
    flow: Option<Flow>,
    output: W,
}

impl<W: Write> Console<W> {
    pub fn new(config: ConsoleConfig, output: W) -> Self {
        Console {
            system: BankingSystem::new(),
            config,
            flow: None,
            output,
        }
    }

    pub fn system(&self) -> &BankingSystem {
        &self.system
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `input` is exhausted
    ///
    /// Only failures to read input or write output are returned; every
    /// banking error is reported to the operator and the loop continues.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<(), BankingError> {
        self.out("Banking System Front End (Console)")?;
        self.out("Enter \"login\" to start a session.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                self.out("Exiting.")?;
                return Ok(());
            }

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            log::debug!("Input line: {text:?}");

            match self.flow.take() {
                Some(flow) => {
                    let step = flow.advance(text);
                    self.handle_step(step)?;
                }
                None => self.handle_command(text)?,
            }
        }
    }

    fn out(&mut self, message: &str) -> Result<(), BankingError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn err(&mut self, message: &str) -> Result<(), BankingError> {
        writeln!(self.output, "ERROR: {}", message)?;
        Ok(())
    }

    /// Print an operation outcome, returning whether it succeeded
    fn report(&mut self, result: SessionResult) -> Result<bool, BankingError> {
        match result {
            Ok(receipt) => {
                self.out(&receipt.message)?;
                Ok(true)
            }
            Err(e) => {
                self.err(&e.to_string())?;
                Ok(false)
            }
        }
    }

    fn enter(&mut self, flow: Flow) -> Result<(), BankingError> {
        self.out(flow.prompt())?;
        self.flow = Some(flow);
        Ok(())
    }

    fn handle_command(&mut self, text: &str) -> Result<(), BankingError> {
        match Command::parse(text) {
            Some(Command::Login) => {
                if self.system.session().is_logged_in() {
                    return self.err(&BankingError::AlreadyLoggedIn.to_string());
                }
                self.enter(Flow::LoginMode)
            }
            Some(Command::Logout) => {
                let result = self.system.logout();
                if self.report(result)? {
                    self.save_transaction_file()?;
                }
                Ok(())
            }
            Some(Command::Start(kind)) => {
                let session = self.system.session();
                if !session.is_logged_in() {
                    return self.err(&BankingError::NotLoggedIn.to_string());
                }
                let flow = Flow::start(kind, session.is_admin());
                self.enter(flow)
            }
            None => self.err(INVALID_COMMAND),
        }
    }

    fn handle_step(&mut self, step: Step) -> Result<(), BankingError> {
        match step {
            Step::Continue(flow) => self.enter(flow),
            Step::Retry { error, flow } => {
                self.flow = Some(flow);
                self.err(error)
            }
            Step::BeginLogin(request) => match self.config.accounts_file.clone() {
                Some(path) => self.load_and_login(&path.to_string_lossy(), request),
                None => self.enter(Flow::AccountsFile { login: request }),
            },
            Step::Login { request, path } => self.load_and_login(&path, request),
            Step::Submit(request) => self.submit(request),
        }
    }

    fn submit(&mut self, request: Request) -> Result<(), BankingError> {
        log::debug!("Submitting {request:?}");
        let result = request.apply(&mut self.system);
        self.report(result)?;
        Ok(())
    }

    fn read_accounts(path: &str) -> Result<String, BankingError> {
        fs::read_to_string(path).map_err(|e| match e.kind() {
            IoErrorKind::NotFound => BankingError::FileNotFound {
                path: path.to_string(),
            },
            _ => BankingError::from(e),
        })
    }

    /// Load the accounts file, then start the session. A load failure
    /// abandons the login.
    fn load_and_login(&mut self, path: &str, request: LoginRequest) -> Result<(), BankingError> {
        let content = match Self::read_accounts(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to load accounts from {path}: {e}");
                return self.err(&format!("Error loading file: {}", e));
            }
        };

        let count = self.system.load_accounts(&content);
        self.out(&format!("Loaded {} accounts.", count))?;

        let result = self.system.login(request);
        self.report(result)?;
        Ok(())
    }

    fn save_transaction_file(&mut self) -> Result<(), BankingError> {
        let content = self.system.transaction_file();
        match write_transaction_file(&self.config.output_dir, self.config.session_date, &content) {
            Ok(path) => self.out(&format!("Transaction file written: {}", path.display())),
            Err(e) => self.err(&e.to_string()),
        }
    }
}
