//! Banking Front End CLI
//!
//! Interactive console reading commands from stdin and writing prompts and
//! results to stdout. Diagnostics go to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --accounts accounts.txt
//! cargo run -- --accounts accounts.txt --output-dir out --log-level info
//! cargo run -- --accounts accounts.txt < session.txt
//! ```
//!
//! Each logout writes `transaction_file_<YYYY-MM-DD>.txt` into the output
//! directory, dated with the local date at startup.
//!
//! # Exit Codes
//!
//! - 0: Input exhausted
//! - 1: Error (logger setup failed, stdin or stdout unusable)

use banking_frontend::cli;
use banking_frontend::console::Console;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = cli::configure_logging(args.log_level) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let config = args.to_console_config(chrono::Local::now().date_naive());
    log::info!("Starting console with {config:?}");

    let mut console = Console::new(config, io::stdout().lock());
    if let Err(e) = console.run(io::stdin().lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
