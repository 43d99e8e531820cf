//! Current Bank Accounts file format
//!
//! Fixed-width records, one account per line:
//!
//! ```text
//! columns  0..5   account number
//! columns  6..26  holder name
//! column   27     status (A or D)
//! columns 29..37  balance text
//! ```
//!
//! Parsing is lenient. Blank lines, lines shorter than 37 characters and
//! lines whose balance is not a number are skipped with a warning. A line
//! containing `END_OF_FILE` stops parsing.

use crate::io::fixed_width::parse_amount;
use crate::types::{Account, AccountStatus};

/// Sentinel marking the end of an accounts file
pub const END_OF_FILE: &str = "END_OF_FILE";

/// Minimum record length in characters
pub const MIN_RECORD_LEN: usize = 37;

fn column(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect::<String>().trim().to_string()
}

/// Parse one record, returning `None` for lines that should be skipped
fn parse_record(line: &str) -> Option<Account> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < MIN_RECORD_LEN {
        log::warn!("Skipping short accounts record: {line:?}");
        return None;
    }

    let account_number = column(&chars, 0, 5);
    let holder_name = column(&chars, 6, 26);
    let status = column(&chars, 27, 28);
    let balance_text = column(&chars, 29, 37);

    let Some(balance) = parse_amount(&balance_text) else {
        log::warn!("Skipping accounts record with invalid balance {balance_text:?}: {line:?}");
        return None;
    };

    Some(Account::new(
        account_number,
        holder_name,
        AccountStatus::from_code(&status),
        balance,
    ))
}

/// Parse Current Bank Accounts file text into accounts, in file order
pub fn parse_accounts(content: &str) -> Vec<Account> {
    let mut accounts = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if line.contains(END_OF_FILE) {
            break;
        }
        if let Some(account) = parse_record(line) {
            log::debug!("Parsed account {}", account.account_number());
            accounts.push(account);
        }
    }

    accounts
}

/// Render accounts as Current Bank Accounts file text, terminated by the
/// `END_OF_FILE` sentinel line
///
/// Status is written from [`AccountStatus`], so a status column other than
/// `A` or `D` read by [`parse_accounts`] comes back out as `A`.
pub fn format_accounts(accounts: &[Account]) -> String {
    let mut output: String = accounts
        .iter()
        .map(|account| account.to_file_string() + "\n")
        .collect();
    output.push_str(END_OF_FILE);
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    const ALICE: &str = "00001 Alice                A 01000.00";
    const BOB: &str = "00002 Bob                  D 00500.50";

    #[test]
    fn test_parse_accounts_reads_fields() {
        let content = format!("{ALICE}\n{BOB}\n");
        let accounts = parse_accounts(&content);

        assert_eq!(
            accounts,
            vec![
                Account::new("00001", "Alice", AccountStatus::Active, Decimal::new(100000, 2)),
                Account::new("00002", "Bob", AccountStatus::Disabled, Decimal::new(50050, 2)),
            ]
        );
    }

    #[test]
    fn test_parse_accounts_stops_at_sentinel() {
        let content = format!("{ALICE}\n00000 END_OF_FILE          A 00000.00\n{BOB}\n");
        let accounts = parse_accounts(&content);

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].account_number(), "00001");
    }

    #[rstest]
    #[case::blank_lines(format!("\n   \n{ALICE}\n\n"), 1)]
    #[case::short_line(format!("00003 Carol A 1.00\n{ALICE}\n"), 1)]
    #[case::bad_balance(format!("00003 Carol                A 12x45.00\n{BOB}\n"), 1)]
    #[case::empty(String::new(), 0)]
    #[case::crlf(format!("{ALICE}\r\n{BOB}\r\n"), 2)]
    fn test_parse_accounts_skips_unusable_lines(#[case] content: String, #[case] expected: usize) {
        assert_eq!(parse_accounts(&content).len(), expected);
    }

    #[test]
    fn test_parse_accounts_keeps_non_numeric_account_number() {
        let accounts = parse_accounts("ABCDE Test                 A 00010.00\n");
        assert_eq!(accounts[0].account_number(), "ABCDE");
    }

    #[test]
    fn test_format_accounts_appends_sentinel() {
        let accounts = vec![Account::new("1", "Alice", AccountStatus::Active, Decimal::new(1000, 0))];

        assert_eq!(format_accounts(&accounts), format!("{ALICE}\nEND_OF_FILE\n"));
    }

    #[rstest]
    #[case::active("A", 'A')]
    #[case::disabled("D", 'D')]
    #[case::unknown("X", 'A')]
    #[case::lowercase_disabled("d", 'A')]
    fn test_status_is_normalised_on_format(#[case] code: &str, #[case] expected: char) {
        let content = format!("00003 Carol                {code} 00010.00\n");
        let rendered = format_accounts(&parse_accounts(&content));

        assert_eq!(rendered.chars().nth(27), Some(expected));
    }

    #[test]
    fn test_formatted_accounts_parse_back() {
        let accounts = vec![
            Account::new("00001", "Alice", AccountStatus::Active, Decimal::new(100000, 2)),
            Account::new("00002", "Bob", AccountStatus::Disabled, Decimal::new(50050, 2)),
        ];

        assert_eq!(parse_accounts(&format_accounts(&accounts)), accounts);
    }
}
