//! Bank Account Transaction file output
//!
//! One fixed-width line per accepted transaction in acceptance order,
//! followed by the end-of-session record. Every line, including the last,
//! ends with a newline.

use crate::types::{BankingError, Transaction};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize session transactions plus the end-of-session marker
pub fn format_transactions(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .chain(std::iter::once(&Transaction::end_session()))
        .map(|tx| tx.to_file_string() + "\n")
        .collect()
}

/// File name for the transaction file of a session date
pub fn transaction_file_name(date: NaiveDate) -> String {
    format!("transaction_file_{}.txt", date.format("%Y-%m-%d"))
}

/// Write transaction file content into `dir`, returning the written path
pub fn write_transaction_file(
    dir: &Path,
    date: NaiveDate,
    content: &str,
) -> Result<PathBuf, BankingError> {
    let path = dir.join(transaction_file_name(date));
    fs::write(&path, content).map_err(|e| BankingError::Io {
        message: format!("Failed to write '{}': {}", path.display(), e),
    })?;

    log::info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn session_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_empty_session_has_only_end_record() {
        assert_eq!(
            format_transactions(&[]),
            "00                      00000 00000.00  \n"
        );
    }

    #[test]
    fn test_n_transactions_produce_n_plus_one_lines() {
        let transactions = vec![
            Transaction::withdrawal("Alice", "00001", Decimal::new(500, 0)),
            Transaction::transfer("Alice", "00001", "00002", Decimal::new(300, 0)),
            Transaction::deposit("Alice", "00001", Decimal::new(20, 0)),
        ];

        let content = format_transactions(&transactions);
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "01 Alice                00001 00500.00  ");
        assert_eq!(lines[1], "02 Alice                00001 00300.0002");
        assert!(lines[3].starts_with("00 "));
        assert_eq!(&lines[3][24..29], "00000");
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_transaction_file_name() {
        assert_eq!(
            transaction_file_name(session_date()),
            "transaction_file_2026-03-14.txt"
        );
    }

    #[test]
    fn test_write_transaction_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let content = format_transactions(&[]);

        let path = write_transaction_file(dir.path(), session_date(), &content).unwrap();

        assert_eq!(path, dir.path().join("transaction_file_2026-03-14.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), content);
    }

    #[test]
    fn test_write_transaction_file_missing_dir() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let missing = dir.path().join("nope");

        let result = write_transaction_file(&missing, session_date(), "x");
        assert!(matches!(result, Err(BankingError::Io { .. })));
    }
}
