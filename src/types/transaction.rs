//! Transaction-related types for the banking front end
//!
//! A [`Transaction`] is one line of the daily Bank Account Transaction file.
//! All transaction kinds share the same five fields; the named constructors
//! fill them in for each kind.

use crate::io::fixed_width::{
    format_amount, ljust_truncate, zfill, ACCOUNT_NUMBER_WIDTH, NAME_WIDTH,
};
use rust_decimal::Decimal;

/// Width of the misc field
pub const MISC_WIDTH: usize = 2;

/// Transaction codes written in the first column of the transaction file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCode {
    EndSession,
    Withdrawal,
    Transfer,
    Paybill,
    Deposit,
    Create,
    Delete,
    Disable,
    ChangePlan,
}

impl TransactionCode {
    /// Two-digit file code
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionCode::EndSession => "00",
            TransactionCode::Withdrawal => "01",
            TransactionCode::Transfer => "02",
            TransactionCode::Paybill => "03",
            TransactionCode::Deposit => "04",
            TransactionCode::Create => "05",
            TransactionCode::Delete => "06",
            TransactionCode::Disable => "07",
            TransactionCode::ChangePlan => "08",
        }
    }
}

/// One completed transaction record
///
/// Records are immutable once built and are appended to the session log in
/// acceptance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub code: TransactionCode,
    pub holder_name: String,
    pub account_number: String,
    pub amount: Decimal,

    /// Code-dependent field: destination suffix for transfers, company code
    /// for paybills, blank otherwise
    pub misc: String,
}

impl Transaction {
    fn new(
        code: TransactionCode,
        holder_name: &str,
        account_number: &str,
        amount: Decimal,
        misc: &str,
    ) -> Self {
        Transaction {
            code,
            holder_name: holder_name.to_string(),
            account_number: account_number.to_string(),
            amount,
            misc: misc.to_string(),
        }
    }

    pub fn withdrawal(holder_name: &str, account_number: &str, amount: Decimal) -> Self {
        Self::new(TransactionCode::Withdrawal, holder_name, account_number, amount, "  ")
    }

    /// Transfer record
    ///
    /// The misc field holds only the last two digits of the zero-padded
    /// destination account number. Destinations that differ in their first
    /// three digits therefore encode identically; the file format has no
    /// room for more.
    pub fn transfer(
        holder_name: &str,
        from_account: &str,
        to_account: &str,
        amount: Decimal,
    ) -> Self {
        let padded: Vec<char> = zfill(to_account, ACCOUNT_NUMBER_WIDTH).chars().collect();
        let suffix: String = padded[padded.len() - MISC_WIDTH..].iter().collect();
        Self::new(TransactionCode::Transfer, holder_name, from_account, amount, &suffix)
    }

    pub fn paybill(holder_name: &str, account_number: &str, amount: Decimal, company: &str) -> Self {
        Self::new(TransactionCode::Paybill, holder_name, account_number, amount, company)
    }

    pub fn deposit(holder_name: &str, account_number: &str, amount: Decimal) -> Self {
        Self::new(TransactionCode::Deposit, holder_name, account_number, amount, "  ")
    }

    pub fn create(holder_name: &str, account_number: &str, initial_balance: Decimal) -> Self {
        Self::new(TransactionCode::Create, holder_name, account_number, initial_balance, "  ")
    }

    pub fn delete(holder_name: &str, account_number: &str) -> Self {
        Self::new(TransactionCode::Delete, holder_name, account_number, Decimal::ZERO, "  ")
    }

    pub fn disable(holder_name: &str, account_number: &str) -> Self {
        Self::new(TransactionCode::Disable, holder_name, account_number, Decimal::ZERO, "  ")
    }

    pub fn change_plan(holder_name: &str, account_number: &str) -> Self {
        Self::new(TransactionCode::ChangePlan, holder_name, account_number, Decimal::ZERO, "  ")
    }

    /// Synthetic record closing every transaction file
    pub fn end_session() -> Self {
        Self::new(
            TransactionCode::EndSession,
            &" ".repeat(NAME_WIDTH),
            "00000",
            Decimal::ZERO,
            "  ",
        )
    }

    /// Format as one fixed-width transaction file line
    ///
    /// Layout: `CC NAME(20) NNNNN AMOUNT(8)MISC(2)`. Amount and misc are
    /// written back to back with no separator.
    pub fn to_file_string(&self) -> String {
        format!(
            "{} {} {} {}{}",
            self.code.as_str(),
            ljust_truncate(&self.holder_name, NAME_WIDTH),
            zfill(&self.account_number, ACCOUNT_NUMBER_WIDTH),
            format_amount(self.amount),
            ljust_truncate(&self.misc, MISC_WIDTH)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::padded_destination("2", "02")]
    #[case::full_destination("00002", "02")]
    #[case::wide_destination("12345", "45")]
    #[case::prefix_discarded("98702", "02")]
    fn test_transfer_misc_is_destination_suffix(#[case] to_account: &str, #[case] expected: &str) {
        let tx = Transaction::transfer("Alice", "00001", to_account, Decimal::new(300, 0));
        assert_eq!(tx.misc, expected);
        assert_eq!(tx.account_number, "00001");
    }

    #[rstest]
    #[case::delete(Transaction::delete("Alice", "00001"), TransactionCode::Delete)]
    #[case::disable(Transaction::disable("Alice", "00001"), TransactionCode::Disable)]
    #[case::change_plan(Transaction::change_plan("Alice", "00001"), TransactionCode::ChangePlan)]
    fn test_administrative_records_have_zero_amount(
        #[case] tx: Transaction,
        #[case] code: TransactionCode,
    ) {
        assert_eq!(tx.code, code);
        assert_eq!(tx.amount, Decimal::ZERO);
        assert_eq!(tx.misc, "  ");
    }

    #[rstest]
    #[case::withdrawal(
        Transaction::withdrawal("Alice", "00001", Decimal::new(500, 0)),
        "01 Alice                00001 00500.00  "
    )]
    #[case::transfer(
        Transaction::transfer("Alice", "00001", "00002", Decimal::new(300, 0)),
        "02 Alice                00001 00300.0002"
    )]
    #[case::paybill(
        Transaction::paybill("Alice", "00001", Decimal::new(4525, 2), "EC"),
        "03 Alice                00001 00045.25EC"
    )]
    #[case::deposit(
        Transaction::deposit("Alice", "1", Decimal::new(1, 2)),
        "04 Alice                00001 00000.01  "
    )]
    #[case::create(
        Transaction::create("Bob", "00008", Decimal::new(50000, 0)),
        "05 Bob                  00008 50000.00  "
    )]
    #[case::change_plan(
        Transaction::change_plan("Alice", "00001"),
        "08 Alice                00001 00000.00  "
    )]
    #[case::end_session(
        Transaction::end_session(),
        "00                      00000 00000.00  "
    )]
    fn test_to_file_string(#[case] tx: Transaction, #[case] expected: &str) {
        assert_eq!(tx.to_file_string(), expected);
    }

    #[test]
    fn test_every_line_has_fixed_width() {
        let lines = [
            Transaction::withdrawal("A", "1", Decimal::ONE).to_file_string(),
            Transaction::create("Maximilian Alexander Smith", "00008", Decimal::new(9999999, 2))
                .to_file_string(),
            Transaction::end_session().to_file_string(),
        ];

        for line in lines {
            assert_eq!(line.chars().count(), 40, "unexpected width: {:?}", line);
        }
    }
}
