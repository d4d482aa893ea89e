use crate::ledger::{
    account::{AccountError, Kind, Outcome},
    operation::Operation,
    process::{LedgerError, Receipt},
    Amount,
};

use serde::Serialize;

/// How an operation ended, as written in the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Applied,
    InsufficientFunds,
    DuplicateCheck,
    DuplicateAccount,
    AccountNotFound,
    InvalidAmount,
    ChecksNotSupported,
    Overflow,
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Applied => Status::Applied,
            Outcome::InsufficientFunds => Status::InsufficientFunds,
            Outcome::DuplicateCheck => Status::DuplicateCheck,
            Outcome::DuplicateAccount => Status::DuplicateAccount,
        }
    }
}

impl From<&LedgerError> for Status {
    fn from(err: &LedgerError) -> Self {
        match err {
            LedgerError::AccountNotFound(_) => Status::AccountNotFound,
            LedgerError::Account(AccountError::InvalidAmount(_)) => Status::InvalidAmount,
            LedgerError::Account(AccountError::ChecksNotSupported) => Status::ChecksNotSupported,
            LedgerError::Account(AccountError::Overflow) => Status::Overflow,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResultRecord {
    row: usize,
    user: String,
    kind: &'static str,
    op: &'static str,
    status: Status,

    // Empty when the account doesn't exist.
    balance: Option<Amount>,
}

impl ResultRecord {
    pub fn new(row: usize, op: &Operation, result: &Result<Receipt, LedgerError>) -> Self {
        let (status, balance) = match result {
            Ok(receipt) => (receipt.outcome.into(), Some(receipt.balance)),
            Err(err) => (err.into(), None),
        };

        Self {
            row,
            user: op.username().to_string(),
            kind: match op.kind() {
                Kind::Checking => "checking",
                Kind::Savings => "savings",
            },
            op: op.op_type().name(),
            status,
            balance,
        }
    }
}

// Writes one line per processed operation to the given stream.
pub fn write(
    output_stream: impl std::io::Write,
    results: impl IntoIterator<Item = ResultRecord>,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for record in results {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod write_tests {
    use super::ResultRecord;
    use crate::ledger::{
        account::{AccountError, Kind, Outcome},
        money::InvalidAmount,
        operation::{Operation, Type},
        process::{LedgerError, Receipt},
    };

    use rust_decimal_macros::dec;

    #[test]
    fn test_write_results() {
        let mut output_stream = Vec::new();
        let deposit = Operation::new(Type::Deposit(dec!(5)), "alice", Kind::Savings);
        let cash = Operation::new(Type::CashCheck(dec!(5), 9), "bob", Kind::Checking);

        let results = vec![
            ResultRecord::new(
                1,
                &deposit,
                &Ok(Receipt {
                    outcome: Outcome::Applied,
                    balance: dec!(5.00),
                    interest: None,
                }),
            ),
            ResultRecord::new(
                2,
                &deposit,
                &Err(LedgerError::Account(AccountError::InvalidAmount(
                    InvalidAmount::TooPrecise,
                ))),
            ),
            ResultRecord::new(
                3,
                &cash,
                &Ok(Receipt {
                    outcome: Outcome::InsufficientFunds,
                    balance: dec!(0.00),
                    interest: None,
                }),
            ),
            ResultRecord::new(
                4,
                &cash,
                &Err(LedgerError::AccountNotFound("bobCHECKING".to_string())),
            ),
        ];

        super::write(&mut output_stream, results).unwrap();

        let want = r#"row,user,kind,op,status,balance
1,alice,savings,deposit,applied,5.00
2,alice,savings,deposit,invalid_amount,
3,bob,checking,cash_check,insufficient_funds,0.00
4,bob,checking,cash_check,account_not_found,
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }
}
