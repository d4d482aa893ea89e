use super::account::{Account, AccountError, Outcome};
use super::ledger::Ledger;
use super::money::Money;
use super::operation::{Operation, Type};
use super::{AccountKey, Amount};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No account is registered under this key.
    #[error("account not found: {0}")]
    AccountNotFound(AccountKey),

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// What an operation did, and the resulting balance of the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub outcome: Outcome,

    /// Rounded to two decimal places.
    pub balance: Amount,

    /// The interest credited, for interest operations.
    pub interest: Option<Money>,
}

impl Ledger {
    /// Apply one operation to the account it targets.
    pub fn process(&mut self, op: &Operation) -> Result<Receipt, LedgerError> {
        let key = op.key();
        let mut interest = None;

        let outcome = match op.op_type {
            Type::Create => {
                if self.create_account(op.kind, &key) {
                    Outcome::Applied
                } else {
                    Outcome::DuplicateAccount
                }
            }
            Type::Deposit(amount) => {
                self.account_mut(&key)?.deposit(amount)?;
                Outcome::Applied
            }
            Type::Withdraw(amount) => self.account_mut(&key)?.withdraw(amount)?,
            Type::Interest => {
                interest = Some(self.account_mut(&key)?.calculate_interest()?);
                Outcome::Applied
            }
            Type::DepositCheck(amount, check_number) => {
                self.account_mut(&key)?.deposit_check(amount, check_number)?
            }
            Type::CashCheck(amount, check_number) => {
                self.account_mut(&key)?.cash_check(amount, check_number)?
            }
            Type::Balance => Outcome::Applied,
        };

        let balance = self.account_mut(&key)?.balance();

        Ok(Receipt {
            outcome,
            balance,
            interest,
        })
    }

    fn account_mut(&mut self, key: &str) -> Result<&mut Account, LedgerError> {
        self.get_account_mut(key)
            .ok_or_else(|| LedgerError::AccountNotFound(key.to_string()))
    }
}

#[cfg(test)]
mod process_tests {
    use super::{LedgerError, Receipt};
    use crate::ledger::{
        account::{AccountError, Kind, Outcome},
        ledger::Ledger,
        money::InvalidAmount,
        operation::{Operation, Type},
    };

    use rust_decimal_macros::dec;

    fn applied(balance: rust_decimal::Decimal) -> Result<Receipt, LedgerError> {
        Ok(Receipt {
            outcome: Outcome::Applied,
            balance,
            interest: None,
        })
    }

    #[test]
    fn test_process_savings() {
        let mut ledger = Ledger::new();
        let op = |op_type| Operation::new(op_type, "alice", Kind::Savings);

        assert_eq!(applied(dec!(0)), ledger.process(&op(Type::Create)));
        assert_eq!(applied(dec!(100)), ledger.process(&op(Type::Deposit(dec!(100.00)))));

        let got = ledger.process(&op(Type::Interest)).unwrap();
        assert_eq!(dec!(102.00), got.balance);
        assert_eq!(Some(dec!(2.00)), got.interest.map(|i| i.rounded()));

        let got = ledger.process(&op(Type::Withdraw(dec!(200.00)))).unwrap();
        assert_eq!(Outcome::InsufficientFunds, got.outcome);
        assert_eq!(dec!(102.00), got.balance);

        assert_eq!(applied(dec!(2)), ledger.process(&op(Type::Withdraw(dec!(100)))));
        assert_eq!(applied(dec!(2)), ledger.process(&op(Type::Balance)));
    }

    #[test]
    fn test_process_checking() {
        let mut ledger = Ledger::new();
        let op = |op_type| Operation::new(op_type, "bob", Kind::Checking);

        ledger.process(&op(Type::Create)).unwrap();
        assert_eq!(
            applied(dec!(50)),
            ledger.process(&op(Type::DepositCheck(dec!(50.00), 1)))
        );

        let got = ledger.process(&op(Type::DepositCheck(dec!(50.00), 1))).unwrap();
        assert_eq!(Outcome::DuplicateCheck, got.outcome);
        assert_eq!(dec!(50), got.balance);

        assert_eq!(
            applied(dec!(30)),
            ledger.process(&op(Type::CashCheck(dec!(20.00), 2)))
        );
    }

    #[test]
    fn test_process_duplicate_account() {
        let mut ledger = Ledger::new();
        let op = |op_type| Operation::new(op_type, "carol", Kind::Checking);

        ledger.process(&op(Type::Create)).unwrap();
        ledger.process(&op(Type::Deposit(dec!(5)))).unwrap();

        let got = ledger.process(&op(Type::Create)).unwrap();
        assert_eq!(Outcome::DuplicateAccount, got.outcome);
        assert_eq!(dec!(5), got.balance);
        assert_eq!(1, ledger.len());
    }

    #[test]
    fn test_process_account_not_found() {
        let mut ledger = Ledger::new();
        ledger
            .process(&Operation::new(Type::Create, "dave", Kind::Checking))
            .unwrap();

        for op_type in vec![
            Type::Deposit(dec!(1)),
            Type::Withdraw(dec!(1)),
            Type::Interest,
            Type::Balance,
        ] {
            let got = ledger.process(&Operation::new(op_type, "dave", Kind::Savings));
            assert_eq!(
                Err(LedgerError::AccountNotFound("daveSAVING".to_string())),
                got
            );
        }
    }

    #[test]
    fn test_process_errors() {
        let mut ledger = Ledger::new();
        let op = |op_type| Operation::new(op_type, "erin", Kind::Savings);
        ledger.process(&op(Type::Create)).unwrap();

        assert_eq!(
            Err(LedgerError::Account(AccountError::InvalidAmount(
                InvalidAmount::TooPrecise
            ))),
            ledger.process(&op(Type::Deposit(dec!(10.001))))
        );
        assert_eq!(
            Err(LedgerError::Account(AccountError::ChecksNotSupported)),
            ledger.process(&op(Type::CashCheck(dec!(1), 1)))
        );
    }
}
