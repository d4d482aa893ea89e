use crate::ledger::Amount;

use super::account::{Account, AccountError, Outcome};

impl Account {
    /// Remove money from the balance, if there is enough of it.
    ///
    /// Returns [`Outcome::InsufficientFunds`] without touching the balance
    /// when the amount is larger than the balance.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Outcome, AccountError> {
        let amount = Self::validate(amount)?;
        let outcome = self.debit(amount)?;

        match outcome {
            Outcome::Applied => tracing::debug!(kind = %self.kind(), %amount, "withdrawn"),
            _ => tracing::info!(kind = %self.kind(), %amount, balance = %self.balance, "insufficient funds"),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod withdrawal_tests {
    use crate::ledger::{
        account::{Account, AccountError, Kind, Outcome},
        money::InvalidAmount,
    };

    use rust_decimal_macros::dec;

    #[test]
    fn test_withdrawal_ok() {
        for kind in vec![Kind::Checking, Kind::Savings] {
            let mut acc = Account::with_balance(kind, dec!(3.00)).unwrap();

            let got = acc.withdraw(dec!(1.25));
            assert_eq!(Ok(Outcome::Applied), got);
            assert_eq!(dec!(1.75), acc.balance());
        }
    }

    #[test]
    fn test_withdrawal_whole_balance() {
        let mut acc = Account::with_balance(Kind::Savings, dec!(3.00)).unwrap();

        assert_eq!(Ok(Outcome::Applied), acc.withdraw(dec!(3)));
        assert_eq!(dec!(0), acc.balance());
    }

    #[test]
    fn test_withdrawal_not_enough_funds() {
        let mut acc = Account::with_balance(Kind::Checking, dec!(2.50)).unwrap();

        let got = acc.withdraw(dec!(3.00));
        assert_eq!(Ok(Outcome::InsufficientFunds), got);
        assert_eq!(dec!(2.50), acc.balance());
    }

    #[test]
    fn test_withdrawal_invalid_amount() {
        for (amount, want) in vec![
            (dec!(-1), InvalidAmount::Negative),
            (dec!(1.001), InvalidAmount::TooPrecise),
        ] {
            let mut acc = Account::with_balance(Kind::Savings, dec!(99.99)).unwrap();

            let got = acc.withdraw(amount);
            assert_eq!(Err(AccountError::InvalidAmount(want)), got);
            assert_eq!(dec!(99.99), acc.balance());
        }
    }
}
