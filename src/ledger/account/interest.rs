use crate::ledger::money::Money;

use super::account::{Account, AccountError};

impl Account {
    /// Credit `balance * rate` to the balance, and return the credited interest.
    ///
    /// Checking accounts have a rate of zero, so their balance never changes.
    pub fn calculate_interest(&mut self) -> Result<Money, AccountError> {
        let rate = self.kind().interest_rate();
        let interest = self
            .balance
            .checked_mul_rate(rate)
            .ok_or(AccountError::Overflow)?;
        self.credit(interest)?;

        tracing::debug!(kind = %self.kind(), %rate, %interest, "added interest");
        Ok(interest)
    }
}

#[cfg(test)]
mod interest_tests {
    use crate::ledger::account::{Account, AccountError, Kind};

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_savings_interest() {
        for (balance, want_interest, want_balance) in vec![
            (dec!(100.00), dec!(2.00), dec!(102.00)),
            (dec!(0), dec!(0), dec!(0)),
            (dec!(10.01), dec!(0.20), dec!(10.21)),
            (dec!(0.25), dec!(0.01), dec!(0.26)),
        ] {
            let mut acc = Account::with_balance(Kind::Savings, balance).unwrap();

            let interest = acc.calculate_interest().expect("should not overflow");
            assert_eq!(want_interest, interest.rounded());
            assert_eq!(want_balance, acc.balance());
        }
    }

    #[test]
    fn test_savings_interest_keeps_precision() {
        let mut acc = Account::with_balance(Kind::Savings, dec!(10.01)).unwrap();

        acc.calculate_interest().unwrap();
        assert_eq!(dec!(10.2102), acc.exact_balance().amount());

        acc.calculate_interest().unwrap();
        assert_eq!(dec!(10.414404), acc.exact_balance().amount());
        assert_eq!(dec!(10.41), acc.balance());
    }

    #[test]
    fn test_checking_interest_is_zero() {
        let mut acc = Account::with_balance(Kind::Checking, dec!(250.75)).unwrap();

        let interest = acc.calculate_interest().expect("should not overflow");
        assert_eq!(dec!(0), interest.amount());
        assert_eq!(dec!(250.75), acc.balance());
    }

    #[test]
    fn test_interest_overflow() {
        let mut acc = Account::with_balance(Kind::Savings, Decimal::MAX).unwrap();

        assert_eq!(Err(AccountError::Overflow), acc.calculate_interest());
        assert_eq!(Decimal::MAX, acc.exact_balance().amount());
    }
}
