use crate::ledger::Amount;

use super::account::{Account, AccountError};

impl Account {
    /// Add money to the balance.
    ///
    /// The amount must be non-negative, with at most two decimal places.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        let amount = Self::validate(amount)?;
        self.credit(amount)?;

        tracing::debug!(kind = %self.kind(), %amount, "deposited");
        Ok(())
    }
}
