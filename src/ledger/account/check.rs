use crate::ledger::{Amount, CheckNumber};

use super::account::{Account, AccountError, Extension, Outcome};
use std::collections::HashSet;

impl Account {
    /// Credit the amount of a check to the balance.
    ///
    /// A check number can only be processed once per account: depositing or
    /// cashing it again returns [`Outcome::DuplicateCheck`] and leaves the
    /// balance as is.
    pub fn deposit_check(
        &mut self,
        amount: Amount,
        check_number: CheckNumber,
    ) -> Result<Outcome, AccountError> {
        let amount = Self::validate(amount)?;

        if self.processed_checks()?.contains(&check_number) {
            tracing::info!(check_number, "check has already been processed");
            return Ok(Outcome::DuplicateCheck);
        }

        self.credit(amount)?;
        self.processed_checks_mut()?.insert(check_number);

        tracing::debug!(check_number, %amount, "deposited check");
        Ok(Outcome::Applied)
    }

    /// Debit the amount of a check from the balance.
    ///
    /// The check number is only recorded once the check was actually cashed:
    /// a check refused for insufficient funds can be presented again.
    pub fn cash_check(
        &mut self,
        amount: Amount,
        check_number: CheckNumber,
    ) -> Result<Outcome, AccountError> {
        let amount = Self::validate(amount)?;

        if self.processed_checks()?.contains(&check_number) {
            tracing::info!(check_number, "check has already been processed");
            return Ok(Outcome::DuplicateCheck);
        }

        let outcome = self.debit(amount)?;
        match outcome {
            Outcome::Applied => {
                self.processed_checks_mut()?.insert(check_number);
                tracing::debug!(check_number, %amount, "cashed check");
            }
            _ => tracing::info!(check_number, %amount, balance = %self.balance, "insufficient funds"),
        }

        Ok(outcome)
    }

    /// Whether a check with this number was already deposited or cashed.
    ///
    /// Always false for savings accounts.
    pub fn has_processed(&self, check_number: CheckNumber) -> bool {
        self.processed_checks()
            .map(|checks| checks.contains(&check_number))
            .unwrap_or(false)
    }

    fn processed_checks(&self) -> Result<&HashSet<CheckNumber>, AccountError> {
        match &self.extension {
            Extension::Checking { processed_checks } => Ok(processed_checks),
            Extension::Savings => Err(AccountError::ChecksNotSupported),
        }
    }

    fn processed_checks_mut(&mut self) -> Result<&mut HashSet<CheckNumber>, AccountError> {
        match &mut self.extension {
            Extension::Checking { processed_checks } => Ok(processed_checks),
            Extension::Savings => Err(AccountError::ChecksNotSupported),
        }
    }
}
