use crate::ledger::{
    money::{self, InvalidAmount, Money},
    Amount, CheckNumber, CHECKING_KEY_SUFFIX, SAVINGS_KEY_SUFFIX,
};

use rust_decimal_macros::dec;
use std::{collections::HashSet, fmt};
use thiserror::Error;

/// Errors that leave the account untouched.
///
/// Insufficient funds and already processed checks are expected outcomes
/// that callers branch on, so they are reported through [`Outcome`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The amount is negative, or has more than two decimal places.
    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmount),

    /// Only checking accounts can deposit or cash checks.
    #[error("checks can only be processed on a checking account")]
    ChecksNotSupported,

    /// Adding more money to the balance would overflow.
    #[error("balance would overflow")]
    Overflow,
}

/// What happened to a request that was valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The balance was updated.
    Applied,

    /// Funds in the account are insufficient for a withdrawal or a cashed check.
    InsufficientFunds,

    /// A check with the same number was already deposited or cashed.
    DuplicateCheck,

    /// An account with the same key is already registered.
    DuplicateAccount,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Checking,
    Savings,
}

impl Kind {
    /// Rate applied to the balance each time interest is calculated.
    pub fn interest_rate(self) -> Amount {
        match self {
            Kind::Checking => dec!(0.00),
            Kind::Savings => dec!(0.02),
        }
    }

    /// Appended to a username to build the account key.
    pub fn key_suffix(self) -> &'static str {
        match self {
            Kind::Checking => CHECKING_KEY_SUFFIX,
            Kind::Savings => SAVINGS_KEY_SUFFIX,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Checking => write!(f, "Checking"),
            Kind::Savings => write!(f, "Savings"),
        }
    }
}

// What a checking account has on top of the common balance.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Extension {
    Checking { processed_checks: HashSet<CheckNumber> },
    Savings,
}

/// An account holds a balance that can never go negative.
///
/// Both kinds share deposits, withdrawals and interest. Checking accounts
/// additionally keep track of the check numbers they processed, so the same
/// check can't be deposited or cashed twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub(super) balance: Money,
    pub(super) extension: Extension,
}

impl Account {
    pub fn new(kind: Kind) -> Self {
        let extension = match kind {
            Kind::Checking => Extension::Checking {
                processed_checks: HashSet::new(),
            },
            Kind::Savings => Extension::Savings,
        };

        Self {
            balance: Money::ZERO,
            extension,
        }
    }

    /// Open an account with an initial balance, validated like a deposit.
    pub fn with_balance(kind: Kind, opening: Amount) -> Result<Self, AccountError> {
        let mut account = Self::new(kind);
        account.balance = Money::from_decimal(opening)?;
        Ok(account)
    }

    pub fn kind(&self) -> Kind {
        match self.extension {
            Extension::Checking { .. } => Kind::Checking,
            Extension::Savings => Kind::Savings,
        }
    }

    /// The balance, rounded half-up to two decimal places.
    pub fn balance(&self) -> Amount {
        self.balance.rounded()
    }

    /// The balance with its full precision, e.g. after interest was added.
    pub fn exact_balance(&self) -> Money {
        self.balance
    }

    pub fn has_more_than_two_decimal_places(&self, amount: Amount) -> bool {
        money::has_more_than_two_decimal_places(amount)
    }

    pub(super) fn validate(amount: Amount) -> Result<Money, AccountError> {
        Ok(Money::from_decimal(amount)?)
    }

    pub(super) fn credit(&mut self, amount: Money) -> Result<(), AccountError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;

        Ok(())
    }

    pub(super) fn debit(&mut self, amount: Money) -> Result<Outcome, AccountError> {
        if amount > self.balance {
            return Ok(Outcome::InsufficientFunds);
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AccountError::Overflow)?;

        Ok(Outcome::Applied)
    }
}
