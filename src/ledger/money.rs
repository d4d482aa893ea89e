use super::{Amount, DISPLAY_PRECISION};

use rust_decimal::{Decimal, RoundingStrategy};
use std::{fmt, str::FromStr};
use thiserror::Error;

// Binary floating point can't represent most cents exactly (0.1 + 0.2 is
// 0.30000000000000004), so values coming from an f64 are compared to the
// nearest whole number of cents with a small tolerance.
const CENTS_EPSILON: f64 = 1e-6;

/// Reasons an amount supplied by a caller is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAmount {
    #[error("amount cannot be negative")]
    Negative,

    #[error("amount cannot have more than two decimal places")]
    TooPrecise,

    #[error("amount is not a number: {0:?}")]
    Malformed(String),

    #[error("amount is too large")]
    OutOfRange,
}

/// A fixed-point decimal amount of money.
///
/// Values built from caller input are guaranteed to be non-negative and to
/// carry at most two fractional digits. Values derived from them through
/// arithmetic (e.g. interest) keep their full precision, and are only rounded
/// when displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Amount);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Validate a caller supplied amount.
    pub fn from_decimal(raw: Amount) -> Result<Self, InvalidAmount> {
        if raw < Decimal::ZERO {
            return Err(InvalidAmount::Negative);
        }

        if has_more_than_two_decimal_places(raw) {
            return Err(InvalidAmount::TooPrecise);
        }

        Ok(Self(raw))
    }

    /// Validate an amount that went through binary floating point.
    pub fn from_f64(raw: f64) -> Result<Self, InvalidAmount> {
        if !raw.is_finite() {
            return Err(InvalidAmount::Malformed(raw.to_string()));
        }

        if raw < 0.0 {
            return Err(InvalidAmount::Negative);
        }

        let shifted = raw * 100.0;
        let cents = shifted.round();
        if (shifted - cents).abs() > CENTS_EPSILON {
            return Err(InvalidAmount::TooPrecise);
        }

        if cents >= i64::MAX as f64 {
            return Err(InvalidAmount::OutOfRange);
        }

        Ok(Self(Decimal::new(cents as i64, DISPLAY_PRECISION)))
    }

    /// The exact stored amount, without any rounding.
    pub fn amount(self) -> Amount {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    // Callers are expected to compare both amounts first: the result may be
    // negative.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn checked_mul_rate(self, rate: Amount) -> Option<Money> {
        self.0.checked_mul(rate).map(Money)
    }

    /// The amount rounded half-up to exactly two decimal places.
    pub fn rounded(self) -> Amount {
        round_for_display(self.0)
    }
}

/// Round half-up to exactly two decimal places, padding with zeros if needed.
pub fn round_for_display(amount: Amount) -> Amount {
    let mut rounded =
        amount.round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_PRECISION);
    rounded
}

/// Whether an amount has a non-zero digit past the second decimal place.
///
/// Trailing zeros don't count: `1.2300` is a valid amount.
pub fn has_more_than_two_decimal_places(amount: Amount) -> bool {
    amount.normalize().scale() > DISPLAY_PRECISION
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded())
    }
}

impl FromStr for Money {
    type Err = InvalidAmount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = Decimal::from_str(s.trim()).map_err(|_| InvalidAmount::Malformed(s.to_string()))?;
        Self::from_decimal(raw)
    }
}

impl TryFrom<Amount> for Money {
    type Error = InvalidAmount;

    fn try_from(raw: Amount) -> Result<Self, Self::Error> {
        Self::from_decimal(raw)
    }
}
