use crate::types::errors::MoneyError;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: usize = 2;
const SCALE: i64 = 10i64.pow(DECIMAL_PLACES as u32);

/// A signed currency amount with exactly two decimal places, held as whole cents.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a sampled floating point value to two decimal places.
    ///
    /// The value goes through `Decimal` first so the rounding happens on the decimal
    /// representation (half to even) rather than on binary fractions.
    pub fn round_from_f64(value: f64) -> Result<Self, MoneyError> {
        if !value.is_finite() {
            return Err(MoneyError::NotFinite(value));
        }

        let decimal = Decimal::from_f64(value).ok_or(MoneyError::Overflow)?;
        let cents = decimal.round_dp(DECIMAL_PLACES as u32)
            .checked_mul(Decimal::from(SCALE))
            .and_then(|scaled| scaled.to_i64())
            .ok_or(MoneyError::Overflow)?;

        Ok(Money(cents))
    }

    /// The value as stored in a REAL column.
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl Display for Money {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let integer = abs / SCALE as u64;
        let fraction = abs % SCALE as u64;
        write!(formatter, "{}{}.{:0width$}", sign, integer, fraction, width = DECIMAL_PLACES)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MoneyError::InvalidFormat("Value is an empty string".to_string()));
        }

        let (integer_part, fraction_part) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value, None)
        };

        if fraction_part.is_some_and(|fraction| fraction.contains('.')) {
            return Err(MoneyError::InvalidFormat("Value has more than one decimal point".to_string()));
        }

        let integer: i64 = integer_part.parse().map_err(|error| {
            MoneyError::InvalidFormat(format!("Value has an invalid integer part: {:?}", error))
        })?;

        let fraction: i64 = match fraction_part {
            Some(fraction) => {
                if fraction.len() > DECIMAL_PLACES {
                    return Err(MoneyError::InvalidFormat("Value has too many decimal places".to_string()));
                }

                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MoneyError::InvalidFormat(format!("Value has an invalid fraction part: {fraction}")));
                }

                format!("{:0<width$}", fraction, width = DECIMAL_PLACES).parse()?
            }
            None => 0
        };

        let sign = if value.starts_with('-') { -1 } else { 1 };
        let result = integer.checked_mul(SCALE)
            .and_then(|v| v.checked_add(sign * fraction))
            .ok_or(MoneyError::Overflow)?;

        Ok(Money(result))
    }
}
