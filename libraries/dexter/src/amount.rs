use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

/// Maximum number of fractional digits accepted by the contracts.
pub const DECIMAL_PLACES: usize = 18;

const DECIMAL_FRACTIONAL: u128 = 1_000_000_000_000_000_000;

/// Unsigned 128-bit amount, carried as a decimal string on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Uint128(u128);

impl Uint128 {
    #[inline]
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn u128(self) -> u128 {
        self.0
    }
}

impl From<u128> for Uint128 {
    #[inline]
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Uint128 {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl Display for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for Uint128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Uint128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).and_then(|value| {
            value.parse().map(Self).map_err(|error| {
                D::Error::custom(format_args!(
                    "invalid 128-bit amount {value:?}: {error}"
                ))
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ParseDecimalError {
    #[error("Decimal is empty!")]
    Empty,
    #[error("Decimal {0:?} contains characters other than digits and a single point!")]
    InvalidCharacters(Box<str>),
    #[error("Decimal {0:?} has more than 18 fractional digits!")]
    TooPrecise(Box<str>),
    #[error("Decimal {0:?} doesn't fit in 128 bits with 18 fractional digits!")]
    OutOfRange(Box<str>),
}

/// Fixed-point decimal in its canonical string form, e.g. `"0.005"`.
///
/// Accepts the same range as the contracts' decimal: at most 18 fractional
/// digits and at most `u128::MAX` units of `10^-18`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal(Box<str>);

impl Decimal {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = match value.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (value, None),
        };

        let all_digits = |part: &str| {
            !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit())
        };

        if value.is_empty() {
            Err(ParseDecimalError::Empty)
        } else if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            Err(ParseDecimalError::InvalidCharacters(value.into()))
        } else if fraction.is_some_and(|fraction| fraction.len() > DECIMAL_PLACES)
        {
            Err(ParseDecimalError::TooPrecise(value.into()))
        } else if atomics(whole, fraction.unwrap_or_default()).is_none() {
            Err(ParseDecimalError::OutOfRange(value.into()))
        } else {
            Ok(Self(value.into()))
        }
    }
}

/// Value in units of `10^-18`, or `None` when it overflows `u128`. Both
/// parts must already be validated digit strings.
fn atomics(whole: &str, fraction: &str) -> Option<u128> {
    let fraction = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<DECIMAL_PLACES$}").parse::<u128>().ok()?
    };

    whole
        .parse::<u128>()
        .ok()?
        .checked_mul(DECIMAL_FRACTIONAL)?
        .checked_add(fraction)
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)
            .and_then(|value| value.parse().map_err(D::Error::custom))
    }
}
