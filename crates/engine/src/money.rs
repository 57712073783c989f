use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Currency, EngineError, amount};

/// Non-negative amount represented as **integer minor units** (centimes).
///
/// This is the only type the engine hands out for money, so no
/// floating-point value ever sits between the spoken text and storage.
///
/// # Examples
///
/// ```rust
/// use engine::MinorUnits;
///
/// let amount = MinorUnits::new(123_456);
/// assert_eq!(amount.minor(), 123456);
/// assert_eq!(amount.to_string(), "1234.56");
/// assert_eq!(amount.format_fr(), "1 234,56");
/// ```
///
/// Parsing runs the amount normalizer, so both renderings read back:
///
/// ```rust
/// use engine::MinorUnits;
///
/// assert_eq!("1234.56".parse::<MinorUnits>().unwrap().minor(), 123456);
/// assert_eq!("1 234,56 dhs".parse::<MinorUnits>().unwrap().minor(), 123456);
/// assert!("12.34.56".parse::<MinorUnits>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct MinorUnits(i64);

impl MinorUnits {
    /// Creates a new amount from integer minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Splits into sign, major part and zero-padded fraction, using the
    /// scale of the engine's currency.
    fn parts(self) -> (&'static str, u64, String) {
        let scale = u32::from(Currency::default().minor_units());
        let divisor = 10_u64.pow(scale);
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let fraction = format!("{:0width$}", abs % divisor, width = scale as usize);
        (sign, abs / divisor, fraction)
    }

    /// French display form: space as thousands separator, comma as decimal
    /// separator, always two fraction digits (`1 234,56`).
    #[must_use]
    pub fn format_fr(self) -> String {
        let (sign, major, minor) = self.parts();
        let major = major.to_string();

        let mut grouped = String::with_capacity(major.len() + major.len() / 3);
        for (idx, digit) in major.chars().enumerate() {
            if idx > 0 && (major.len() - idx) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(digit);
        }
        format!("{sign}{grouped},{minor}")
    }

    /// [`format_fr`](Self::format_fr) followed by the currency code
    /// (`1 234,56 MAD`).
    #[must_use]
    pub fn format_with_currency(self, currency: Currency) -> String {
        format!("{} {}", self.format_fr(), currency.code())
    }
}

/// Canonical plain decimal: `.` separator, two fraction digits, no grouping.
impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, major, minor) = self.parts();
        write!(f, "{sign}{major}.{minor}")
    }
}

impl FromStr for MinorUnits {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        amount::parse(s)
    }
}
