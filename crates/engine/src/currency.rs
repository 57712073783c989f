use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A currency code the engine does not handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported currency: {0}")]
pub struct UnsupportedCurrency(pub String);

/// ISO currency code of the amounts the engine reads.
///
/// Fine is mono-currency (Moroccan dirham), but the currency is modelled
/// explicitly so the spoken currency words and the display code live in one
/// place.
///
/// ## Minor units
///
/// Amounts are stored as an `i64` number of **minor units** (see
/// `MinorUnits`). `minor_units()` returns how many decimal digits separate:
/// - major units (spoken/typed input, e.g. `10,50 dh`)
/// - minor units (stored integers, e.g. `1050`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Mad,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Mad => "MAD",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Mad => 2,
        }
    }

    /// Standalone words naming the currency in speech-to-text output.
    ///
    /// Matched case-insensitively and only as whole words, so `dh` inside
    /// another word is left alone.
    #[must_use]
    pub const fn spoken_tokens(self) -> &'static [&'static str] {
        match self {
            Currency::Mad => &["dh", "dhs", "dirham", "dirhams"],
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = UnsupportedCurrency;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MAD" => Ok(Currency::Mad),
            other => Err(UnsupportedCurrency(other.to_string())),
        }
    }
}
