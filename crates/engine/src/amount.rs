//! Amount normalizer.
//!
//! Reads a spoken or typed amount (`150`, `150,5`, `1 234,56 dhs`,
//! `1,234.56`) into [`MinorUnits`].
//!
//! The decimal separator is whichever of `.` and `,` occurs last; the other
//! glyph, if present, is a grouping separator and is dropped. This reads both
//! the French form (`1.234,56`) and the anglicized one (`1,234.56`) without a
//! locale flag. The value is parsed as an exact decimal and rounded half-up to
//! the currency's minor-unit digits before being scaled to minor units.

use std::{cmp::Ordering, sync::LazyLock};

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::{Currency, EngineError, MinorUnits, ResultEngine, util};

#[allow(clippy::expect_used)]
static CURRENCY_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = Currency::default().spoken_tokens().join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")).expect("currency pattern is valid")
});

/// Stateless amount normalizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct AmountNormalizer;

impl AmountNormalizer {
    /// See [`parse`].
    pub fn parse(&self, raw: &str) -> ResultEngine<MinorUnits> {
        parse(raw)
    }
}

/// Parses `raw` into minor units.
///
/// Fails with [`EngineError::AmountNotRecognized`] when no digit survives
/// cleaning, when the decimal separator appears more than once, or when the
/// value does not fit an `i64` number of minor units.
pub fn parse(raw: &str) -> ResultEngine<MinorUnits> {
    let cleaned = clean(raw);
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        tracing::trace!(input = raw, "amount rejected: no digit");
        return Err(EngineError::amount("no digit in input"));
    }

    let canonical = canonical_decimal(&cleaned).inspect_err(|err| {
        tracing::trace!(input = raw, reason = err.reason(), "amount rejected");
    })?;
    let minor = to_minor_units(&canonical, Currency::default()).inspect_err(|err| {
        tracing::trace!(input = raw, reason = err.reason(), "amount rejected");
    })?;

    tracing::debug!(input = raw, minor, "amount recognized");
    Ok(MinorUnits::new(minor))
}

/// Keeps only ASCII digits and the two separator glyphs.
///
/// Currency words become a space first, but every whitespace run is dropped
/// afterwards, so `1 234` reads as `1234`.
fn clean(raw: &str) -> String {
    let lowered = util::nfkc(raw).to_lowercase();
    let without_currency = CURRENCY_WORDS.replace_all(&lowered, " ");
    without_currency
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect()
}

/// Rewrites `cleaned` so that `.` is the only (and at most one) separator.
fn canonical_decimal(cleaned: &str) -> ResultEngine<String> {
    let decimal = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (None, None) => return Ok(cleaned.to_string()),
        (Some(_), None) => '.',
        (None, Some(_)) => ',',
        (Some(dot), Some(comma)) => match dot.cmp(&comma) {
            Ordering::Greater => '.',
            Ordering::Less => ',',
            Ordering::Equal => {
                return Err(EngineError::amount("ambiguous decimal separator"));
            }
        },
    };

    if cleaned.matches(decimal).count() > 1 {
        return Err(EngineError::amount(format!(
            "decimal separator '{decimal}' appears more than once"
        )));
    }

    let grouping = if decimal == '.' { ',' } else { '.' };
    let canonical: String = cleaned
        .chars()
        .filter(|c| *c != grouping)
        .map(|c| if c == decimal { '.' } else { c })
        .collect();

    if canonical.matches('.').count() > 1 {
        return Err(EngineError::amount("more than one decimal point"));
    }
    Ok(canonical)
}

/// Scales `canonical` to minor units of `currency`, rounding half-up.
///
/// Half-up rounding only looks at the first digit past the currency scale,
/// so the fraction is cut there and arbitrarily long inputs stay exact.
fn to_minor_units(canonical: &str, currency: Currency) -> ResultEngine<i64> {
    let scale = u32::from(currency.minor_units());
    let (integer, fraction) = canonical.split_once('.').unwrap_or((canonical, ""));
    let integer = integer.trim_start_matches('0');
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = fraction
        .get(..scale as usize + 1)
        .unwrap_or(fraction)
        .trim_end_matches('0');
    let literal = if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    };

    let value = Decimal::from_str_exact(&literal)
        .map_err(|err| EngineError::amount(format!("not an exact decimal: {err}")))?;
    let scaled = value
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::from(10_i64.pow(scale)))
        .ok_or_else(|| EngineError::amount("amount too large"))?;
    if !scaled.fract().is_zero() {
        return Err(EngineError::amount("amount is not a whole number of minor units"));
    }
    scaled
        .to_i64()
        .ok_or_else(|| EngineError::amount("amount too large"))
}
