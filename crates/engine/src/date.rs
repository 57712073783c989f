//! Date normalizer.
//!
//! Resolves a spoken or typed French date fragment against a caller-supplied
//! reference date ("today"). The engine never reads a clock.
//!
//! Recognizers, tried in order (first match wins):
//!
//! 1. absolute: `2024-03-05`, `5/3/2024`, `5/3/24`
//! 2. relative: `aujourd'hui`, `hier`, `avant-hier`
//! 3. named day and month: `12 février`, `1er mars 2024`
//! 4. weekday: `lundi` .. `dimanche`
//! 5. bare day of month: `31`
//!
//! Partial dates (3 to 5) always resolve on or before the reference.

use chrono::NaiveDate;

use crate::{EngineError, ResultEngine, util};

mod lexicon;
mod rules;

use rules::{Context, Rule};

/// Default number of months (reference month included) searched for a bare
/// day of month.
pub const DEFAULT_MONTH_LOOKBACK: u32 = 14;

/// Date normalizer.
///
/// Holds only the bare-day look-back bound; `Copy` and free to share across
/// threads.
///
/// ```rust
/// use chrono::NaiveDate;
/// use engine::DateNormalizer;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let date = DateNormalizer::default().parse("3 mars", reference).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 3).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateNormalizer {
    month_lookback: u32,
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self {
            month_lookback: DEFAULT_MONTH_LOOKBACK,
        }
    }
}

impl DateNormalizer {
    /// Overrides how many months a bare day of month may search back.
    #[must_use]
    pub const fn with_month_lookback(mut self, months: u32) -> Self {
        self.month_lookback = months;
        self
    }

    #[must_use]
    pub const fn month_lookback(&self) -> u32 {
        self.month_lookback
    }

    /// Parses `raw` relative to `reference`.
    pub fn parse(&self, raw: &str, reference: NaiveDate) -> ResultEngine<NaiveDate> {
        let text = preprocess(raw);
        if text.is_empty() {
            tracing::trace!(input = raw, "date rejected: blank");
            return Err(EngineError::date("blank input"));
        }

        let ctx = Context {
            reference,
            month_lookback: self.month_lookback,
        };
        for rule in Rule::ALL {
            if let Some(date) = rule.apply(&text, &ctx) {
                tracing::debug!(input = raw, rule = rule.name(), %date, "date recognized");
                return Ok(date);
            }
            tracing::trace!(input = raw, rule = rule.name(), "no match");
        }

        tracing::trace!(input = raw, "date rejected: no recognizer matched");
        Err(EngineError::date(format!("no recognizer matched '{text}'")))
    }
}

/// Canonical form the recognizers match against: NFKC, lowercase, single
/// spaces, no leading `le ` article, no diacritics.
pub(crate) fn preprocess(raw: &str) -> String {
    let lowered = util::nfkc(raw).to_lowercase().replace('’', "'");
    let collapsed = util::collapse_whitespace(&lowered);
    let without_article = collapsed
        .strip_prefix("le ")
        .map(str::trim)
        .unwrap_or(collapsed.as_str());
    util::strip_diacritics(without_article)
}
