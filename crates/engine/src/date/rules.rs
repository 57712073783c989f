//! The five date recognizers.
//!
//! Each recognizer reads the preprocessed text and returns the date it
//! resolved, or `None` when the text does not have its shape or names a date
//! that does not exist (`31/02/2024`, `31 avril`). A `None` hands the text to
//! the next recognizer.
//!
//! Rules 3 to 5 never resolve to a date after the reference.

use std::sync::LazyLock;

use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Regex;

use super::lexicon;

#[allow(clippy::expect_used)]
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("iso date pattern is valid")
});

#[allow(clippy::expect_used)]
static SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})$").expect("slash date pattern is valid")
});

#[allow(clippy::expect_used)]
static DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    let months = lexicon::MONTHS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"\b(\d{{1,2}})(?:er)?\s+({months})(?:\s+(\d{{4}}))?\b"
    ))
    .expect("day month pattern is valid")
});

#[allow(clippy::expect_used)]
static BARE_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\b").expect("bare day pattern is valid"));

/// Two-digit years (`D/M/YY`) are read in this century.
const TWO_DIGIT_YEAR_BASE: i32 = 2000;

/// How many years a named date without a year may step back. Eight years
/// always contains a leap year, so `29 fevrier` resolves.
const NAMED_DATE_YEAR_LOOKBACK: i32 = 8;

/// Inputs shared by every recognizer for one parse call.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Context {
    pub reference: NaiveDate,
    pub month_lookback: u32,
}

/// Date recognizers in priority order. The first one that resolves wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rule {
    Absolute,
    Relative,
    NamedDayMonth,
    Weekday,
    DayOfMonth,
}

impl Rule {
    pub(crate) const ALL: [Rule; 5] = [
        Rule::Absolute,
        Rule::Relative,
        Rule::NamedDayMonth,
        Rule::Weekday,
        Rule::DayOfMonth,
    ];

    pub(crate) const fn name(self) -> &'static str {
        match self {
            Rule::Absolute => "absolute",
            Rule::Relative => "relative",
            Rule::NamedDayMonth => "named_day_month",
            Rule::Weekday => "weekday",
            Rule::DayOfMonth => "day_of_month",
        }
    }

    pub(crate) fn apply(self, text: &str, ctx: &Context) -> Option<NaiveDate> {
        match self {
            Rule::Absolute => absolute(text),
            Rule::Relative => relative(text, ctx.reference),
            Rule::NamedDayMonth => named_day_month(text, ctx.reference),
            Rule::Weekday => weekday(text, ctx.reference),
            Rule::DayOfMonth => day_of_month(text, ctx),
        }
    }
}

/// Lowercase words of `text`, split on anything that is not a letter or digit.
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

fn capture_number<T: std::str::FromStr>(caps: &regex::Captures<'_>, idx: usize) -> Option<T> {
    caps.get(idx).and_then(|m| m.as_str().parse().ok())
}

/// `YYYY-MM-DD`, `D/M/YYYY` and `D/M/YY`, matched against the whole text.
fn absolute(text: &str) -> Option<NaiveDate> {
    if let Some(caps) = ISO_DATE.captures(text) {
        let year = capture_number::<i32>(&caps, 1)?;
        let month = capture_number::<u32>(&caps, 2)?;
        let day = capture_number::<u32>(&caps, 3)?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let caps = SLASH_DATE.captures(text)?;
    let day = capture_number::<u32>(&caps, 1)?;
    let month = capture_number::<u32>(&caps, 2)?;
    let year = capture_number::<i32>(&caps, 3)?;
    let year = match caps.get(3) {
        Some(m) if m.as_str().len() == 2 => TWO_DIGIT_YEAR_BASE + year,
        _ => year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `aujourd'hui`, `avant-hier` and `hier`.
fn relative(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let compact: String = words(text).collect();
    if compact.contains("aujourdhui") {
        return Some(reference);
    }

    let tokens: Vec<&str> = words(text).collect();
    if tokens.windows(2).any(|pair| pair == ["avant", "hier"]) {
        return reference.checked_sub_days(Days::new(2));
    }
    if tokens.contains(&"hier") {
        return reference.checked_sub_days(Days::new(1));
    }
    None
}

/// `12 fevrier`, `1er mars`, `3 mars 2024`.
///
/// Without a year the most recent occurrence on or before `reference` wins.
fn named_day_month(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let caps = DAY_MONTH.captures(text)?;
    let day = capture_number::<u32>(&caps, 1)?;
    let month = caps.get(2).and_then(|m| lexicon::month(m.as_str()))?;

    if let Some(year) = capture_number::<i32>(&caps, 3) {
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    (0..=NAMED_DATE_YEAR_LOOKBACK)
        .filter_map(|back| NaiveDate::from_ymd_opt(reference.year() - back, month, day))
        .find(|candidate| *candidate <= reference)
}

/// Most recent `lundi`..`dimanche` on or before `reference`.
fn weekday(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let target = words(text).find_map(lexicon::weekday)?;
    let current = reference.weekday().num_days_from_monday();
    let wanted = target.num_days_from_monday();
    let back = (current + 7 - wanted) % 7;
    reference.checked_sub_days(Days::new(u64::from(back)))
}

/// A bare day number, resolved to the most recent month that has that day
/// on or before `reference`, searching at most `month_lookback` months.
fn day_of_month(text: &str, ctx: &Context) -> Option<NaiveDate> {
    let day = BARE_DAY
        .captures(text)
        .and_then(|caps| capture_number::<u32>(&caps, 1))?;
    if !(1..=31).contains(&day) {
        return None;
    }

    let reference = ctx.reference;
    let mut month_start = reference.with_day(1)?;
    for step in 0..ctx.month_lookback {
        if let Some(candidate) = month_start.with_day(day)
            && (step > 0 || day <= reference.day())
        {
            return Some(candidate);
        }
        month_start = month_start.checked_sub_months(Months::new(1))?;
    }
    None
}
