//! Normalization engine for spoken expense entries (French, Morocco).
//!
//! Two independent, pure entry points:
//!
//! - [`normalize_amount`] turns `"1 234,56 dhs"` into [`MinorUnits`] (`123456`).
//! - [`normalize_date`] turns `"3 mars"` plus a reference date into a
//!   [`NaiveDate`].
//!
//! Neither reads a clock, touches I/O or keeps state: the same input and
//! reference always produce the same result, from any thread.
//!
//! ```rust
//! use chrono::NaiveDate;
//!
//! let reference = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
//! assert_eq!(engine::normalize_amount("150,5").unwrap().minor(), 15050);
//! assert_eq!(
//!     engine::normalize_date("hier", reference).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
//! );
//! ```
use chrono::NaiveDate;

pub use amount::AmountNormalizer;
pub use currency::{Currency, UnsupportedCurrency};
pub use date::{DEFAULT_MONTH_LOOKBACK, DateNormalizer};
pub use error::{EngineError, ErrorKind};
pub use money::MinorUnits;

pub mod amount;
mod currency;
pub mod date;
mod error;
mod money;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Reads `text` as an amount in minor units.
pub fn normalize_amount(text: &str) -> ResultEngine<MinorUnits> {
    amount::parse(text)
}

/// Resolves `text` to a calendar date relative to `reference`, with the
/// default bare-day look-back.
pub fn normalize_date(text: &str, reference: NaiveDate) -> ResultEngine<NaiveDate> {
    DateNormalizer::default().parse(text, reference)
}
