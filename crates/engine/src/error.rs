//! The module contains the errors the engine can return.
//!
//! There are only two, one per normalizer:
//!
//! - [`AmountNotRecognized`] returned when a text fragment cannot be read as
//!   an amount.
//! - [`DateNotRecognized`] returned when a text fragment cannot be resolved to
//!   a calendar date.
//!
//! Both are local validation failures: nothing to retry, no partial result.
//! The `Display` form is the French message shown next to the input field;
//! [`EngineError::reason`] carries the diagnostic used in logs.
//!
//!  [`AmountNotRecognized`]: EngineError::AmountNotRecognized
//!  [`DateNotRecognized`]: EngineError::DateNotRecognized
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Montant non reconnu.")]
    AmountNotRecognized { reason: String },
    #[error("Date non reconnue.")]
    DateNotRecognized { reason: String },
}

/// Stable, machine-readable error kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AmountNotRecognized,
    DateNotRecognized,
}

impl EngineError {
    pub(crate) fn amount(reason: impl Into<String>) -> Self {
        Self::AmountNotRecognized {
            reason: reason.into(),
        }
    }

    pub(crate) fn date(reason: impl Into<String>) -> Self {
        Self::DateNotRecognized {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AmountNotRecognized { .. } => ErrorKind::AmountNotRecognized,
            Self::DateNotRecognized { .. } => ErrorKind::DateNotRecognized,
        }
    }

    /// Diagnostic explaining which step rejected the input.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::AmountNotRecognized { reason } | Self::DateNotRecognized { reason } => reason,
        }
    }
}

impl ErrorKind {
    /// Snake-case code, identical to the serde representation.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::AmountNotRecognized => "amount_not_recognized",
            ErrorKind::DateNotRecognized => "date_not_recognized",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_user_message() {
        assert_eq!(EngineError::amount("empty").to_string(), "Montant non reconnu.");
        assert_eq!(EngineError::date("blank").to_string(), "Date non reconnue.");
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let err = EngineError::date("no recognizer matched");
        assert_eq!(err.kind(), ErrorKind::DateNotRecognized);
        assert_eq!(err.reason(), "no recognizer matched");
        assert_eq!(
            serde_json::to_string(&err.kind()).unwrap(),
            "\"date_not_recognized\""
        );
        assert_eq!(ErrorKind::AmountNotRecognized.to_string(), "amount_not_recognized");
    }
}
