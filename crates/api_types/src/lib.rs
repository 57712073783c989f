use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Mad,
}

/// Machine-readable reason a fragment was refused.
///
/// The first two mirror the engine errors; `amount_not_positive` and
/// `empty_description` are checks the host applies on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    AmountNotRecognized,
    DateNotRecognized,
    AmountNotPositive,
    EmptyDescription,
}

/// Error body: `message` is display-ready (French), `reason` is diagnostic.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseFailure {
    pub kind: FailureKind,
    pub message: String,
    pub reason: Option<String>,
    /// Entry field the failure belongs to (`what`, `when`, `how_much`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

pub mod amount {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AmountParsed {
        pub input: String,
        pub currency: Currency,
        /// Amount in minor units (centimes).
        pub minor: i64,
        /// Canonical plain decimal, e.g. `1234.56`.
        pub plain: String,
        /// French display form, e.g. `1 234,56 MAD`.
        pub display: String,
    }
}

pub mod date {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DateParsed {
        pub input: String,
        /// "Today" the input was resolved against.
        pub reference: NaiveDate,
        pub date: NaiveDate,
    }
}

pub mod entry {
    use super::*;

    /// A finished expense entry, ready to hand to storage.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryParsed {
        pub description: String,
        pub date: NaiveDate,
        pub amount: amount::AmountParsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_kind_is_snake_case() {
        let failure = ParseFailure {
            kind: FailureKind::AmountNotPositive,
            message: "Le montant doit etre positif.".to_string(),
            reason: None,
            field: Some("how_much".to_string()),
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["kind"], "amount_not_positive");
        assert_eq!(json["field"], "how_much");
    }

    #[test]
    fn date_serializes_as_iso() {
        let parsed = date::DateParsed {
            input: "hier".to_string(),
            reference: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["date"], "2025-01-09");
        assert_eq!(json["reference"], "2025-01-10");
    }
}
