use std::process::ExitCode;

use api_types::{FailureKind, ParseFailure};
use engine::{EngineError, ErrorKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{field}: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: EngineError,
    },
    #[error("Décris la dépense.")]
    EmptyDescription,
    #[error("Le montant doit être supérieur à zéro.")]
    AmountNotPositive,
}

impl AppError {
    /// 1 for input the user can correct, 2 for setup problems.
    pub fn exit_code(&self) -> ExitCode {
        if self.to_failure().is_some() {
            ExitCode::from(1)
        } else {
            ExitCode::from(2)
        }
    }

    /// Wire form of user-facing failures; `None` for setup errors.
    pub fn to_failure(&self) -> Option<ParseFailure> {
        let failure = match self {
            AppError::Engine(err) => ParseFailure {
                kind: failure_kind(err),
                message: err.to_string(),
                reason: Some(err.reason().to_string()),
                field: None,
            },
            AppError::Field { field, source } => ParseFailure {
                kind: failure_kind(source),
                message: source.to_string(),
                reason: Some(source.reason().to_string()),
                field: Some((*field).to_string()),
            },
            AppError::EmptyDescription => ParseFailure {
                kind: FailureKind::EmptyDescription,
                message: self.to_string(),
                reason: None,
                field: Some("what".to_string()),
            },
            AppError::AmountNotPositive => ParseFailure {
                kind: FailureKind::AmountNotPositive,
                message: self.to_string(),
                reason: None,
                field: Some("how_much".to_string()),
            },
            AppError::Config(_)
            | AppError::InvalidSetting(_)
            | AppError::Io(_)
            | AppError::Json(_) => return None,
        };
        Some(failure)
    }
}

fn failure_kind(err: &EngineError) -> FailureKind {
    match err.kind() {
        ErrorKind::AmountNotRecognized => FailureKind::AmountNotRecognized,
        ErrorKind::DateNotRecognized => FailureKind::DateNotRecognized,
    }
}
