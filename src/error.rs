use thiserror::Error;

use crate::fields::FieldName;

/// Local, pre-network rejection of the form. Display is the exact text shown
/// in the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Hour must be between 0 and 23")]
    HourOutOfRange,
    #[error("Humidity must be between 0 and 100")]
    HumidityOutOfRange,
    #[error("Visibility cannot be negative")]
    NegativeVisibility,
    #[error("Rainfall cannot be negative")]
    NegativeRainfall,
    #[error("Snowfall cannot be negative")]
    NegativeSnowfall,
    #[error("Solar radiation cannot be negative")]
    NegativeSolarRadiation,
    #[error("{} must be a number", .0.label())]
    NotANumber(FieldName),
    #[error("Season must be one of Spring, Summer, Fall, Winter")]
    UnknownSeason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Availability,
    Prediction,
    Transport,
    Parse,
}

/// Every way a prediction request can end without a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Backend service is not available")]
    Unavailable,
    #[error("{0}")]
    Prediction(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Parse(String),
}

impl PipelineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PipelineError::Validation(_) => FailureKind::Validation,
            PipelineError::Unavailable => FailureKind::Availability,
            PipelineError::Prediction(_) => FailureKind::Prediction,
            PipelineError::Transport(_) => FailureKind::Transport,
            PipelineError::Parse(_) => FailureKind::Parse,
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(e: reqwest::Error) -> Self {
        PipelineError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::Parse(e.to_string())
    }
}

/// Field name that is not part of the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);
