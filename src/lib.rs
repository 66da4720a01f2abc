//! Client-side orchestration for the bike rental count forecast service:
//! form storage, validation, and the health-probe → predict request sequence.

pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod payload;
pub mod pipeline;
pub mod state;
pub mod validate;

pub use config::ServiceConfig;
pub use error::{FailureKind, PipelineError, UnknownField, ValidationError};
pub use fields::{FieldName, FieldSet, Holiday, Season};
pub use payload::{PredictionPayload, PredictionResponse};
pub use pipeline::{PredictOutcome, Predictor, ProbedRequest};
pub use state::RequestState;
pub use validate::{validate, ValidFieldSet};
