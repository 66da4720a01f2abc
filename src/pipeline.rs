use parking_lot::Mutex;

use crate::client::PredictionClient;
use crate::config::ServiceConfig;
use crate::error::{PipelineError, UnknownField};
use crate::fields::{FieldName, FieldSet};
use crate::payload::{PredictionPayload, PredictionResponse};
use crate::state::RequestState;
use crate::validate::{validate, ValidFieldSet};

/// Result of a predict trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictOutcome {
    /// The request ran to completion; carries the state it ended in.
    Completed(RequestState),
    /// Another request was already in flight; nothing was sent.
    Rejected,
}

/// A validated request whose health probe succeeded. Only [`ProbedRequest::probe`]
/// builds one, so the prediction call can never precede the probe.
#[derive(Debug)]
pub struct ProbedRequest {
    payload: PredictionPayload,
}

impl ProbedRequest {
    pub async fn probe(
        client: &PredictionClient,
        valid: &ValidFieldSet,
    ) -> Result<Self, PipelineError> {
        let status = client.health().await?;
        if !status.is_success() {
            tracing::warn!("health probe returned {}", status);
            return Err(PipelineError::Unavailable);
        }
        Ok(Self {
            payload: PredictionPayload::from(valid),
        })
    }

    pub fn payload(&self) -> &PredictionPayload {
        &self.payload
    }

    /// Transport failures here are prediction failures; `Transport` is kept
    /// for the probe so the two stay distinguishable.
    pub async fn send(self, client: &PredictionClient) -> Result<f64, PipelineError> {
        let reply = client
            .predict(&self.payload)
            .await
            .map_err(|e| match e {
                PipelineError::Transport(message) => PipelineError::Prediction(message),
                other => other,
            })?;
        let response = PredictionResponse::parse(&reply.body)?;
        if !reply.status.is_success() {
            return Err(PipelineError::Prediction(response.error_message()));
        }
        response.into_prediction()
    }
}

/// Clears `Loading` if the request future is dropped before it finishes.
struct InFlight<'a> {
    state: &'a Mutex<RequestState>,
    finished: bool,
}

impl InFlight<'_> {
    fn finish(mut self, next: RequestState) {
        *self.state.lock() = next;
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let mut state = self.state.lock();
            if state.is_loading() {
                *state = RequestState::Idle;
            }
        }
    }
}

/// Owns the form values and the request state, and runs the
/// validate → probe → predict sequence.
///
/// Methods take `&self`; the presentation layer can keep editing and reading
/// state while a prediction is awaited. At most one request is in flight.
pub struct Predictor {
    client: PredictionClient,
    fields: Mutex<FieldSet>,
    state: Mutex<RequestState>,
}

impl Predictor {
    pub fn new(config: ServiceConfig) -> Result<Self, PipelineError> {
        Ok(Self::with_client(PredictionClient::new(config)?))
    }

    pub fn with_client(client: PredictionClient) -> Self {
        Self {
            client,
            fields: Mutex::new(FieldSet::default()),
            state: Mutex::new(RequestState::Idle),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        self.client.config()
    }

    pub fn fields(&self) -> FieldSet {
        self.fields.lock().clone()
    }

    pub fn state(&self) -> RequestState {
        self.state.lock().clone()
    }

    /// Store one raw value. A shown result or error is cleared first.
    pub fn set_field(&self, name: FieldName, raw: impl Into<String>) {
        {
            let mut state = self.state.lock();
            if let Some(next) = state.after_edit() {
                tracing::debug!("edit of {} clears {:?}", name, *state);
                *state = next;
            }
        }
        self.fields.lock().set(name, raw);
    }

    /// Same as [`set_field`](Self::set_field) for a field named on the wire.
    pub fn set_field_named(&self, name: &str, raw: impl Into<String>) -> Result<(), UnknownField> {
        let name: FieldName = name.parse()?;
        self.set_field(name, raw);
        Ok(())
    }

    /// Run one prediction for the current form. Never fails: every error ends
    /// up as `RequestState::Failed`.
    pub async fn predict(&self) -> PredictOutcome {
        let (fields, in_flight) = {
            let mut state = self.state.lock();
            if state.is_loading() {
                tracing::debug!("prediction already in flight; trigger ignored");
                return PredictOutcome::Rejected;
            }
            *state = RequestState::Loading;
            let fields = self.fields.lock().clone();
            (
                fields,
                InFlight {
                    state: &self.state,
                    finished: false,
                },
            )
        };

        let next = match self.run(&fields).await {
            Ok(predicted_count) => {
                tracing::info!("prediction succeeded: {}", predicted_count);
                RequestState::Success { predicted_count }
            }
            Err(e) => {
                tracing::warn!(kind = ?e.kind(), "prediction failed: {}", e);
                RequestState::Failed {
                    message: e.to_string(),
                }
            }
        };
        in_flight.finish(next.clone());
        PredictOutcome::Completed(next)
    }

    async fn run(&self, fields: &FieldSet) -> Result<f64, PipelineError> {
        let valid = validate(fields)?;
        let probed = ProbedRequest::probe(&self.client, &valid).await?;
        probed.send(&self.client).await
    }
}
