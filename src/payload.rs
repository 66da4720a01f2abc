use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::validate::ValidFieldSet;

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPayload {
    pub hour: i64,
    pub season: String,
    pub holiday: u8,
    pub temperature: f64,
    pub humidity: i64,
    pub dew_point: f64,
    pub wind_speed: f64,
    pub visibility: i64,
    pub solar_radiation: f64,
    pub rainfall: f64,
    pub snowfall: f64,
}

impl From<&ValidFieldSet> for PredictionPayload {
    fn from(v: &ValidFieldSet) -> Self {
        Self {
            hour: v.hour(),
            season: v.season().wire_name().to_string(),
            holiday: v.holiday().flag(),
            temperature: v.temperature(),
            humidity: v.humidity(),
            dew_point: v.dew_point(),
            wind_speed: v.wind_speed(),
            visibility: v.visibility(),
            solar_radiation: v.solar_radiation(),
            rainfall: v.rainfall(),
            snowfall: v.snowfall(),
        }
    }
}

/// Reply of `POST /api/predict`. Every key is optional because error bodies
/// only carry `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionResponse {
    pub status: Option<String>,
    pub prediction: Option<f64>,
    pub error: Option<String>,
}

const FALLBACK_MESSAGE: &str = "Failed to get prediction";

impl PredictionResponse {
    pub fn parse(body: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Server-provided message, or the generic one when it is absent or empty.
    pub fn error_message(&self) -> String {
        self.error
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }

    /// Interpret a 2xx reply: `status:"success"` is the only success marker.
    pub fn into_prediction(self) -> Result<f64, PipelineError> {
        if self.status.as_deref() != Some("success") {
            return Err(PipelineError::Prediction(self.error_message()));
        }
        self.prediction.ok_or_else(|| {
            PipelineError::Parse("response is missing the prediction value".to_string())
        })
    }
}
