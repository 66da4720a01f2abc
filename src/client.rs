use reqwest::StatusCode;

use crate::config::ServiceConfig;
use crate::error::PipelineError;
use crate::payload::PredictionPayload;

pub const HEALTH_PATH: &str = "/api/health";
pub const PREDICT_PATH: &str = "/api/predict";

/// Raw HTTP reply: status plus body text, decoded later by the pipeline.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: StatusCode,
    pub body: String,
}

/// Thin transport to the prediction service. Knows URLs and wire formats,
/// nothing about request state.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl PredictionClient {
    pub fn new(config: ServiceConfig) -> Result<Self, PipelineError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PipelineError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// `GET /api/health`; the body is ignored.
    pub async fn health(&self) -> Result<StatusCode, PipelineError> {
        let url = self.config.endpoint(HEALTH_PATH);
        tracing::debug!("probing {}", url);
        let response = self.http.get(&url).send().await?;
        Ok(response.status())
    }

    /// `POST /api/predict` with the payload as JSON.
    pub async fn predict(&self, payload: &PredictionPayload) -> Result<RawReply, PipelineError> {
        let url = self.config.endpoint(PREDICT_PATH);
        tracing::debug!("posting prediction request to {}", url);
        let response = self.http.post(&url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawReply { status, body })
    }
}
