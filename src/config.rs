use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the prediction service lives. Fixed for the life of a `Predictor`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
        .normalized()
    }

    /// Read a JSON config file such as `{"base_url": "http://10.0.0.4:5000"}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let cfg: ServiceConfig = serde_json::from_str(&data)
            .with_context(|| format!("invalid config JSON in {}", path.display()))?;
        Ok(cfg.normalized())
    }

    /// `PREDICTOR_CONFIG` (file) wins; otherwise `PREDICTOR_API_URL` and
    /// `PREDICTOR_TIMEOUT_SECS`, each falling back to its default.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = std::env::var("PREDICTOR_CONFIG") {
            return Self::load(path);
        }
        let base_url = std::env::var("PREDICTOR_API_URL").unwrap_or_else(|_| default_base_url());
        let timeout_secs = match std::env::var("PREDICTOR_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("PREDICTOR_TIMEOUT_SECS is not a number: {s:?}"))?,
            Err(_) => default_timeout_secs(),
        };
        Ok(Self {
            base_url,
            timeout_secs,
        }
        .normalized())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self
    }
}
