use std::fmt;

/// What the result panel shows. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success { predicted_count: f64 },
    Failed { message: String },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn prediction(&self) -> Option<f64> {
        match self {
            RequestState::Success { predicted_count } => Some(*predicted_count),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// A field edit discards a shown result or error. Loading is left alone.
    pub(crate) fn after_edit(&self) -> Option<RequestState> {
        match self {
            RequestState::Success { .. } | RequestState::Failed { .. } => Some(RequestState::Idle),
            RequestState::Idle | RequestState::Loading => None,
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Idle => f.write_str("-"),
            RequestState::Loading => f.write_str("Loading..."),
            RequestState::Success { predicted_count } => write!(f, "{predicted_count}"),
            RequestState::Failed { message } => f.write_str(message),
        }
    }
}
