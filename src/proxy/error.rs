use hyper::StatusCode;
use thiserror::Error;

use crate::api::ErrorBody;

/// Every way a `/api/chat` call can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProxyError {
    /// Upstream URL or credential is not set.
    #[error("Server configuration error")]
    Configuration { missing: Vec<&'static str> },

    /// The upstream service answered outside 2xx.
    #[error("External API error: {status}")]
    Upstream { status: u16, body: String },

    /// Network failure, unreadable body, or JSON that does not parse.
    #[error("Failed to process chat request")]
    Transport(String),
}

impl ProxyError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        let detail = err.to_string();
        if detail.is_empty() {
            ProxyError::Transport("Unknown error".to_string())
        } else {
            ProxyError::Transport(detail)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::Configuration { .. } | ProxyError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let details = match self {
            ProxyError::Configuration { missing } => {
                Some(format!("Missing environment variables: {}", missing.join(", ")))
            }
            ProxyError::Upstream { body, .. } => Some(body.clone()),
            ProxyError::Transport(detail) => Some(detail.clone()),
        };
        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}
