use serde::{Deserialize, Serialize};

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate meme";

/// Failures inside the two-step meme provider workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("missing credentials")]
    MissingCredentials,

    #[error("catalog fetch failed: {0}")]
    CatalogFetch(String),

    #[error("catalog fetch failed: provider returned no templates")]
    EmptyCatalog,

    #[error("no suitable template")]
    NoSuitableTemplate,

    #[error("caption request failed: {0}")]
    CaptionRequest(String),

    #[error("provider rejected caption: {0}")]
    CaptionRejected(String),

    #[error("{0} timed out")]
    Timeout(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Provider(_) | Self::Internal(_) => 500,
        }
    }

    /// Text safe to hand back to the caller. Provider and internal detail
    /// never leaves the process.
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidInput(msg) => msg.as_str(),
            Self::Provider(_) | Self::Internal(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// JSON shape of every error response: `{ "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(feature = "http")]
mod http_impl {
    use super::{AppError, ErrorBody};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorBody {
                error: self.user_message().to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_client_error() {
        let err = AppError::InvalidInput("Error message is required".to_string());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.user_message(), "Error message is required");
    }

    #[test]
    fn test_provider_detail_is_not_exposed() {
        let err: AppError =
            ProviderError::CaptionRejected("Invalid username/password".to_string()).into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert!(err.to_string().contains("Invalid username/password"));
    }

    #[test]
    fn test_internal_is_server_error() {
        let err = AppError::Internal("join error".to_string());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_provider_error_messages() {
        assert_eq!(
            ProviderError::MissingCredentials.to_string(),
            "missing credentials"
        );
        assert_eq!(
            ProviderError::NoSuitableTemplate.to_string(),
            "no suitable template"
        );
        assert_eq!(
            ProviderError::Timeout("catalog fetch").to_string(),
            "catalog fetch timed out"
        );
    }
}
