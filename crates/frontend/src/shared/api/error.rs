use contracts::shared::api::EnvelopeError;
use thiserror::Error;

/// Failure of a call against the school API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status, whatever the body says.
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// 2xx with `success: false`.
    #[error("server reported failure")]
    Server { message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message the server sent, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } | ApiError::Server { message } => message.as_deref(),
            _ => None,
        }
    }

    /// The response cannot be read at all; retrying the same call will not
    /// help.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApiError::Decode(_))
    }

    /// Text for a toast: the server message verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl From<EnvelopeError> for ApiError {
    fn from(e: EnvelopeError) -> Self {
        match e {
            EnvelopeError::ServerReported(message) => ApiError::Server { message },
            EnvelopeError::Decode(detail) => ApiError::Decode(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Http {
            status: 409,
            message: Some("Admission number already exists".to_string()),
        };
        assert_eq!(err.user_message("Failed to save"), "Admission number already exists");

        let err = ApiError::Http { status: 500, message: None };
        assert_eq!(err.user_message("Failed to delete"), "Failed to delete");

        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.user_message("Failed to fetch"), "Failed to fetch");
    }

    #[test]
    fn test_from_envelope_error() {
        let err: ApiError = EnvelopeError::ServerReported(Some("nope".to_string())).into();
        assert_eq!(err.server_message(), Some("nope"));
        assert!(!err.is_fatal());

        let err: ApiError = EnvelopeError::Decode("missing data".to_string()).into();
        assert!(err.is_fatal());
    }
}
