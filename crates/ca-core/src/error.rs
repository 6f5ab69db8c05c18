use thiserror::Error;

/// Failure of a call against the backend API.
///
/// The four variants mirror where a call can go wrong: the transport, the
/// HTTP status, the `{success, message, data}` envelope, or the payload shape.
/// Probers collapse all of them into their safe default; mutating operations
/// surface [`ApiError::user_message`] to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Message suitable for a notification.
    ///
    /// Returns the backend's own text when it sent one, otherwise a generic
    /// description of the failure class.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "The server could not be reached".to_string(),
            ApiError::Status { message, status } => {
                if message.is_empty() {
                    format!("The server answered with status {status}")
                } else {
                    message.clone()
                }
            }
            ApiError::Rejected(message) => {
                if message.is_empty() {
                    "The request was rejected".to_string()
                } else {
                    message.clone()
                }
            }
            ApiError::Malformed(_) => "The server sent an unexpected response".to_string(),
        }
    }

    /// HTTP status attached to the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors produced by authentication operations that validate input locally
/// before talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation(message) => message.clone(),
            AuthError::Api(err) => err.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_text() {
        let err = ApiError::Status {
            status: 401,
            message: "Credenciales inválidas".to_string(),
        };
        assert_eq!(err.user_message(), "Credenciales inválidas");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn user_message_falls_back_for_empty_backend_text() {
        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "The server answered with status 500");

        let err = ApiError::Rejected(String::new());
        assert_eq!(err.user_message(), "The request was rejected");
    }

    #[test]
    fn transport_errors_hide_internal_detail() {
        let err = ApiError::Transport("connection refused (os error 111)".to_string());
        assert_eq!(err.user_message(), "The server could not be reached");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn auth_error_wraps_api_error() {
        let err: AuthError = ApiError::Rejected("Token inválido".to_string()).into();
        assert_eq!(err.user_message(), "Token inválido");
    }
}
