use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Participant not found")]
    ParticipantNotFound,
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound | SignupError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            SignupError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        }
    }
}

// Error bodies use `{"detail": ...}` so clients can show the text as-is.
impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("invalid bind address {0}")]
    InvalidAddr(#[from] std::net::AddrParseError),
    #[error("cannot read seed file {path}: {source}")]
    SeedRead {
        path: String,
        source: std::io::Error,
    },
    #[error("cannot parse seed file {path}: {source}")]
    SeedParse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid seed activity {activity:?}: {reason}")]
    SeedInvalid { activity: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_errors_map_to_http_status() {
        assert_eq!(SignupError::ActivityNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(SignupError::ParticipantNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(SignupError::AlreadySignedUp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn already_signed_up_detail_mentions_signup() {
        assert!(SignupError::AlreadySignedUp
            .to_string()
            .contains("already signed up"));
    }
}
