use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message shown for 401 responses from any endpoint.
pub const MSG_PLEASE_LOG_IN: &str = "Please log in first (Unauthorized)";

/// Message shown when no response could be obtained at all.
pub const MSG_NETWORK: &str = "Could not reach the server. Check your connection and try again.";

/// Message shown when the backend reports the vote was already spent.
pub const MSG_ALREADY_VOTED: &str = "You can no longer vote on this quote.";

/// Fallback message for a failed vote with no usable error body.
pub const MSG_VOTE_FAILED: &str = "Vote failed";

/// Structured error code for an exhausted vote. Older backend deployments
/// only send a free-text message, so `classify_response` also matches the
/// two known phrasings below.
pub const ALREADY_VOTED_CODE: &str = "ALREADY_VOTED";

const ALREADY_VOTED_PHRASES: [&str; 2] = ["User has already voted", "Cannot vote anymore"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{MSG_NETWORK}")]
    Network,

    #[error("{MSG_PLEASE_LOG_IN}")]
    Auth,

    #[error("{MSG_ALREADY_VOTED}")]
    AlreadyVoted,

    #[error("{0}")]
    Request(String),
}

impl ApiError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Auth)
    }
}

/// Maps a non-2xx response to the error taxonomy. The body is whatever JSON
/// the backend sent, or `Value::Null` when it sent none.
pub fn classify_response(status: StatusCode, body: &Value) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::Auth;
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));

    let coded = body.get("code").and_then(Value::as_str) == Some(ALREADY_VOTED_CODE);
    if coded || ALREADY_VOTED_PHRASES.iter().any(|phrase| message.contains(phrase)) {
        return ApiError::AlreadyVoted;
    }

    ApiError::Request(message)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_401_maps_to_auth_regardless_of_body() {
        let err = classify_response(StatusCode::UNAUTHORIZED, &json!({"message": "nope"}));
        assert_eq!(err, ApiError::Auth);
        assert!(err.is_auth_failure());
        assert_eq!(err.to_string(), MSG_PLEASE_LOG_IN);
    }

    #[test]
    fn message_field_is_surfaced_for_other_failures() {
        let err = classify_response(StatusCode::BAD_REQUEST, &json!({"message": "bad input"}));
        assert_eq!(err, ApiError::Request("bad input".to_string()));
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn missing_message_falls_back_to_generic_status_text() {
        let err = classify_response(StatusCode::INTERNAL_SERVER_ERROR, &Value::Null);
        assert_eq!(err, ApiError::Request("HTTP error 500".to_string()));
    }

    #[test]
    fn already_voted_detected_by_structured_code() {
        let body = json!({"code": "ALREADY_VOTED", "message": "vote spent"});
        assert_eq!(classify_response(StatusCode::CONFLICT, &body), ApiError::AlreadyVoted);
    }

    #[test]
    fn already_voted_detected_by_known_phrases() {
        for phrase in ["User has already voted", "Cannot vote anymore"] {
            let body = json!({ "message": phrase });
            let err = classify_response(StatusCode::BAD_REQUEST, &body);
            assert_eq!(err, ApiError::AlreadyVoted);
            assert_eq!(err.to_string(), MSG_ALREADY_VOTED);
        }
    }

    #[test]
    fn unrelated_message_is_not_rewritten() {
        let body = json!({"message": "Quote not found"});
        assert_eq!(
            classify_response(StatusCode::NOT_FOUND, &body),
            ApiError::Request("Quote not found".to_string())
        );
    }
}
