use thiserror::Error;

/// Failure of a single console API call. Every variant is terminal for the
/// triggering action; the page keeps working and the user retries by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("HTTP error: {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(" ({})", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_body_when_present() {
        assert_eq!(ApiError::status(502, "").to_string(), "HTTP error: 502");
        assert_eq!(
            ApiError::status(403, " Forbidden ").to_string(),
            "HTTP error: 403 (Forbidden)"
        );
    }

    #[test]
    fn transport_and_decode_messages() {
        assert_eq!(
            ApiError::Transport("offline".into()).to_string(),
            "Failed to send request: offline"
        );
        assert_eq!(
            ApiError::Decode("expected array".into()).to_string(),
            "Failed to parse response: expected array"
        );
    }
}
