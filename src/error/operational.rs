use serde::Serialize;
use thiserror::Error;

/// Coarse failure classification derived from the HTTP status code.
///
/// `Fail` covers the 4xx range; everything else, including the 5xx codes
/// this crate produces itself, is `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Fail,
    Error,
}

impl Status {
    fn from_code(status_code: u16) -> Self {
        if (400..500).contains(&status_code) {
            Status::Fail
        } else {
            Status::Error
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Fail => f.write_str("fail"),
            Status::Error => f.write_str("error"),
        }
    }
}

/// An anticipated, handled failure.
///
/// Built at the point of failure detection and handed to whatever boundary
/// layer renders responses; never mutated afterwards. `is_operational`
/// distinguishes these from defects in surrounding code, which stay plain
/// errors without the marker.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct OperationalError {
    /// Human-readable description, safe to show to clients.
    pub message: String,
    /// Conventional HTTP status code, as supplied by the caller.
    pub status_code: u16,
    /// Derived classification: `Fail` for 4xx, `Error` otherwise.
    pub status: Status,
    /// Always `true` for errors built by [`OperationalError::new`].
    pub is_operational: bool,
}

impl OperationalError {
    /// Build an operational error from a message and HTTP status code.
    ///
    /// The status code is stored as supplied (no range validation) and
    /// `status` is derived from it.
    ///
    /// # Arguments
    /// * `message` - Human-readable description
    /// * `status_code` - Conventional HTTP status code
    ///
    /// # Returns
    /// OperationalError with `is_operational` set
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            status: Status::from_code(status_code),
            is_operational: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_codes_classified_as_fail() {
        assert_eq!(OperationalError::new("Bad request", 400).status, Status::Fail);
        assert_eq!(OperationalError::new("Not found", 404).status, Status::Fail);
        assert_eq!(OperationalError::new("Client closed", 499).status, Status::Fail);
    }

    #[test]
    fn test_other_codes_classified_as_error() {
        assert_eq!(OperationalError::new("Moved", 301).status, Status::Error);
        assert_eq!(OperationalError::new("Server blew up", 500).status, Status::Error);
        assert_eq!(OperationalError::new("Bad gateway", 502).status, Status::Error);
    }

    #[test]
    fn test_preserves_message_and_status_code() {
        let err = OperationalError::new("Not found", 404);

        assert_eq!(err.message, "Not found");
        assert_eq!(err.status_code, 404);
        assert!(err.is_operational);
    }

    #[test]
    fn test_display_is_the_message() {
        let err = OperationalError::new("Server blew up", 500);
        assert_eq!(err.to_string(), "Server blew up");
    }

    #[test]
    fn test_serializes_with_lowercase_status() {
        let err = OperationalError::new("Not found", 404);
        let json = serde_json::to_value(&err).expect("Failed to serialize error");

        assert_eq!(
            json,
            serde_json::json!({
                "message": "Not found",
                "status_code": 404,
                "status": "fail",
                "is_operational": true,
            })
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Fail.to_string(), "fail");
        assert_eq!(Status::Error.to_string(), "error");
    }
}
