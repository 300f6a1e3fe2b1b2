//! Change Notifications
//!
//! Decoding of the text frames pushed over the `/ws` socket.

use serde::Deserialize;
use serde_json::error::Category;
use thiserror::Error;

/// A single change to the remote map
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ChangeNotification {
    Created { key: String, value: String },
    Updated { key: String, value: String },
    Deleted { key: String },
}

/// Why a frame was not turned into a notification
#[derive(Debug, Error)]
pub enum FrameError {
    /// Plain text, e.g. the server's `echo: ...` diagnostics
    #[error("frame is not JSON: {0}")]
    NotJson(#[source] serde_json::Error),
    #[error("frame is not a known change notification: {0}")]
    Unrecognized(#[source] serde_json::Error),
}

/// Decode one socket text frame.
pub fn decode_frame(text: &str) -> Result<ChangeNotification, FrameError> {
    serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Data => FrameError::Unrecognized(e),
        Category::Syntax | Category::Eof | Category::Io => FrameError::NotJson(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_created() {
        let n = decode_frame(r#"{"action":"created","key":"a","value":"1"}"#).unwrap();
        assert_eq!(n, ChangeNotification::Created { key: "a".into(), value: "1".into() });
    }

    #[test]
    fn test_decode_updated() {
        let n = decode_frame(r#"{"action":"updated","key":"a","value":"2"}"#).unwrap();
        assert_eq!(n, ChangeNotification::Updated { key: "a".into(), value: "2".into() });
    }

    #[test]
    fn test_decode_deleted_ignores_extra_fields() {
        let n = decode_frame(r#"{"action":"deleted","key":"a","value":null}"#).unwrap();
        assert_eq!(n, ChangeNotification::Deleted { key: "a".into() });
    }

    #[test]
    fn test_echo_text_is_not_json() {
        let err = decode_frame("echo: hello").unwrap_err();
        assert!(matches!(err, FrameError::NotJson(_)));
    }

    #[test]
    fn test_truncated_json_is_not_json() {
        let err = decode_frame(r#"{"action":"created""#).unwrap_err();
        assert!(matches!(err, FrameError::NotJson(_)));
    }

    #[test]
    fn test_unknown_action_is_unrecognized() {
        let err = decode_frame(r#"{"action":"renamed","key":"a"}"#).unwrap_err();
        assert!(matches!(err, FrameError::Unrecognized(_)));
    }

    #[test]
    fn test_created_without_value_is_unrecognized() {
        let err = decode_frame(r#"{"action":"created","key":"a"}"#).unwrap_err();
        assert!(matches!(err, FrameError::Unrecognized(_)));
    }

    #[test]
    fn test_json_scalar_is_unrecognized() {
        let err = decode_frame("42").unwrap_err();
        assert!(matches!(err, FrameError::Unrecognized(_)));
    }
}
