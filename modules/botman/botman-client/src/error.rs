use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Problem document returned by the API for any non-200 response.
///
/// Compared by value: two errors are equal when every field matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub error_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detail: String,
    #[serde(default)]
    pub instance: Option<String>,
    /// HTTP status code. Always taken from the response, not the body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: u16,
}

/// Missing keys and explicit `null` both decode to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API error: status={} type={:?} title={:?} detail={:?}",
            self.status, self.error_type, self.title, self.detail
        )
    }
}

impl std::error::Error for ApiError {}

/// Failures of the transport layer: the request never produced a response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request build error: {0}")]
    Build(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors returned by [`BotmanClient`](crate::BotmanClient) operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("struct validation: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the request could not be dispatched or completed.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }

    /// The structured API error, if the server answered with a non-200 status.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_deserializes_problem_document() {
        let err: ApiError = serde_json::from_str(
            r#"{"type":"internal_error","title":"Internal Server Error","detail":"Error fetching data","status":500}"#,
        )
        .unwrap();

        assert_eq!(
            err,
            ApiError {
                error_type: "internal_error".to_string(),
                title: "Internal Server Error".to_string(),
                detail: "Error fetching data".to_string(),
                instance: None,
                status: 500,
            }
        );
    }

    #[test]
    fn test_api_error_missing_fields_default() {
        let err: ApiError = serde_json::from_str(r#"{"detail":"boom"}"#).unwrap();
        assert_eq!(err.detail, "boom");
        assert!(err.error_type.is_empty());
        assert_eq!(err.status, 0);
    }

    #[test]
    fn test_api_error_null_fields_default() {
        let err: ApiError = serde_json::from_str(
            r#"{"type":null,"title":null,"detail":"Error fetching data","instance":null,"status":null}"#,
        )
        .unwrap();
        assert_eq!(
            err,
            ApiError {
                detail: "Error fetching data".to_string(),
                ..ApiError::default()
            }
        );
    }

    #[test]
    fn test_api_error_serializes_every_field() {
        let value = serde_json::to_value(ApiError {
            status: 404,
            ..ApiError::default()
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type":"","title":"","detail":"","instance":null,"status":404})
        );
    }

    #[test]
    fn test_transport_error_display_names_operation() {
        let err = ClientError::Transport {
            operation: "GetBotCategoryException",
            source: TransportError::Connection("refused".into()),
        };
        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            "GetBotCategoryException request failed: Connection error: refused"
        );
    }

    #[test]
    fn test_api_error_accessor() {
        let api = ApiError {
            status: 404,
            ..ApiError::default()
        };
        let err = ClientError::from(api.clone());
        assert_eq!(err.api_error(), Some(&api));
        assert!(!err.is_transport());
    }
}
