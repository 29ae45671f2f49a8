use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ClientError};

const UNPARSEABLE_ERROR_TITLE: &str = "Failed to unmarshal error body";

/// Fully buffered HTTP response returned by a [`Session`](crate::Session)
///
/// Consuming methods take `self`, so the body is released on every path.
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("body_len", &self.body.len())
            .finish()
    }
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Consume the response and deserialize as JSON
    ///
    /// # Errors
    /// Returns [`ClientError::Serialization`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ClientError> {
        let value = serde_json::from_slice(&self.body)?;
        Ok(value)
    }

    /// Consume a non-success response and build the structured API error.
    ///
    /// The status always reflects the HTTP status line. A body that is not a
    /// problem document is kept verbatim in `detail`.
    pub fn into_api_error(self) -> ApiError {
        let status = self.status.as_u16();
        let mut err = match serde_json::from_slice::<ApiError>(&self.body) {
            Ok(err) => err,
            Err(e) => {
                tracing::warn!(status, error = %e, "could not parse API error body");
                ApiError {
                    title: UNPARSEABLE_ERROR_TITLE.to_string(),
                    detail: String::from_utf8_lossy(&self.body).into_owned(),
                    ..ApiError::default()
                }
            }
        };
        err.status = status;
        err
    }
}
