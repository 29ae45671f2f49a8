use async_trait::async_trait;
use http::header::{HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;

use crate::body::Body;
use crate::error::TransportError;
use crate::request::Request;
use crate::response::Response;

/// Executes a prepared [`Request`] against the API host.
///
/// Implementations own connection management, signing and any retry policy.
/// They must return every HTTP response, whatever its status; status handling
/// belongs to the caller.
#[async_trait]
pub trait Session: Send + Sync {
    async fn exec(&self, request: Request) -> Result<Response, TransportError>;
}

/// reqwest-backed session that resolves request paths against a base URL
#[derive(Debug, Clone)]
pub struct ReqwestSession {
    base_url: String,
    http_client: reqwest::Client,
    user_agent: HeaderValue,
}

impl ReqwestSession {
    /// Create a new session
    ///
    /// # Errors
    /// Returns [`TransportError::Build`] if the user agent is not a valid
    /// header value or the underlying client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;
        Self::with_client(base_url, user_agent, http_client)
    }

    /// Wrap a preconfigured reqwest client
    ///
    /// # Errors
    /// Returns [`TransportError::Build`] if the user agent is not a valid header value.
    pub fn with_client(
        base_url: impl Into<String>,
        user_agent: &str,
        http_client: reqwest::Client,
    ) -> Result<Self, TransportError> {
        let user_agent = HeaderValue::from_str(user_agent)
            .map_err(|e| TransportError::Build(format!("Invalid user agent: {e}")))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            base_url,
            http_client,
            user_agent,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Session for ReqwestSession {
    async fn exec(&self, request: Request) -> Result<Response, TransportError> {
        let url = format!("{}{}", self.base_url, request.path());
        tracing::debug!(method = %request.method(), %url, "dispatching request");

        let mut req_builder = self
            .http_client
            .request(request.method().clone(), &url)
            .header(USER_AGENT, self.user_agent.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in request.headers() {
            req_builder = req_builder.header(name, value);
        }

        req_builder = match request.into_body() {
            Body::Empty => req_builder,
            Body::Bytes(bytes) => req_builder.body(bytes),
        };

        let resp = req_builder.send().await.map_err(classify)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(classify)?;

        tracing::debug!(%status, body_len = body.len(), "received response");
        Ok(Response::new(status, body))
    }
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Connection(e.to_string())
    } else if e.is_builder() {
        TransportError::Build(e.to_string())
    } else {
        TransportError::Http(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let session =
            ReqwestSession::new("http://localhost:8080/", "ua/1.0", Duration::from_secs(5))
                .unwrap();
        assert_eq!(session.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_invalid_user_agent() {
        let err = ReqwestSession::new("http://localhost", "bad\nagent", Duration::from_secs(5))
            .unwrap_err();
        assert!(matches!(err, TransportError::Build(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Port 9 (discard) is not expected to be listening on loopback.
        let session =
            ReqwestSession::new("http://127.0.0.1:9", "ua/1.0", Duration::from_secs(5)).unwrap();
        let request = Request::builder().path("/x").build().unwrap();
        let err = session.exec(request).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::Connection(_) | TransportError::Timeout(_) | TransportError::Http(_)
        ));
    }
}
