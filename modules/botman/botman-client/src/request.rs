use http::{HeaderMap, HeaderValue, Method};
use serde_json::value::RawValue;

use crate::body::Body;
use crate::error::TransportError;

/// HTTP request handed to a [`Session`](crate::Session): method, API path, headers and body
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Body,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the API host, e.g. `/appsec/v1/bot-analytics-cookie/values`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_body(self) -> Body {
        self.body
    }
}

/// Builder for constructing HTTP requests with a fluent API
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    headers: HeaderMap,
    body: Body,
}

impl RequestBuilder {
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set a raw JSON body, forwarded verbatim, and add the Content-Type header
    pub fn raw_json(mut self, raw: &RawValue) -> Self {
        self.body = Body::from_raw_json(raw);
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self
    }

    /// Build the request
    ///
    /// # Errors
    /// Returns [`TransportError::Build`] when no path was set or the path is not absolute.
    pub fn build(self) -> Result<Request, TransportError> {
        let method = self.method.unwrap_or(Method::GET);
        let path = self
            .path
            .ok_or_else(|| TransportError::Build("Request path is required".into()))?;
        if !path.starts_with('/') {
            return Err(TransportError::Build(format!(
                "Request path must start with '/': {path}"
            )));
        }

        Ok(Request {
            method,
            path,
            headers: self.headers,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_get() {
        let req = Request::builder().path("/x").build().unwrap();
        assert_eq!(req.method(), Method::GET);
        assert!(req.headers().is_empty());
        assert_eq!(req.into_body(), Body::Empty);
    }

    #[test]
    fn test_path_required() {
        let err = Request::builder().build().unwrap_err();
        assert!(matches!(err, TransportError::Build(_)));
    }

    #[test]
    fn test_relative_path_rejected() {
        let err = Request::builder().path("appsec/v1").build().unwrap_err();
        assert!(matches!(err, TransportError::Build(_)));
    }

    #[test]
    fn test_raw_json_sets_content_type() {
        let raw = RawValue::from_string(r#"{"k":"v"}"#.to_string()).unwrap();
        let req = Request::builder()
            .method(Method::PUT)
            .path("/x")
            .raw_json(&raw)
            .build()
            .unwrap();
        assert_eq!(
            req.headers().get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            req.into_body().as_bytes().map(|b| &b[..]),
            Some(&br#"{"k":"v"}"#[..])
        );
    }
}
