//! Bot analytics cookie: the global list of allowed values and the
//! per-configuration-version setting.

use http::Method;
use serde_json::value::RawValue;

use crate::client::BotmanClient;
use crate::error::ClientError;
use crate::request::Request;
use crate::validation::{Validate, ValidationErrors};
use crate::JsonObject;

const VALUES_PATH: &str = "/appsec/v1/bot-analytics-cookie/values";

/// Identifies the bot analytics cookie setting of a configuration version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotAnalyticsCookieRequest {
    pub config_id: i64,
    pub version: i64,
}

/// Replaces the bot analytics cookie setting of a configuration version.
#[derive(Debug, Clone, Default)]
pub struct UpdateBotAnalyticsCookieRequest {
    pub config_id: i64,
    pub version: i64,
    pub json_payload: Option<Box<RawValue>>,
}

impl Validate for GetBotAnalyticsCookieRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require_id("config_id", self.config_id)
            .require_id("version", self.version);
        errs.into_result()
    }
}

impl Validate for UpdateBotAnalyticsCookieRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require_id("config_id", self.config_id)
            .require_id("version", self.version)
            .require_payload("json_payload", self.json_payload.as_deref());
        errs.into_result()
    }
}

fn cookie_path(config_id: i64, version: i64) -> String {
    format!("/appsec/v1/configs/{config_id}/versions/{version}/advanced-settings/bot-analytics-cookie")
}

impl BotmanClient {
    /// Fetch the values the bot analytics cookie may take.
    ///
    /// # Errors
    /// [`ClientError::Transport`] if the call cannot complete,
    /// [`ClientError::Api`] for any non-200 status.
    pub async fn get_bot_analytics_cookie_values(&self) -> Result<JsonObject, ClientError> {
        tracing::debug!(operation = "GetBotAnalyticsCookieValues", "calling API");

        let request = Request::builder().method(Method::GET).path(VALUES_PATH);
        self.execute("GetBotAnalyticsCookieValues", request).await
    }

    /// Read the bot analytics cookie setting of a configuration version.
    ///
    /// # Errors
    /// [`ClientError::Validation`] when `config_id` or `version` is zero,
    /// otherwise as [`BotmanClient::get_bot_analytics_cookie_values`].
    pub async fn get_bot_analytics_cookie(
        &self,
        params: GetBotAnalyticsCookieRequest,
    ) -> Result<JsonObject, ClientError> {
        tracing::debug!(
            operation = "GetBotAnalyticsCookie",
            config_id = params.config_id,
            version = params.version,
            "calling API"
        );
        params.validate()?;

        let request = Request::builder()
            .method(Method::GET)
            .path(cookie_path(params.config_id, params.version));
        self.execute("GetBotAnalyticsCookie", request).await
    }

    /// Replace the bot analytics cookie setting of a configuration version.
    ///
    /// # Errors
    /// [`ClientError::Validation`] when an id is zero or the payload is missing,
    /// otherwise as [`BotmanClient::get_bot_analytics_cookie_values`].
    pub async fn update_bot_analytics_cookie(
        &self,
        params: UpdateBotAnalyticsCookieRequest,
    ) -> Result<JsonObject, ClientError> {
        tracing::debug!(
            operation = "UpdateBotAnalyticsCookie",
            config_id = params.config_id,
            version = params.version,
            "calling API"
        );
        params.validate()?;

        let mut request = Request::builder()
            .method(Method::PUT)
            .path(cookie_path(params.config_id, params.version));
        if let Some(payload) = params.json_payload.as_deref() {
            request = request.raw_json(payload);
        }
        self.execute("UpdateBotAnalyticsCookie", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_path() {
        assert_eq!(
            cookie_path(43253, 15),
            "/appsec/v1/configs/43253/versions/15/advanced-settings/bot-analytics-cookie"
        );
    }

    #[test]
    fn test_get_validation() {
        let err = GetBotAnalyticsCookieRequest::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config_id: cannot be blank; version: cannot be blank."
        );
    }

    #[test]
    fn test_update_validation_requires_payload() {
        let err = UpdateBotAnalyticsCookieRequest {
            config_id: 43253,
            version: 15,
            json_payload: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["json_payload"]);
    }
}
