//! Bot category exception of a security policy's transactional endpoint
//! protection.

use http::Method;
use serde_json::value::RawValue;

use crate::client::BotmanClient;
use crate::error::ClientError;
use crate::request::Request;
use crate::validation::{Validate, ValidationErrors};
use crate::JsonObject;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBotCategoryExceptionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBotCategoryExceptionRequest {
    pub config_id: i64,
    pub version: i64,
    pub security_policy_id: String,
    /// Exception document, sent as-is.
    pub json_payload: Option<Box<RawValue>>,
}

impl Validate for GetBotCategoryExceptionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require_id("config_id", self.config_id)
            .require_id("version", self.version)
            .require_str("security_policy_id", &self.security_policy_id);
        errs.into_result()
    }
}

impl Validate for UpdateBotCategoryExceptionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        errs.require_id("config_id", self.config_id)
            .require_id("version", self.version)
            .require_str("security_policy_id", &self.security_policy_id)
            .require_payload("json_payload", self.json_payload.as_deref());
        errs.into_result()
    }
}

fn exception_path(config_id: i64, version: i64, security_policy_id: &str) -> String {
    format!(
        "/appsec/v1/configs/{config_id}/versions/{version}/security-policies/{security_policy_id}/transactional-endpoints/bot-protection-exceptions"
    )
}

impl BotmanClient {
    /// Read the bot category exception of a security policy.
    ///
    /// # Errors
    /// [`ClientError::Validation`] when an identifying field is missing,
    /// [`ClientError::Transport`] if the call cannot complete,
    /// [`ClientError::Api`] for any non-200 status.
    pub async fn get_bot_category_exception(
        &self,
        params: GetBotCategoryExceptionRequest,
    ) -> Result<JsonObject, ClientError> {
        tracing::debug!(
            operation = "GetBotCategoryException",
            config_id = params.config_id,
            version = params.version,
            security_policy_id = %params.security_policy_id,
            "calling API"
        );
        params.validate()?;

        let request = Request::builder().method(Method::GET).path(exception_path(
            params.config_id,
            params.version,
            &params.security_policy_id,
        ));
        self.execute("GetBotCategoryException", request).await
    }

    /// Replace the bot category exception of a security policy.
    ///
    /// # Errors
    /// As [`BotmanClient::get_bot_category_exception`]; a missing payload is a
    /// validation error.
    pub async fn update_bot_category_exception(
        &self,
        params: UpdateBotCategoryExceptionRequest,
    ) -> Result<JsonObject, ClientError> {
        tracing::debug!(
            operation = "UpdateBotCategoryException",
            config_id = params.config_id,
            version = params.version,
            security_policy_id = %params.security_policy_id,
            "calling API"
        );
        params.validate()?;

        let mut request = Request::builder().method(Method::PUT).path(exception_path(
            params.config_id,
            params.version,
            &params.security_policy_id,
        ));
        if let Some(payload) = params.json_payload.as_deref() {
            request = request.raw_json(payload);
        }
        self.execute("UpdateBotCategoryException", request).await
    }
}
