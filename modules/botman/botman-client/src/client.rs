use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;

use crate::bot_analytics_cookie::{GetBotAnalyticsCookieRequest, UpdateBotAnalyticsCookieRequest};
use crate::bot_category_exception::{
    GetBotCategoryExceptionRequest, UpdateBotCategoryExceptionRequest,
};
use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError};
use crate::request::RequestBuilder;
use crate::session::{ReqwestSession, Session};
use crate::JsonObject;

/// Bot Manager API surface.
///
/// Implemented by [`BotmanClient`]; callers that need a test double can
/// implement it themselves.
#[async_trait]
pub trait BotmanApi: Send + Sync {
    async fn get_bot_analytics_cookie_values(&self) -> Result<JsonObject, ClientError>;

    async fn get_bot_analytics_cookie(
        &self,
        params: GetBotAnalyticsCookieRequest,
    ) -> Result<JsonObject, ClientError>;

    async fn update_bot_analytics_cookie(
        &self,
        params: UpdateBotAnalyticsCookieRequest,
    ) -> Result<JsonObject, ClientError>;

    async fn get_bot_category_exception(
        &self,
        params: GetBotCategoryExceptionRequest,
    ) -> Result<JsonObject, ClientError>;

    async fn update_bot_category_exception(
        &self,
        params: UpdateBotCategoryExceptionRequest,
    ) -> Result<JsonObject, ClientError>;
}

/// Client for the Bot Manager endpoints.
///
/// Cheap to clone; clones share the underlying session.
#[derive(Clone)]
pub struct BotmanClient {
    session: Arc<dyn Session>,
}

impl std::fmt::Debug for BotmanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotmanClient").finish_non_exhaustive()
    }
}

impl BotmanClient {
    /// Create a client backed by a [`ReqwestSession`]
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let session = ReqwestSession::new(config.base_url, &config.user_agent, config.timeout)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self::with_session(Arc::new(session)))
    }

    /// Create a client over any [`Session`] implementation
    pub fn with_session(session: Arc<dyn Session>) -> Self {
        Self { session }
    }

    /// Build, execute and decode one operation.
    ///
    /// Only `200 OK` counts as success; any other status becomes
    /// [`ClientError::Api`].
    pub(crate) async fn execute(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<JsonObject, ClientError> {
        let request = request.build().map_err(|source| transport(operation, source))?;
        let response = self
            .session
            .exec(request)
            .await
            .map_err(|source| transport(operation, source))?;

        if response.status() != StatusCode::OK {
            let err = response.into_api_error();
            tracing::debug!(operation, status = err.status, "API returned an error");
            return Err(ClientError::Api(err));
        }

        response.json()
    }
}

fn transport(operation: &'static str, source: TransportError) -> ClientError {
    ClientError::Transport { operation, source }
}

#[async_trait]
impl BotmanApi for BotmanClient {
    async fn get_bot_analytics_cookie_values(&self) -> Result<JsonObject, ClientError> {
        BotmanClient::get_bot_analytics_cookie_values(self).await
    }

    async fn get_bot_analytics_cookie(
        &self,
        params: GetBotAnalyticsCookieRequest,
    ) -> Result<JsonObject, ClientError> {
        BotmanClient::get_bot_analytics_cookie(self, params).await
    }

    async fn update_bot_analytics_cookie(
        &self,
        params: UpdateBotAnalyticsCookieRequest,
    ) -> Result<JsonObject, ClientError> {
        BotmanClient::update_bot_analytics_cookie(self, params).await
    }

    async fn get_bot_category_exception(
        &self,
        params: GetBotCategoryExceptionRequest,
    ) -> Result<JsonObject, ClientError> {
        BotmanClient::get_bot_category_exception(self, params).await
    }

    async fn update_bot_category_exception(
        &self,
        params: UpdateBotCategoryExceptionRequest,
    ) -> Result<JsonObject, ClientError> {
        BotmanClient::update_bot_category_exception(self, params).await
    }
}
