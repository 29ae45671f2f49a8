//! Bot Manager client
//!
//! Typed access to the bot-management endpoints of the application security
//! API. Every operation validates its request, issues one HTTP call through
//! a [`Session`] and returns the JSON object the server sent back as a
//! [`JsonObject`]. Non-200 responses surface as [`ClientError::Api`] carrying
//! the server's problem document.
//!
//! # Example
//!
//! ```no_run
//! use botman_client::{BotmanClient, ClientConfig, GetBotCategoryExceptionRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BotmanClient::from_config(ClientConfig::from_env()?)?;
//!
//! let values = client.get_bot_analytics_cookie_values().await?;
//! println!("{values:?}");
//!
//! let exception = client
//!     .get_bot_category_exception(GetBotCategoryExceptionRequest {
//!         config_id: 43253,
//!         version: 15,
//!         security_policy_id: "AAAA_81230".to_string(),
//!     })
//!     .await?;
//! println!("{exception:?}");
//! # Ok(())
//! # }
//! ```
//!
//! # Custom transport
//!
//! Signing and retries are the session's business. Implement [`Session`] and
//! hand it to [`BotmanClient::with_session`] to plug in your own.

mod body;
mod bot_analytics_cookie;
mod bot_category_exception;
mod client;
mod config;
mod error;
mod request;
mod response;
mod session;
mod validation;

pub use body::Body;
pub use bot_analytics_cookie::{GetBotAnalyticsCookieRequest, UpdateBotAnalyticsCookieRequest};
pub use bot_category_exception::{
    GetBotCategoryExceptionRequest, UpdateBotCategoryExceptionRequest,
};
pub use client::{BotmanApi, BotmanClient};
pub use config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::{ApiError, ClientError, TransportError};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use session::{ReqwestSession, Session};
pub use validation::{Validate, ValidationErrors};

// Re-export commonly used types from dependencies
pub use http::{Method, StatusCode};
pub use serde_json::value::RawValue;

/// Untyped JSON object returned by every operation.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
