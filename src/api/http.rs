//! `reqwest`-backed [`Backend`]. Pure response parsing lives in free functions
//! for testability.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::{AddGameForm, AddUserForm, ApiError, Backend, LoginForm, LoginResponse};
use crate::config::ClientConfig;

pub const ADD_USER_PATH: &str = "/add_user";
pub const LOGIN_PATH: &str = "/login";
pub const ADD_GAME_PATH: &str = "/add_game";

pub struct HttpBackend {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    /// Build a client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// POST a form and return the body text of a successful response.
    async fn post_form<F: Serialize + Sync>(&self, path: &str, form: &F) -> Result<String, ApiError> {
        let url = self.config.endpoint(path);
        let response = self
            .http
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }
        tracing::debug!(%url, status = status.as_u16(), "backend request ok");
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn add_user(&self, form: &AddUserForm) -> Result<(), ApiError> {
        self.post_form(ADD_USER_PATH, form).await?;
        Ok(())
    }

    async fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        let text = self.post_form(LOGIN_PATH, form).await?;
        parse_login_response(&text)
    }

    async fn add_game(&self, form: &AddGameForm) -> Result<Value, ApiError> {
        let text = self.post_form(ADD_GAME_PATH, form).await?;
        parse_ack(&text)
    }
}

fn parse_login_response(text: &str) -> Result<LoginResponse, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

/// An empty body counts as an acknowledgement with no payload.
fn parse_ack(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}
