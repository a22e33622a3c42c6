use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::config::TelegramConfig;
use crate::request::{SendMessageRequest, SendOptions};
use crate::types::{ChatId, ParseMode};
use crate::TelesendError;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error envelope Telegram returns alongside a non-200 status.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    description: Option<String>,
}

/// Reusable handle bound to one bot token.
///
/// Destination, parse mode and suppression flags can be bound as defaults at
/// construction and overridden on each call. The handle is immutable once
/// built; clones share the underlying connection pool.
#[derive(Clone)]
pub struct TelesendClient {
    client: reqwest::Client,
    bot_token: String,
    api_url: String,
    defaults: SendOptions,
}

impl std::fmt::Debug for TelesendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelesendClient")
            .field("bot_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl TelesendClient {
    /// Handle with only the token bound and default transport settings.
    pub fn new(bot_token: impl Into<String>) -> Result<Self, TelesendError> {
        Self::builder(bot_token).build()
    }

    pub fn builder(bot_token: impl Into<String>) -> TelesendClientBuilder {
        TelesendClientBuilder {
            bot_token: bot_token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            defaults: SendOptions::default(),
        }
    }

    pub fn from_config(config: &TelegramConfig) -> Result<Self, TelesendError> {
        let mut builder = Self::builder(config.bot_token.clone())
            .api_url(config.api_url.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .disable_web_page_preview(config.disable_web_page_preview)
            .disable_notification(config.disable_notification);
        if let Some(chat_id) = &config.chat_id {
            builder = builder.chat_id(chat_id.clone());
        }
        if let Some(parse_mode) = config.parse_mode {
            builder = builder.parse_mode(parse_mode);
        }
        builder.build()
    }

    /// Default destination bound at construction, if any.
    pub fn chat_id(&self) -> Option<&ChatId> {
        self.defaults.chat_id.as_ref()
    }

    /// Send `text` using only the handle's defaults.
    pub async fn send(&self, text: &str) -> Result<(), TelesendError> {
        self.send_with(text, &SendOptions::default()).await
    }

    /// Send `text` to `chat_id`, keeping the other defaults.
    pub async fn send_to(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
    ) -> Result<(), TelesendError> {
        self.send_with(text, &SendOptions::new().chat_id(chat_id)).await
    }

    /// Send `text` with per-call overrides applied over the defaults.
    pub async fn send_with(&self, text: &str, options: &SendOptions) -> Result<(), TelesendError> {
        let request = options.or(&self.defaults).into_request(text)?;
        self.execute(&request).await
    }

    /// POST a prepared request. Succeeds only on HTTP 200.
    pub async fn execute(&self, request: &SendMessageRequest) -> Result<(), TelesendError> {
        let body = request.to_json()?;
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.bot_token);

        debug!(
            "Sending sendMessage to {}/bot<redacted>/sendMessage (chat_id={}, {} bytes)",
            self.api_url,
            request.chat_id,
            body.len()
        );

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TelesendError::Transport(e.without_url()))?;

        let status = response.status();
        debug!("sendMessage responded with {}", status);

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|e| e.description);
            return Err(TelesendError::Rejected {
                status: status.as_u16(),
                body,
                description,
            });
        }

        Ok(())
    }
}

/// Builder for [`TelesendClient`].
#[derive(Clone)]
pub struct TelesendClientBuilder {
    bot_token: String,
    api_url: String,
    timeout: Duration,
    defaults: SendOptions,
}

impl std::fmt::Debug for TelesendClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelesendClientBuilder")
            .field("bot_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("defaults", &self.defaults)
            .finish()
    }
}

impl TelesendClientBuilder {
    pub fn chat_id(mut self, chat_id: impl Into<ChatId>) -> Self {
        self.defaults.chat_id = Some(chat_id.into());
        self
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.defaults.parse_mode = Some(parse_mode);
        self
    }

    pub fn disable_web_page_preview(mut self, disable: bool) -> Self {
        self.defaults.disable_web_page_preview = Some(disable);
        self
    }

    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.defaults.disable_notification = Some(disable);
        self
    }

    /// Base URL of the Bot API server, without a trailing slash.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<TelesendClient, TelesendError> {
        if self.bot_token.trim().is_empty() {
            return Err(TelesendError::InvalidArgument("bot_token must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(TelesendError::InvalidArgument("timeout must be greater than zero"));
        }

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(TelesendClient {
            client,
            bot_token: self.bot_token,
            api_url: self.api_url,
            defaults: self.defaults,
        })
    }
}

/// Send one message without keeping a handle around.
///
/// Builds a throwaway client with the default API URL and timeout.
pub async fn send_message(
    bot_token: &str,
    chat_id: impl Into<ChatId>,
    text: &str,
    parse_mode: Option<ParseMode>,
    disable_web_page_preview: bool,
    disable_notification: bool,
) -> Result<(), TelesendError> {
    send_message_via(
        DEFAULT_API_URL,
        bot_token,
        chat_id,
        text,
        parse_mode,
        disable_web_page_preview,
        disable_notification,
    )
    .await
}

pub(crate) async fn send_message_via(
    api_url: &str,
    bot_token: &str,
    chat_id: impl Into<ChatId>,
    text: &str,
    parse_mode: Option<ParseMode>,
    disable_web_page_preview: bool,
    disable_notification: bool,
) -> Result<(), TelesendError> {
    let client = TelesendClient::builder(bot_token).api_url(api_url).build()?;
    let options = SendOptions {
        chat_id: Some(chat_id.into()),
        parse_mode,
        disable_web_page_preview: Some(disable_web_page_preview),
        disable_notification: Some(disable_notification),
    };
    client.send_with(text, &options).await
}
