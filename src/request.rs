use serde::Serialize;

use crate::types::{ChatId, ParseMode};
use crate::TelesendError;

/// Body of a `sendMessage` call.
///
/// Optional fields are left out of the JSON entirely when unset, and the
/// suppression flags only appear when `true`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub disable_notification: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl SendMessageRequest {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: false,
            disable_notification: false,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, TelesendError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Per-call overrides. Unset fields fall back to the client's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    pub chat_id: Option<ChatId>,
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    pub disable_notification: Option<bool>,
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat_id(mut self, chat_id: impl Into<ChatId>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn disable_web_page_preview(mut self, disable: bool) -> Self {
        self.disable_web_page_preview = Some(disable);
        self
    }

    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = Some(disable);
        self
    }

    /// Fill every unset field from `defaults`.
    pub(crate) fn or(&self, defaults: &SendOptions) -> SendOptions {
        SendOptions {
            chat_id: self.chat_id.clone().or_else(|| defaults.chat_id.clone()),
            parse_mode: self.parse_mode.or(defaults.parse_mode),
            disable_web_page_preview: self
                .disable_web_page_preview
                .or(defaults.disable_web_page_preview),
            disable_notification: self
                .disable_notification
                .or(defaults.disable_notification),
        }
    }

    /// Build the request body. Fails if no usable destination is set.
    pub(crate) fn into_request(self, text: &str) -> Result<SendMessageRequest, TelesendError> {
        let chat_id = match self.chat_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(TelesendError::InvalidArgument("chat_id must not be empty")),
        };

        Ok(SendMessageRequest {
            chat_id,
            text: text.to_string(),
            parse_mode: self.parse_mode,
            disable_web_page_preview: self.disable_web_page_preview.unwrap_or(false),
            disable_notification: self.disable_notification.unwrap_or(false),
        })
    }
}
