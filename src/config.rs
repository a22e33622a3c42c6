use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::client::DEFAULT_API_URL;
use crate::types::{ChatId, ParseMode};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Default destination; numeric id or `@channel`
    #[serde(default)]
    pub chat_id: Option<ChatId>,
    /// Empty string means plain text
    #[serde(default, deserialize_with = "deserialize_parse_mode")]
    pub parse_mode: Option<ParseMode>,
    #[serde(default)]
    pub disable_web_page_preview: bool,
    #[serde(default)]
    pub disable_notification: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn deserialize_parse_mode<'de, D>(deserializer: D) -> Result<Option<ParseMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    match token {
        Some(token) => ParseMode::parse_optional(&token).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;

        if config.telegram.bot_token.trim().is_empty() {
            anyhow::bail!("telegram.bot_token must not be empty");
        }
        if config.telegram.timeout_secs == 0 {
            anyhow::bail!("telegram.timeout_secs must be greater than zero");
        }

        Ok(config)
    }
}
