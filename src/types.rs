use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TelesendError;

/// Destination chat: a numeric id or a `@channelusername`.
///
/// Strings that parse as integers are normalised to the numeric form, so
/// `"123"` and `123` put the same value on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    pub fn is_empty(&self) -> bool {
        matches!(self, ChatId::Username(s) if s.trim().is_empty())
    }
}

impl<'de> Deserialize<'de> for ChatId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Id(id) => ChatId::Id(id),
            Raw::Text(s) => ChatId::from(s),
        })
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(id) => ChatId::Id(id),
            Err(_) => ChatId::Username(s.to_string()),
        }
    }
}

impl From<String> for ChatId {
    fn from(s: String) -> Self {
        match s.trim().parse::<i64>() {
            Ok(id) => ChatId::Id(id),
            Err(_) => ChatId::Username(s),
        }
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) => write!(f, "{}", name),
        }
    }
}

/// How Telegram should interpret markup in the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    Markdown,
    MarkdownV2,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Html => "HTML",
            ParseMode::Markdown => "Markdown",
            ParseMode::MarkdownV2 => "MarkdownV2",
        }
    }

    /// Parse an optional token; an empty string means plain text.
    pub fn parse_optional(s: &str) -> Result<Option<Self>, TelesendError> {
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl FromStr for ParseMode {
    type Err = TelesendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HTML" => Ok(ParseMode::Html),
            "Markdown" => Ok(ParseMode::Markdown),
            "MarkdownV2" => Ok(ParseMode::MarkdownV2),
            other => Err(TelesendError::InvalidParseMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_string_normalises_to_id() {
        assert_eq!(ChatId::from("123"), ChatId::Id(123));
        assert_eq!(ChatId::from("-1001234567890".to_string()), ChatId::Id(-1001234567890));
        assert_eq!(ChatId::from(123), ChatId::from("123"));
    }

    #[test]
    fn test_username_kept_as_string() {
        assert_eq!(
            ChatId::from("@my_channel"),
            ChatId::Username("@my_channel".to_string())
        );
        assert_eq!(ChatId::from("@my_channel").to_string(), "@my_channel");
    }

    #[test]
    fn test_empty_chat_id() {
        assert!(ChatId::from("").is_empty());
        assert!(ChatId::from("  ").is_empty());
        assert!(!ChatId::from(0).is_empty());
    }

    #[test]
    fn test_chat_id_serializes_by_form() {
        assert_eq!(serde_json::to_value(ChatId::from("123")).unwrap(), serde_json::json!(123));
        assert_eq!(
            serde_json::to_value(ChatId::from("@chan")).unwrap(),
            serde_json::json!("@chan")
        );
    }

    #[test]
    fn test_chat_id_deserializes_either_form() {
        let id: ChatId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ChatId::Id(42));
        let id: ChatId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(id, ChatId::Id(42));
        let id: ChatId = serde_json::from_str(r#""@chan""#).unwrap();
        assert_eq!(id, ChatId::Username("@chan".to_string()));
    }

    #[test]
    fn test_parse_mode_tokens() {
        assert_eq!("HTML".parse::<ParseMode>().unwrap(), ParseMode::Html);
        assert_eq!("Markdown".parse::<ParseMode>().unwrap(), ParseMode::Markdown);
        assert_eq!("MarkdownV2".parse::<ParseMode>().unwrap(), ParseMode::MarkdownV2);
        for mode in [ParseMode::Html, ParseMode::Markdown, ParseMode::MarkdownV2] {
            assert_eq!(mode.as_str().parse::<ParseMode>().unwrap(), mode);
            assert_eq!(
                serde_json::to_value(mode).unwrap(),
                serde_json::json!(mode.as_str())
            );
        }
    }

    #[test]
    fn test_parse_mode_rejects_unknown() {
        let err = "html".parse::<ParseMode>().unwrap_err();
        assert!(matches!(err, TelesendError::InvalidParseMode(ref s) if s == "html"));
    }

    #[test]
    fn test_parse_mode_empty_is_plain() {
        assert_eq!(ParseMode::parse_optional("").unwrap(), None);
        assert_eq!(
            ParseMode::parse_optional("MarkdownV2").unwrap(),
            Some(ParseMode::MarkdownV2)
        );
        assert!(ParseMode::parse_optional("bbcode").is_err());
    }
}
