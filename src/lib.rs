//! Minimal client for posting text messages through the Telegram Bot API.
//!
//! One `sendMessage` call per send, JSON encoded, succeeding only on HTTP 200.
//! Use [`send_message`] for one-off sends or [`TelesendClient`] to bind the
//! token and per-chat defaults once.
//!
//! # Example
//!
//! ```rust,ignore
//! use telesend::{ParseMode, TelesendClient};
//!
//! let client = TelesendClient::builder("BOT_TOKEN")
//!     .chat_id(123456)
//!     .parse_mode(ParseMode::Html)
//!     .build()?;
//! client.send("<b>deploy finished</b>").await?;
//! ```

pub mod client;
pub mod config;
mod error;
pub mod request;
pub mod types;

pub use client::{send_message, TelesendClient, TelesendClientBuilder};
pub use config::{Config, TelegramConfig};
pub use error::TelesendError;
pub use request::{SendMessageRequest, SendOptions};
pub use types::{ChatId, ParseMode};
