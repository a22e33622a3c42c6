use thiserror::Error;

/// Errors returned by a send.
#[derive(Debug, Error)]
pub enum TelesendError {
    /// The outbound payload could not be serialized
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The request could not be sent or no response arrived
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Telegram answered with a status other than 200
    #[error("Telegram API rejected message ({status}): {}", rejection_detail(.body, .description))]
    Rejected {
        status: u16,
        body: String,
        description: Option<String>,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("unknown parse mode: {0:?}")]
    InvalidParseMode(String),
}

fn rejection_detail<'a>(body: &'a str, description: &'a Option<String>) -> &'a str {
    description.as_deref().unwrap_or(body)
}

impl TelesendError {
    /// Status code of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            TelesendError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, TelesendError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_prefers_description() {
        let err = TelesendError::Rejected {
            status: 400,
            body: r#"{"ok":false}"#.to_string(),
            description: Some("Bad Request: chat not found".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Telegram API rejected message (400): Bad Request: chat not found"
        );
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_rejected_display_falls_back_to_body() {
        let err = TelesendError::Rejected {
            status: 502,
            body: "Bad Gateway".to_string(),
            description: None,
        };
        assert_eq!(
            err.to_string(),
            "Telegram API rejected message (502): Bad Gateway"
        );
    }

    #[test]
    fn test_status_absent_for_other_kinds() {
        assert_eq!(TelesendError::InvalidArgument("chat_id").status(), None);
    }
}
