use std::fmt;

/// Failures surfaced by the HTTP helpers. Screens branch on the status code
/// (403 marks an unverified account) and show the server `detail` when one
/// was provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Network(String),
    Timeout(String),
    Http { status: u16, detail: Option<String> },
    Serialization(String),
}

impl AppError {
    /// Status code for requests the server rejected.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the user: the server `detail` when present, otherwise
    /// the screen's own fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, detail } => match detail {
                Some(detail) => write!(formatter, "Request failed ({status}): {detail}"),
                None => write!(formatter, "Request failed ({status})"),
            },
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn status_is_exposed_only_for_http_errors() {
        let rejected = AppError::Http {
            status: 403,
            detail: None,
        };
        assert_eq!(rejected.status(), Some(403));
        assert_eq!(AppError::Network("offline".to_string()).status(), None);
        assert_eq!(AppError::Timeout("slow".to_string()).status(), None);
    }

    #[test]
    fn user_message_prefers_server_detail() {
        let err = AppError::Http {
            status: 403,
            detail: Some("Email not verified. Please verify your email first.".to_string()),
        };
        assert_eq!(
            err.user_message("Something went wrong"),
            "Email not verified. Please verify your email first."
        );
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        let missing_detail = AppError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(
            missing_detail.user_message("Something went wrong"),
            "Something went wrong"
        );
        assert_eq!(
            AppError::Network("dns".to_string()).user_message("Something went wrong"),
            "Something went wrong"
        );
        assert_eq!(
            AppError::Serialization("bad body".to_string()).user_message("Failed to resend code."),
            "Failed to resend code."
        );
    }

    #[test]
    fn display_includes_status_and_detail() {
        let err = AppError::Http {
            status: 409,
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(err.to_string(), "Request failed (409): Email already registered");
        let bare = AppError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.to_string(), "Request failed (500)");
    }
}
