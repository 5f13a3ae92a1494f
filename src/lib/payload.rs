//! Pure helpers for request URLs and server error bodies, kept free of
//! browser types so they are testable on any target.

use serde::Deserialize;

/// Maximum number of server-provided error characters surfaced to the UI.
const MAX_DETAIL_CHARS: usize = 200;

/// Error body shape shared by all endpoints.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Builds a URL from a base URL and a path. An empty base yields a bare
/// (same-origin) path.
pub(crate) fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Extracts the human-readable `detail` string from a JSON error body,
/// trimmed and truncated. Returns `None` for non-JSON or empty details so
/// callers fall back to their own message.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = parsed.detail?;
    let trimmed = detail.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_DETAIL_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url, extract_detail, MAX_DETAIL_CHARS};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url("https://api.example.com", "/api/login/"),
            "https://api.example.com/api/login/"
        );
        assert_eq!(
            build_url("https://api.example.com/", "api/login/"),
            "https://api.example.com/api/login/"
        );
    }

    #[test]
    fn build_url_with_empty_base_returns_bare_path() {
        assert_eq!(build_url("", "/api/register/"), "/api/register/");
        assert_eq!(build_url("   ", "/api/register/"), "/api/register/");
    }

    #[test]
    fn build_url_trims_whitespace() {
        assert_eq!(
            build_url(" https://api.example.com ", " /api/verify-email/ "),
            "https://api.example.com/api/verify-email/"
        );
    }

    #[test]
    fn extract_detail_reads_detail_field() {
        assert_eq!(
            extract_detail(r#"{"detail": "Invalid verification code"}"#),
            Some("Invalid verification code".to_string())
        );
    }

    #[test]
    fn extract_detail_rejects_missing_or_empty_detail() {
        assert_eq!(extract_detail(r#"{"detail": ""}"#), None);
        assert_eq!(extract_detail(r#"{"detail": "   "}"#), None);
        assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_detail("not json"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[test]
    fn extract_detail_truncates_long_messages() {
        let body = format!(r#"{{"detail": "{}"}}"#, "x".repeat(500));
        let detail = extract_detail(&body).expect("detail should parse");
        assert_eq!(detail.len(), MAX_DETAIL_CHARS);
    }
}
