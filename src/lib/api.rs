//! HTTP helpers for the JSON account API with a consistent timeout and error
//! mapping. Screens call the feature client wrappers, which delegate here to
//! avoid duplicating request setup. Success bodies are discarded: this
//! client keeps no token or session state.

use super::{config::AppConfig, errors::AppError, payload};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all requests so the UI
/// never hangs in a pending state.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Posts a JSON body and discards any success payload. Non-2xx responses
/// are mapped to [`AppError::Http`] with the parsed `detail` message.
pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), AppError> {
    let url = build_url(path);
    let encoded = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(encoded)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_response(response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    payload::build_url(&config.api_base_url, path)
}

/// Maps transport errors into user-facing `AppError` variants with timeout
/// detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Network("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Discards success bodies and surfaces HTTP errors with the server
/// `detail` message when the body carries one.
async fn handle_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            detail: payload::extract_detail(&body),
        })
    }
}
