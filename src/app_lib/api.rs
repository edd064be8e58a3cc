//! HTTP transport for the JSON API. Feature clients talk to the [`ApiTransport`]
//! seam so the same submission code runs against `gloo-net` in the browser and
//! `reqwest` everywhere else. Transports never log request bodies; payloads
//! carry passwords and reset tokens.

use super::{config::AppConfig, errors::AppError};
use async_trait::async_trait;
use serde_json::Value;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Sends JSON requests to the remote API.
#[async_trait(?Send)]
pub trait ApiTransport {
    /// Posts `body` to `path` and expects a 2xx status. The response body is
    /// not consumed.
    async fn post_json(&self, path: &str, body: &Value) -> Result<(), AppError>;
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub(crate) fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{AppConfig, AppError, ApiTransport, Value, async_trait, sanitize_body};
    use gloo_net::http::{Request, Response};
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    /// Default request timeout (milliseconds) applied to every request.
    const DEFAULT_TIMEOUT_MS: u32 = 10_000;

    /// `fetch`-backed transport used by the mounted application.
    #[derive(Clone, Debug)]
    pub struct BrowserTransport {
        config: AppConfig,
    }

    impl BrowserTransport {
        pub fn new(config: AppConfig) -> Self {
            Self { config }
        }
    }

    #[async_trait(?Send)]
    impl ApiTransport for BrowserTransport {
        async fn post_json(&self, path: &str, body: &Value) -> Result<(), AppError> {
            let url = self.config.url_for(path);
            let payload = serde_json::to_string(body).map_err(|err| {
                AppError::Serialization(format!("Failed to encode request: {err}"))
            })?;
            let response = send_with_timeout(move |signal| {
                Request::post(&url)
                    .header("Content-Type", "application/json")
                    .abort_signal(Some(signal))
                    .body(payload)
                    .map_err(|err| {
                        AppError::Serialization(format!("Failed to build request: {err}"))
                    })
            })
            .await?;

            handle_empty_response(response).await
        }
    }

    /// Maps network errors into `AppError` variants with timeout detection.
    fn map_request_error(err: gloo_net::Error) -> AppError {
        let message = err.to_string();
        let lowered = message.to_lowercase();

        if lowered.contains("timeout") || lowered.contains("abort") {
            AppError::Timeout("Request timed out. Please try again.".to_string())
        } else {
            AppError::Network(format!("Unable to reach the server: {message}"))
        }
    }

    /// Sends a request with an abort timeout to avoid hanging UI state.
    async fn send_with_timeout(
        build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
    ) -> Result<Response, AppError> {
        let controller = AbortController::new()
            .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

        let request = build_request(&signal)?;
        request.send().await.map_err(map_request_error)
    }

    async fn handle_empty_response(response: Response) -> Result<(), AppError> {
        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(AppError::Http {
                status,
                message: sanitize_body(&body),
            })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{AppConfig, AppError, ApiTransport, Value, async_trait, sanitize_body};
    use reqwest::Client;
    use std::time::Duration;

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// `reqwest`-backed transport for non-browser embedders and tests.
    #[derive(Clone, Debug)]
    pub struct NativeTransport {
        client: Client,
        config: AppConfig,
    }

    impl NativeTransport {
        pub fn new(config: AppConfig) -> Result<Self, AppError> {
            let client = Client::builder()
                .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;
            Ok(Self { client, config })
        }
    }

    #[async_trait(?Send)]
    impl ApiTransport for NativeTransport {
        async fn post_json(&self, path: &str, body: &Value) -> Result<(), AppError> {
            let url = self.config.url_for(path);
            let response = self
                .client
                .post(url)
                .json(body)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        AppError::Timeout("Request timed out. Please try again.".to_string())
                    } else {
                        AppError::Network(format!("Unable to reach the server: {err}"))
                    }
                })?;

            let status = response.status();
            if status.is_success() {
                Ok(())
            } else {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::Http {
                    status: status.as_u16(),
                    message: sanitize_body(&body),
                })
            }
        }
    }
}
