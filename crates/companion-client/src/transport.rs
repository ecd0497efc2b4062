use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use companion_core::config::ApiConfig;
use companion_core::models::request::ChatRequest;

use crate::error::TransportError;

/// Base delay before a retry; doubles per attempt.
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Synchronous-in-spirit HTTP client for the chat endpoint: one logical
/// POST per [`send`](Transport::send), with bounded retry on a narrow
/// status allow-list. Holds no mutable state.
pub struct Transport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl Transport {
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::Unexpected(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// POST the request's wire payload and return the model's reply text.
    ///
    /// Statuses 429/502/503/504 are retried with exponential backoff, up
    /// to the configured budget. Other non-2xx statuses fail immediately
    /// — a generic 500 is deliberately not on the allow-list. All
    /// failures come back as a classified [`TransportError`]; nothing
    /// escapes as a raw `reqwest::Error`.
    pub async fn send(&self, request: &ChatRequest) -> Result<String, TransportError> {
        info!(bot = %request.bot_name, "sending chat request");

        let payload = request.wire_payload();
        let mut attempt: u32 = 0;
        loop {
            let result = self
                .client
                .post(&self.config.base_url)
                .header(reqwest::header::AUTHORIZATION, self.config.bearer())
                .json(&payload)
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) => return Err(classify(e)),
            };

            let status = response.status();
            if status.is_success() {
                let body = response.text().await.map_err(classify)?;
                info!("received chat response");
                return Ok(parse_reply(&body));
            }

            if is_retriable(status.as_u16()) && attempt < self.config.max_retries {
                let delay = RETRY_BACKOFF * 2u32.pow(attempt);
                warn!(
                    status = status.as_u16(),
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "retriable status, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return Err(TransportError::Http {
                status: status.as_u16(),
            });
        }
    }
}

/// The documented response envelope. Endpoints occasionally return plain
/// text instead; [`parse_reply`] falls back to the raw body then.
#[derive(Debug, Deserialize)]
struct ModelResponse {
    model_output: String,
}

fn parse_reply(body: &str) -> String {
    match serde_json::from_str::<ModelResponse>(body) {
        Ok(parsed) => parsed.model_output,
        Err(_) => body.trim().to_string(),
    }
}

fn is_retriable(status: u16) -> bool {
    matches!(status, 429 | 502 | 503 | 504)
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Connection
    } else {
        TransportError::Unexpected(e.to_string())
    }
}
