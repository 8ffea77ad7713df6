//! Shared HTTP plumbing for source adapters.
//!
//! One [`reqwest::Client`] is built per process and shared by every adapter.
//! Status codes and transport errors are mapped onto [`SourceError`] here so
//! every adapter classifies failures the same way.

use askme_application::SourceError;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{RequestBuilder, Response, StatusCode};
use std::time::Duration;

pub const USER_AGENT: &str = concat!("askme/", env!("CARGO_PKG_VERSION"));

/// Build the client shared by all adapters.
///
/// No client-wide timeout is set: each request is bounded by its source's
/// configured budget.
pub fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(5))
        .build()
}

/// Map a non-success status onto a per-attempt error.
///
/// 401/403 are credential problems, 429 is rate limiting, 408 and 5xx are
/// transient. Any other 4xx is a rejection that retrying will not fix.
pub fn classify_status(status: StatusCode, retry_after: Option<Duration>) -> SourceError {
    let label = format!(
        "HTTP {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SourceError::Auth(label),
        StatusCode::TOO_MANY_REQUESTS => SourceError::RateLimited { retry_after },
        StatusCode::REQUEST_TIMEOUT => SourceError::Timeout,
        s if s.is_server_error() => SourceError::Unavailable(label),
        _ => SourceError::Rejected(label),
    }
}

pub fn classify_transport(error: &reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::Timeout
    } else if error.is_decode() {
        SourceError::Parse(error.to_string())
    } else {
        SourceError::Unavailable(error.to_string())
    }
}

/// `Retry-After` in its delay-seconds form; HTTP dates are ignored.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

async fn send(request: RequestBuilder, timeout: Duration) -> Result<Response, SourceError> {
    let response = request
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| classify_transport(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(classify_status(status, retry_after(response.headers())));
    }
    Ok(response)
}

/// Send the request and decode a JSON body.
pub async fn get_json(
    request: RequestBuilder,
    timeout: Duration,
) -> Result<serde_json::Value, SourceError> {
    send(request, timeout)
        .await?
        .json()
        .await
        .map_err(|e| SourceError::Parse(format!("invalid JSON body: {}", e)))
}

/// Send the request and read the body as text.
pub async fn get_text(request: RequestBuilder, timeout: Duration) -> Result<String, SourceError> {
    send(request, timeout)
        .await?
        .text()
        .await
        .map_err(|e| classify_transport(&e))
}
