//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After` parsing, 404,
//! structured upstream errors) and body decoding so the endpoint modules
//! stay focused on request construction and response mapping.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::CrunchbaseError;

/// Structured error element; the API answers failures with a list of these.
#[derive(Debug, Deserialize)]
struct UpstreamError {
    code: String,
    message: String,
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`CrunchbaseError::RateLimited`] with
///   `Retry-After` parsing (falls back to 60 s if absent or unparseable).
/// - **404 Not Found** → [`CrunchbaseError::NotFound`].
/// - **Other non-success** → [`CrunchbaseError::Upstream`] when the body is
///   a structured error list, else [`CrunchbaseError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CrunchbaseError> {
    let status = resp.status();
    if status == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(CrunchbaseError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if status == 404 {
        return Err(CrunchbaseError::NotFound {
            what: resp.url().path().to_string(),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(upstream_error(&body).unwrap_or(CrunchbaseError::Api {
            status: status.as_u16(),
            message: body,
        }));
    }
    Ok(resp)
}

/// Decode a success body, recognizing structured errors sent with a 2xx.
///
/// A body that is neither `T` nor an error list is a
/// [`CrunchbaseError::Decode`], which callers may treat as transient.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, CrunchbaseError> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(err) => Err(upstream_error(body).unwrap_or_else(|| CrunchbaseError::Decode(err.to_string()))),
    }
}

/// Read and decode a response body.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, CrunchbaseError> {
    let body = resp.text().await?;
    decode_body(&body)
}

fn upstream_error(body: &str) -> Option<CrunchbaseError> {
    let errors: Vec<UpstreamError> = serde_json::from_str(body).ok()?;
    let first = errors.into_iter().next()?;
    Some(CrunchbaseError::Upstream {
        code: first.code,
        message: first.message,
    })
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
