//! HTTP client for the invitation service.
//!
//! All requests carry the bearer token; failures are mapped into
//! `InboxError` so callers only route them to a user-facing channel.

use contracts::domain::inbox::{ApiErrorBody, InboxItem, InboxListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

use super::error::InboxError;

/// GET one listing endpoint. `fallback` is the user-facing text for a
/// non-2xx response whose body carries no `detail` field.
pub async fn fetch_items(
    path: &str,
    token: &str,
    fallback: &str,
) -> Result<Vec<InboxItem>, InboxError> {
    let response = Request::get(&api_url(path))
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| InboxError::Transport(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(InboxError::Fetch(
            detail.unwrap_or_else(|| fallback.to_string()),
        ));
    }

    let body = response
        .json::<InboxListResponse>()
        .await
        .map_err(|e| InboxError::Transport(format!("Failed to parse response: {}", e)))?;
    Ok(body.items)
}

/// POST one mutating endpoint. Success bodies are ignored.
pub async fn post_action(path: &str, token: &str) -> Result<(), InboxError> {
    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| InboxError::Transport(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(InboxError::Status(response.status()));
    }
    Ok(())
}
