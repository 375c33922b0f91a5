//! HTTP helpers for communicating with the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since the API is only reachable from the browser.
//!
//! Every request goes out with `Accept: application/json` and, when a token
//! is stored, a bearer `Authorization` header. The token is re-read from the
//! credential store on each call, so a login in another tab is picked up on
//! the next request. JSON bodies get `Content-Type: application/json` from
//! the builder; multipart callers build their own request and keep their own
//! content type.
//!
//! Every failed response runs through the policy layer before being
//! re-raised, so a stale session clears itself and hard-reloads onto the
//! login page while the caller still receives the original error for local
//! display.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ApiError;

/// Base path prepended to every endpoint.
pub const API_BASE: &str = "/api";

/// `GET {API_BASE}{path}` expecting a JSON response.
///
/// # Errors
///
/// `Network` when no response arrived, `Http` for non-2xx statuses,
/// `Decode` when the body was not the expected JSON.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}{path}");
        let mut req = gloo_net::http::Request::get(&url).header("Accept", "application/json");
        if let Some(token) = crate::state::credentials::token() {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(&url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST {API_BASE}{path}` with a JSON body, expecting a JSON response.
///
/// # Errors
///
/// Same taxonomy as [`get_json`].
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}{path}");
        let mut req = gloo_net::http::Request::post(&url).header("Accept", "application/json");
        if let Some(token) = crate::state::credentials::token() {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(&url, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Decode a response, routing failures through session classification.
#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(
    url: &str,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();

    if !resp.ok() {
        leptos::logging::warn!("API error {url} -> {status}");
        apply_session_verdict(url, status, &text);
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(ToOwned::to_owned));
        return Err(ApiError::Http { status, message });
    }

    match serde_json::from_str::<T>(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            // A 200 carrying the web login page instead of JSON means the
            // token was silently rejected.
            apply_session_verdict(url, status, &text);
            Err(ApiError::Decode(e.to_string()))
        }
    }
}

/// Run the policy classification and, on an invalidation verdict, clear the
/// session and hard-reload onto the login page. The reload is a full
/// navigation rather than a client-side transition so no stale in-memory
/// state survives it.
#[cfg(feature = "hydrate")]
fn apply_session_verdict(url: &str, status: u16, body: &str) {
    use super::policy::{self, SessionVerdict};

    if policy::classify(url, Some(status), Some(body)) != SessionVerdict::Invalidate {
        return;
    }

    let current_path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    if let Some(target) = policy::invalidate(&current_path) {
        leptos::logging::warn!("session invalidated by {url}, redirecting to {target}");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
}
