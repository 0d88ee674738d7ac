//! REST API Wrappers
//!
//! Frontend bindings to the backend JSON API, organized by domain. One
//! generic fetch helper; every endpoint fn returns `Result<T, String>` where
//! the `Err` is the toast-ready message: the server's `error` field on a
//! non-2xx status, or a localized fallback for network and decode failures.

mod admin;
mod auth;
mod questions;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use admin::*;
pub use auth::*;
pub use questions::*;

/// Fallback when the failure carries no server message
pub const GENERIC_ERROR: &str = "오류가 발생했습니다";

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn generic() -> String {
    GENERIC_ERROR.to_string()
}

async fn request<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(|_| generic())?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| generic())?;

    let window = web_sys::window().ok_or_else(generic)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| generic())?;
    let response: Response = response.dyn_into().map_err(|_| generic())?;

    let json = JsFuture::from(response.json().map_err(|_| generic())?)
        .await
        .map_err(|_| generic())?;

    if !response.ok() {
        let body: ErrorBody =
            serde_wasm_bindgen::from_value(json).unwrap_or(ErrorBody { error: None });
        return Err(body.error.unwrap_or_else(generic));
    }

    serde_wasm_bindgen::from_value(json).map_err(|_| generic())
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    request("GET", url, None).await
}

pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    let json = serde_json::to_string(body).map_err(|_| generic())?;
    request("POST", url, Some(json)).await
}

pub(crate) async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    request("POST", url, None).await
}

pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
    url: &str,
    body: &B,
) -> Result<T, String> {
    let json = serde_json::to_string(body).map_err(|_| generic())?;
    request("PUT", url, Some(json)).await
}

pub(crate) async fn delete<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    request("DELETE", url, None).await
}
