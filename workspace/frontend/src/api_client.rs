pub mod forecast;
pub mod query;

use common::{RequestError, decode_response};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::settings;

// API_BASE is now retrieved from settings
fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Common POST request handler.
///
/// Every failure comes back as a [`RequestError`] whose display text is what
/// the page shows; the status and body are decoded the same way as in the
/// command line client.
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            RequestError::malformed(e)
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            RequestError::transport(e)
        })?;

    let status = response.status();
    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, status);
    }

    let text = response.text().await.map_err(|e| {
        log::error!("POST {} - Failed to read response body: {}", endpoint, e);
        RequestError::transport(e)
    })?;

    log::trace!("POST {} - Response received, decoding {} bytes", endpoint, text.len());
    let decoded = decode_response(status, &text);
    match &decoded {
        Ok(_) => log::info!("POST {} - Success", endpoint),
        Err(err) => log::error!("POST {} - {}", endpoint, err),
    }
    decoded
}
