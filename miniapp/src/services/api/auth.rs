//! Telegram init-data exchange.

use shared::{TelegramAuthRequest, TelegramAuthResponse};

use crate::services::api::client::{error_message, ApiClient};
use crate::services::api::interceptor::AUTH_ENDPOINT_PATH;

/// Exchanges raw Telegram `initData` for a backend session token.
///
/// The backend validates the payload's HMAC against the bot token and
/// replies with `success: false` (plus a message) when the signature or
/// timestamp check fails. Transport failures and non-2xx statuses come
/// back as `Err`.
#[tracing::instrument(skip(client, init_data), fields(init_data_len = init_data.len()))]
pub async fn authenticate_telegram(
    client: &ApiClient,
    init_data: &str,
) -> Result<TelegramAuthResponse, String> {
    let started = std::time::Instant::now();
    tracing::debug!("Exchanging Telegram init data for a session token");

    let response = client
        .post(AUTH_ENDPOINT_PATH)
        .json(&TelegramAuthRequest {
            init_data: init_data.to_string(),
        })
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Auth exchange request failed");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    if status.is_success() {
        let body = response
            .json::<TelegramAuthResponse>()
            .await
            .map_err(|e| format!("Failed to parse auth response: {}", e))?;

        tracing::info!(
            duration_ms = started.elapsed().as_millis() as u64,
            success = body.success,
            "Auth exchange completed"
        );
        Ok(body)
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "Auth exchange rejected");
        Err(error)
    }
}
