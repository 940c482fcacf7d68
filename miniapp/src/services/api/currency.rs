//! Exchange-rate overview and raw pair listing.

use shared::{CurrencyOverviewResponse, CurrencyPairDto};

use crate::services::api::client::{error_message, ApiClient};

/// Fetches the USD/UZS overview with bank best offers, converted for
/// `amount` units of the base currency.
pub async fn get_overview(
    client: &ApiClient,
    amount: i64,
) -> Result<CurrencyOverviewResponse, String> {
    let response = client
        .get("/api/currency/overview")
        .query(&[("amount", amount.to_string())])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<CurrencyOverviewResponse>()
            .await
            .map_err(|e| format!("Failed to parse currency overview: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Fetches every tracked currency pair with its central-bank rate.
pub async fn get_pairs(client: &ApiClient) -> Result<Vec<CurrencyPairDto>, String> {
    let response = client
        .get("/api/currency/pairs")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<Vec<CurrencyPairDto>>()
            .await
            .map_err(|e| format!("Failed to parse currency pairs: {}", e))
    } else {
        Err(error_message(response).await)
    }
}
