//! FAQ content listing.

use shared::FaqDto;

use crate::services::api::client::{error_message, ApiClient};

/// Fetches FAQ entries, optionally restricted to published ones.
/// Ordering is the server's; callers sort by `display_order`.
pub async fn get_faqs(client: &ApiClient, active_only: bool) -> Result<Vec<FaqDto>, String> {
    let response = client
        .get("/api/faqs")
        .query(&[("activeOnly", active_only.to_string())])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<Vec<FaqDto>>()
            .await
            .map_err(|e| format!("Failed to parse FAQs: {}", e))
    } else {
        Err(error_message(response).await)
    }
}
