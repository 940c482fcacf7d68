//! Profile retrieval and the two profile mutations.

use shared::{AutoPayResponse, Language, ProfileDto, UpdateAutoPayRequest, UpdateLanguageRequest};

use crate::services::api::client::{error_message, ApiClient};

/// Fetches the authenticated user's profile.
pub async fn get_profile(client: &ApiClient) -> Result<ProfileDto, String> {
    let response = client
        .get("/api/profile")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<ProfileDto>()
            .await
            .map_err(|e| format!("Failed to parse profile: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Persists the user's interface language on the server.
#[tracing::instrument(skip(client))]
pub async fn update_language(client: &ApiClient, language: Language) -> Result<(), String> {
    let response = client
        .put("/api/profile/language")
        .json(&UpdateLanguageRequest { language })
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        tracing::info!(?language, "Language updated");
        Ok(())
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "Language update rejected");
        Err(error)
    }
}

/// Toggles subscription auto-renewal and returns the confirmed flag.
#[tracing::instrument(skip(client))]
pub async fn update_autopay(client: &ApiClient, enabled: bool) -> Result<AutoPayResponse, String> {
    let response = client
        .put("/api/profile/autopay")
        .json(&UpdateAutoPayRequest { enabled })
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        let body = response
            .json::<AutoPayResponse>()
            .await
            .map_err(|e| format!("Failed to parse autopay response: {}", e))?;
        tracing::info!(auto_pay = body.auto_pay, "Autopay updated");
        Ok(body)
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "Autopay update rejected");
        Err(error)
    }
}
