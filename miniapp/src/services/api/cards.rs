//! Card listing, the two-step add flow and card removal.
//!
//! Adding a card is an OTP handshake: `start_add_card` submits the card
//! details and triggers an SMS to the number on file, `verify_add_card`
//! confirms the code and returns the newly linked card.

use shared::{AddCardStartRequest, AddCardStartResponse, CardDto, VerifyCardRequest};

use crate::services::api::client::{error_message, ApiClient};

/// Fetches every card linked to the authenticated user.
pub async fn get_cards(client: &ApiClient) -> Result<Vec<CardDto>, String> {
    let response = client
        .get("/api/cards")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<Vec<CardDto>>()
            .await
            .map_err(|e| format!("Failed to parse cards: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Submits new card details and starts OTP verification.
///
/// The request body carries the full PAN, so it is excluded from the
/// trace span wholesale.
#[tracing::instrument(skip_all, fields(card_name = %request.card_name))]
pub async fn start_add_card(
    client: &ApiClient,
    request: AddCardStartRequest,
) -> Result<AddCardStartResponse, String> {
    let response = client
        .post("/api/cards/add/start")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Add-card start request failed");
            format!("Network error: {}", e)
        })?;

    let status = response.status();
    if status.is_success() {
        let body = response
            .json::<AddCardStartResponse>()
            .await
            .map_err(|e| format!("Failed to parse add-card session: {}", e))?;
        tracing::info!(masked_phone = %body.masked_phone, "OTP sent for new card");
        Ok(body)
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "Add-card start rejected");
        Err(error)
    }
}

/// Confirms the OTP for a pending add-card session and returns the
/// linked card.
#[tracing::instrument(skip_all, fields(session_id = %request.session_id))]
pub async fn verify_add_card(
    client: &ApiClient,
    request: VerifyCardRequest,
) -> Result<CardDto, String> {
    let response = client
        .post("/api/cards/add/verify")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        let card = response
            .json::<CardDto>()
            .await
            .map_err(|e| format!("Failed to parse card: {}", e))?;
        tracing::info!(card_id = card.id, "Card linked");
        Ok(card)
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "OTP verification rejected");
        Err(error)
    }
}

/// Unlinks a card by its numeric id.
#[tracing::instrument(skip(client))]
pub async fn delete_card(client: &ApiClient, card_id: i64) -> Result<(), String> {
    let response = client
        .delete(&format!("/api/cards/{}", card_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        tracing::info!(card_id, "Card removed");
        Ok(())
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "Card removal rejected");
        Err(error)
    }
}
