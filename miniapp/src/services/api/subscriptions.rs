//! Subscription plan catalogue and plan changes.

use shared::{BillingCycle, ChangePlanRequest, PlanDto, ProfileDto};

use crate::services::api::client::{error_message, ApiClient};

/// Fetches the plan catalogue priced for the given billing cycle.
pub async fn get_plans(
    client: &ApiClient,
    billing_cycle: BillingCycle,
) -> Result<Vec<PlanDto>, String> {
    let response = client
        .get("/api/subscriptions/plans")
        .query(&[("billingCycle", billing_cycle.as_str())])
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<Vec<PlanDto>>()
            .await
            .map_err(|e| format!("Failed to parse plans: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

/// Switches the user to another plan and returns the updated profile,
/// so callers can patch their cached copy without a refetch.
#[tracing::instrument(skip(client, request), fields(plan_id = request.plan_id))]
pub async fn change_plan(
    client: &ApiClient,
    request: ChangePlanRequest,
) -> Result<ProfileDto, String> {
    let response = client
        .post("/api/subscriptions/change")
        .json(&request)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        let profile = response
            .json::<ProfileDto>()
            .await
            .map_err(|e| format!("Failed to parse profile: {}", e))?;
        tracing::info!(plan_code = %profile.plan_code, "Plan changed");
        Ok(profile)
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "Plan change rejected");
        Err(error)
    }
}
