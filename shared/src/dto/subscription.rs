use serde::{Deserialize, Serialize};

/// Billing cycle, uppercase on the wire (`MONTHLY`, `YEARLY`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    /// Wire form for the `billingCycle` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "MONTHLY",
            BillingCycle::Yearly => "YEARLY",
        }
    }
}

/// One subscription plan from `GET /api/subscriptions/plans`.
///
/// Prices are minor units (tiyin); both cycles are always present so the view
/// can flip between them without refetching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "priceMonthly")]
    pub price_monthly: i64,
    #[serde(rename = "priceYearly")]
    pub price_yearly: i64,
    pub features: Vec<String>,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
    #[serde(rename = "isCurrentPlan")]
    pub is_current_plan: bool,
}

impl PlanDto {
    /// Price for the given billing cycle.
    pub fn price_for(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.price_monthly,
            BillingCycle::Yearly => self.price_yearly,
        }
    }
}

/// `POST /api/subscriptions/change` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangePlanRequest {
    #[serde(rename = "planId")]
    pub plan_id: i64,
    #[serde(rename = "billingCycle")]
    pub billing_cycle: BillingCycle,
}
