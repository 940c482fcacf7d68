//! Subscription plan store.

use std::sync::Arc;

use shared::{BillingCycle, ChangePlanRequest, PlanDto, ProfileDto};

use crate::core::{ApiService, Result};
use crate::state::observable::Observable;

/// Plan catalogue for the currently selected billing cycle.
pub struct PlanStore {
    api: Arc<dyn ApiService>,
    pub plans: Observable<Vec<PlanDto>>,
    pub billing_cycle: Observable<BillingCycle>,
    pub loading: Observable<bool>,
}

impl PlanStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            plans: Observable::new(Vec::new()),
            billing_cycle: Observable::new(BillingCycle::Monthly),
            loading: Observable::new(false),
        }
    }

    /// Loads the catalogue priced for `cycle`, remembering the cycle for
    /// subsequent plan changes. Clears the catalogue on failure.
    pub async fn load(&self, cycle: BillingCycle) {
        self.billing_cycle.set(cycle);
        self.loading.set(true);

        match self.api.get_plans(cycle).await {
            Ok(plans) => {
                tracing::debug!(count = plans.len(), cycle = cycle.as_str(), "Plans loaded");
                self.plans.set(plans);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load plans, clearing cache");
                self.plans.set(Vec::new());
            }
        }

        self.loading.set(false);
    }

    /// Switches the subscription to `plan_id` under the selected cycle.
    ///
    /// On success the catalogue's `is_current_plan` flags are re-tagged
    /// from the returned profile and the profile itself is handed back,
    /// so the caller can refresh its own profile cache without another
    /// request.
    pub async fn change_plan(&self, plan_id: i64) -> Result<ProfileDto> {
        let request = ChangePlanRequest {
            plan_id,
            billing_cycle: self.billing_cycle.get(),
        };

        let profile = self.api.change_plan(request).await?;
        let current_code = profile.plan_code.clone();
        self.plans.update(move |plans| {
            for plan in plans.iter_mut() {
                plan.is_current_plan = plan.code == current_code;
            }
        });

        Ok(profile)
    }

    /// Drops the cached catalogue, e.g. on logout.
    pub fn reset(&self) {
        self.plans.set(Vec::new());
    }
}
