//! Profile store.

use std::sync::Arc;

use shared::{Language, ProfileDto};

use crate::core::{ApiService, Result};
use crate::state::observable::Observable;

/// Cached profile plus the language and autopay mutations.
///
/// Mutations patch the cached copy instead of refetching: the backend
/// either echoes the new value (autopay) or the request itself carries
/// it (language), so a second round trip adds nothing.
pub struct ProfileStore {
    api: Arc<dyn ApiService>,
    pub profile: Observable<Option<ProfileDto>>,
    pub loading: Observable<bool>,
}

impl ProfileStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            profile: Observable::new(None),
            loading: Observable::new(false),
        }
    }

    /// Reloads the profile, clearing it on failure.
    pub async fn load(&self) {
        self.loading.set(true);

        match self.api.get_profile().await {
            Ok(profile) => {
                tracing::debug!(plan = %profile.plan_code, "Profile loaded");
                self.profile.set(Some(profile));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load profile, clearing cache");
                self.profile.set(None);
            }
        }

        self.loading.set(false);
    }

    /// Persists the interface language on the server and patches the
    /// cached profile.
    pub async fn set_language(&self, language: Language) -> Result<()> {
        self.api.update_language(language).await?;
        self.profile.update(|p| {
            if let Some(profile) = p {
                profile.language = language;
            }
        });
        Ok(())
    }

    /// Toggles auto-renewal. The server's echoed flag is authoritative
    /// and is what lands in the cache.
    pub async fn set_autopay(&self, enabled: bool) -> Result<bool> {
        let response = self.api.update_autopay(enabled).await?;
        let confirmed = response.auto_pay;
        self.profile.update(|p| {
            if let Some(profile) = p {
                profile.auto_pay = confirmed;
            }
        });
        Ok(confirmed)
    }

    /// Replaces the cached profile with one returned by another flow,
    /// such as a plan change.
    pub(crate) fn apply(&self, profile: ProfileDto) {
        self.profile.set(Some(profile));
    }

    /// Drops the cached profile, e.g. on logout.
    pub fn reset(&self) {
        self.profile.set(None);
    }
}
