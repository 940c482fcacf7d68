//! # Application Container
//!
//! [`MiniApp`] wires the whole client together: one HTTP client, one
//! session store, the Telegram bridge and the six feature stores, all
//! sharing the same `Arc<dyn ApiService>`.
//!
//! ## Lifecycle
//!
//! ```text
//! MiniApp::new ──► startup() ─────────────────► screens
//!      │               │                           │
//!      ▼               ▼                           ▼
//!  wire stores   bridge: wait for host        store.load()
//!                → chrome setup               on demand
//!                → init-data exchange
//! ```
//!
//! Startup never fails: whatever the bridge reports, the container is
//! usable and every store can be loaded. An anonymous session simply
//! means requests go out with the configured fallback token or bare,
//! and the backend answers 401 where it insists on auth.
//!
//! Cross-store flows live here. A plan change, for example, belongs to
//! the plan store but returns the updated profile, which this container
//! routes into the profile store so both screens agree.

use std::sync::Arc;

use shared::{Language, ProfileDto};

use crate::core::{ApiService, AppConfig, Result};
use crate::services::api::ApiClient;
use crate::services::session::SessionStore;
use crate::services::storage::{KeyValueStorage, LANGUAGE_KEY, THEME_KEY};
use crate::services::telegram::{AuthOutcome, TelegramBridge, WebViewHost};
use crate::state::{
    CardStore, CurrencyStore, FaqStore, PlanStore, ProfileStore, TransactionStore,
};

/// The assembled client. Stores are public; construction and the
/// flows that span more than one store go through methods.
pub struct MiniApp {
    storage: Arc<dyn KeyValueStorage>,
    session: Arc<SessionStore>,
    bridge: TelegramBridge,
    pub cards: CardStore,
    pub transactions: TransactionStore,
    pub profile: ProfileStore,
    pub plans: PlanStore,
    pub currency: CurrencyStore,
    pub faqs: FaqStore,
}

impl MiniApp {
    /// Wires the container around a real HTTP client.
    pub fn new(
        config: AppConfig,
        host: Arc<dyn WebViewHost>,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Self {
        let config = Arc::new(config);
        let session = Arc::new(SessionStore::new(storage.clone()));
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(config.clone(), session.clone()));
        Self::assemble(config, host, storage, session, api)
    }

    /// Wires the container around an externally supplied API service.
    pub fn with_api(
        config: AppConfig,
        host: Arc<dyn WebViewHost>,
        storage: Arc<dyn KeyValueStorage>,
        api: Arc<dyn ApiService>,
    ) -> Self {
        let config = Arc::new(config);
        let session = Arc::new(SessionStore::new(storage.clone()));
        Self::assemble(config, host, storage, session, api)
    }

    fn assemble(
        config: Arc<AppConfig>,
        host: Arc<dyn WebViewHost>,
        storage: Arc<dyn KeyValueStorage>,
        session: Arc<SessionStore>,
        api: Arc<dyn ApiService>,
    ) -> Self {
        Self {
            bridge: TelegramBridge::new(host, api.clone(), session.clone(), config),
            cards: CardStore::new(api.clone()),
            transactions: TransactionStore::new(api.clone()),
            profile: ProfileStore::new(api.clone()),
            plans: PlanStore::new(api.clone()),
            currency: CurrencyStore::new(api.clone()),
            faqs: FaqStore::new(api),
            storage,
            session,
        }
    }

    /// Runs the bridge's startup sequence. Safe to call exactly once
    /// per process; the outcome says how requests will authenticate.
    pub async fn startup(&self) -> AuthOutcome {
        self.bridge.startup().await
    }

    /// True while a stored, unexpired session token exists.
    pub fn is_authenticated(&self) -> bool {
        self.session.has_valid_token()
    }

    /// Drops the stored session and every cached store, returning the
    /// app to its pre-startup state.
    pub fn logout(&self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
        self.cards.reset();
        self.transactions.reset();
        self.profile.reset();
        self.plans.reset();
        self.currency.reset();
        self.faqs.reset();
        tracing::info!("Logged out, caches dropped");
    }

    /// Effective interface language: the profile's when loaded, else
    /// the device-stored choice, else Uzbek.
    pub fn language(&self) -> Language {
        if let Some(profile) = self.profile.profile.get() {
            return profile.language;
        }
        self.storage
            .get(LANGUAGE_KEY)
            .and_then(|v| Language::from_storage_key(&v))
            .unwrap_or(Language::Uz)
    }

    /// Changes the interface language on the server, in the cached
    /// profile, and in device storage, in that order. A server refusal
    /// leaves the stored choice untouched.
    pub async fn set_language(&self, language: Language) -> Result<()> {
        self.profile.set_language(language).await?;
        self.storage.set(LANGUAGE_KEY, language.storage_key())?;
        Ok(())
    }

    /// Switches the subscription plan and routes the returned profile
    /// into the profile store.
    pub async fn change_plan(&self, plan_id: i64) -> Result<ProfileDto> {
        let profile = self.plans.change_plan(plan_id).await?;
        self.profile.apply(profile.clone());
        Ok(profile)
    }

    /// Persists the theme choice on the device. Theme never touches
    /// the server.
    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.storage
            .set(THEME_KEY, if enabled { "dark" } else { "light" })
    }

    pub fn dark_mode(&self) -> bool {
        self.storage.get(THEME_KEY).as_deref() == Some("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};
    use shared::{BillingCycle, PlanDto};

    use crate::core::service::mock::MockApiService;
    use crate::services::storage::{MemoryStorage, AUTH_TOKEN_EXPIRY_KEY, AUTH_TOKEN_KEY};
    use crate::services::telegram::NullHost;

    // ========== MiniApp Tests ==========

    fn app() -> (Arc<MockApiService>, Arc<MemoryStorage>, MiniApp) {
        let api = Arc::new(MockApiService::new());
        let storage = Arc::new(MemoryStorage::new());
        let config = AppConfig {
            ready_timeout_ms: 10,
            ..AppConfig::default()
        };
        let app = MiniApp::with_api(config, Arc::new(NullHost), storage.clone(), api.clone());
        (api, storage, app)
    }

    fn profile_dto(plan_code: &str) -> ProfileDto {
        ProfileDto {
            id: 42,
            first_name: "Aziz".to_string(),
            last_name: None,
            phone_number: None,
            language: Language::En,
            plan_code: plan_code.to_string(),
            billing_cycle: BillingCycle::Monthly,
            auto_pay: false,
            subscription_expires_at: None,
        }
    }

    fn plan(id: i64, code: &str, current: bool) -> PlanDto {
        PlanDto {
            id,
            code: code.to_string(),
            name: code.to_string(),
            description: String::new(),
            price_monthly: 1_500_000,
            price_yearly: 15_000_000,
            features: Vec::new(),
            is_premium: code == "PREMIUM",
            is_current_plan: current,
        }
    }

    #[tokio::test]
    async fn test_startup_without_a_host_is_anonymous() {
        let (api, _storage, app) = app();

        let outcome = app.startup().await;

        assert_eq!(outcome, AuthOutcome::Anonymous);
        assert!(api.calls().is_empty());
        assert!(!app.is_authenticated());
    }

    #[tokio::test]
    async fn test_startup_reuses_a_stored_token() {
        let (api, _storage, app) = app();
        app.session
            .store("tok", Some(Utc::now() + ChronoDuration::hours(1)))
            .unwrap();

        let outcome = app.startup().await;

        assert_eq!(outcome, AuthOutcome::AlreadyAuthenticated);
        assert!(api.calls().is_empty());
        assert!(app.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_every_cache() {
        let (_api, storage, app) = app();
        app.session
            .store("tok", Some(Utc::now() + ChronoDuration::hours(1)))
            .unwrap();
        app.profile.profile.set(Some(profile_dto("FREE")));
        app.plans.plans.set(vec![plan(1, "FREE", true)]);

        app.logout();

        assert!(!app.is_authenticated());
        assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
        assert_eq!(storage.get(AUTH_TOKEN_EXPIRY_KEY), None);
        assert_eq!(app.profile.profile.get(), None);
        assert!(app.plans.plans.get().is_empty());
        assert!(app.cards.cards.get().is_empty());
        assert!(app.transactions.transactions.get().is_empty());
    }

    #[tokio::test]
    async fn test_language_prefers_profile_then_storage_then_default() {
        let (_api, storage, app) = app();
        assert_eq!(app.language(), Language::Uz);

        storage.set(LANGUAGE_KEY, "ru").unwrap();
        assert_eq!(app.language(), Language::Ru);

        app.profile.profile.set(Some(profile_dto("FREE")));
        assert_eq!(app.language(), Language::En);
    }

    #[tokio::test]
    async fn test_set_language_hits_server_then_storage() {
        let (api, storage, app) = app();
        api.language.lock().push_back(Ok(()));

        app.set_language(Language::Ru).await.unwrap();

        assert_eq!(storage.get(LANGUAGE_KEY).as_deref(), Some("ru"));
        assert_eq!(api.calls(), vec!["update_language:ru"]);
    }

    #[tokio::test]
    async fn test_set_language_failure_skips_storage() {
        let (api, storage, app) = app();
        api.language.lock().push_back(Err("boom".to_string()));

        let result = app.set_language(Language::Ru).await;

        assert!(result.is_err());
        assert_eq!(storage.get(LANGUAGE_KEY), None);
    }

    #[tokio::test]
    async fn test_change_plan_updates_profile_and_catalogue_together() {
        let (api, _storage, app) = app();
        app.profile.profile.set(Some(profile_dto("FREE")));
        app.plans
            .plans
            .set(vec![plan(1, "FREE", true), plan(2, "PREMIUM", false)]);
        api.plan_change.lock().push_back(Ok(profile_dto("PREMIUM")));

        let profile = app.change_plan(2).await.unwrap();

        assert_eq!(profile.plan_code, "PREMIUM");
        assert_eq!(app.profile.profile.get().unwrap().plan_code, "PREMIUM");
        let flags: Vec<bool> = app
            .plans
            .plans
            .get()
            .iter()
            .map(|p| p.is_current_plan)
            .collect();
        assert_eq!(flags, vec![false, true]);
    }

    #[tokio::test]
    async fn test_dark_mode_round_trips_through_storage() {
        let (_api, storage, app) = app();
        assert!(!app.dark_mode());

        app.set_dark_mode(true).unwrap();

        assert!(app.dark_mode());
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
    }
}
