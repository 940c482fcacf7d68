//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::auth::TelegramAuthResponse;
use shared::dto::card::{AddCardStartRequest, AddCardStartResponse, CardDto, VerifyCardRequest};
use shared::dto::currency::{CurrencyOverviewResponse, CurrencyPairDto};
use shared::dto::faq::FaqDto;
use shared::dto::profile::{AutoPayResponse, Language, ProfileDto};
use shared::dto::subscription::{BillingCycle, ChangePlanRequest, PlanDto};
use shared::dto::transaction::TransactionPage;

use crate::services::api::transactions::TransactionQuery;

/// Trait for backend API operations.
///
/// Mirrors every endpoint the client calls. Stores hold `Arc<dyn ApiService>`
/// so tests can substitute a scripted mock for the real HTTP client.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange Telegram init data for a session token
    async fn authenticate_telegram(&self, init_data: &str)
        -> Result<TelegramAuthResponse, String>;

    /// Fetch the user's card list
    async fn get_cards(&self) -> Result<Vec<CardDto>, String>;

    /// Begin the add-card flow; the backend sends an OTP to the card's phone
    async fn start_add_card(
        &self,
        request: AddCardStartRequest,
    ) -> Result<AddCardStartResponse, String>;

    /// Confirm the add-card OTP and receive the created card
    async fn verify_add_card(&self, request: VerifyCardRequest) -> Result<CardDto, String>;

    /// Remove a card
    async fn delete_card(&self, card_id: i64) -> Result<(), String>;

    /// Fetch one page of transaction history
    async fn get_transactions(&self, query: &TransactionQuery)
        -> Result<TransactionPage, String>;

    /// Fetch the user's profile
    async fn get_profile(&self) -> Result<ProfileDto, String>;

    /// Update the interface language preference
    async fn update_language(&self, language: Language) -> Result<(), String>;

    /// Toggle the auto-pay flag; returns the authoritative new value
    async fn update_autopay(&self, enabled: bool) -> Result<AutoPayResponse, String>;

    /// Fetch the subscription plan catalog for a billing cycle
    async fn get_plans(&self, billing_cycle: BillingCycle) -> Result<Vec<PlanDto>, String>;

    /// Switch subscription plan; returns the updated profile
    async fn change_plan(&self, request: ChangePlanRequest) -> Result<ProfileDto, String>;

    /// Fetch the exchange-rate overview for a converted amount
    async fn get_currency_overview(
        &self,
        amount: i64,
    ) -> Result<CurrencyOverviewResponse, String>;

    /// Fetch all tracked currency pairs
    async fn get_currency_pairs(&self) -> Result<Vec<CurrencyPairDto>, String>;

    /// Fetch FAQ entries
    async fn get_faqs(&self, active_only: bool) -> Result<Vec<FaqDto>, String>;
}

#[cfg(test)]
pub mod mock {
    //! Scripted [`ApiService`] double shared by store and bridge tests.
    //!
    //! Each endpoint pops the next queued response; a call with nothing
    //! queued fails loudly so tests notice unexpected traffic. Calls are
    //! recorded as `name` or `name:arg` strings for order assertions.

    use std::collections::VecDeque;

    use parking_lot::Mutex;

    use super::*;

    pub type Script<T> = Mutex<VecDeque<Result<T, String>>>;

    fn next<T>(script: &Script<T>, endpoint: &str) -> Result<T, String> {
        script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(format!("unscripted call to {}", endpoint)))
    }

    #[derive(Default)]
    pub struct MockApiService {
        pub auth: Script<TelegramAuthResponse>,
        pub cards: Script<Vec<CardDto>>,
        pub add_start: Script<AddCardStartResponse>,
        pub add_verify: Script<CardDto>,
        pub delete: Script<()>,
        pub transactions: Script<TransactionPage>,
        pub profile: Script<ProfileDto>,
        pub language: Script<()>,
        pub autopay: Script<AutoPayResponse>,
        pub plans: Script<Vec<PlanDto>>,
        pub plan_change: Script<ProfileDto>,
        pub overview: Script<CurrencyOverviewResponse>,
        pub pairs: Script<Vec<CurrencyPairDto>>,
        pub faqs: Script<Vec<FaqDto>>,
        pub calls: Mutex<Vec<String>>,
        pub seen_init_data: Mutex<Vec<String>>,
        pub seen_queries: Mutex<Vec<TransactionQuery>>,
    }

    impl MockApiService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().push(call);
        }
    }

    #[async_trait]
    impl ApiService for MockApiService {
        async fn authenticate_telegram(
            &self,
            init_data: &str,
        ) -> Result<TelegramAuthResponse, String> {
            self.record("authenticate_telegram".to_string());
            self.seen_init_data.lock().push(init_data.to_string());
            next(&self.auth, "authenticate_telegram")
        }

        async fn get_cards(&self) -> Result<Vec<CardDto>, String> {
            self.record("get_cards".to_string());
            next(&self.cards, "get_cards")
        }

        async fn start_add_card(
            &self,
            request: AddCardStartRequest,
        ) -> Result<AddCardStartResponse, String> {
            self.record(format!("start_add_card:{}", request.card_name));
            next(&self.add_start, "start_add_card")
        }

        async fn verify_add_card(&self, request: VerifyCardRequest) -> Result<CardDto, String> {
            self.record(format!("verify_add_card:{}", request.session_id));
            next(&self.add_verify, "verify_add_card")
        }

        async fn delete_card(&self, card_id: i64) -> Result<(), String> {
            self.record(format!("delete_card:{}", card_id));
            next(&self.delete, "delete_card")
        }

        async fn get_transactions(
            &self,
            query: &TransactionQuery,
        ) -> Result<TransactionPage, String> {
            self.record(format!("get_transactions:{}", query.page));
            self.seen_queries.lock().push(query.clone());
            next(&self.transactions, "get_transactions")
        }

        async fn get_profile(&self) -> Result<ProfileDto, String> {
            self.record("get_profile".to_string());
            next(&self.profile, "get_profile")
        }

        async fn update_language(&self, language: Language) -> Result<(), String> {
            self.record(format!("update_language:{}", language.storage_key()));
            next(&self.language, "update_language")
        }

        async fn update_autopay(&self, enabled: bool) -> Result<AutoPayResponse, String> {
            self.record(format!("update_autopay:{}", enabled));
            next(&self.autopay, "update_autopay")
        }

        async fn get_plans(&self, billing_cycle: BillingCycle) -> Result<Vec<PlanDto>, String> {
            self.record(format!("get_plans:{}", billing_cycle.as_str()));
            next(&self.plans, "get_plans")
        }

        async fn change_plan(&self, request: ChangePlanRequest) -> Result<ProfileDto, String> {
            self.record(format!("change_plan:{}", request.plan_id));
            next(&self.plan_change, "change_plan")
        }

        async fn get_currency_overview(
            &self,
            amount: i64,
        ) -> Result<CurrencyOverviewResponse, String> {
            self.record(format!("get_currency_overview:{}", amount));
            next(&self.overview, "get_currency_overview")
        }

        async fn get_currency_pairs(&self) -> Result<Vec<CurrencyPairDto>, String> {
            self.record("get_currency_pairs".to_string());
            next(&self.pairs, "get_currency_pairs")
        }

        async fn get_faqs(&self, active_only: bool) -> Result<Vec<FaqDto>, String> {
            self.record(format!("get_faqs:{}", active_only));
            next(&self.faqs, "get_faqs")
        }
    }
}
