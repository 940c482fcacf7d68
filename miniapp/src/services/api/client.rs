//! HTTP client wrapper with authentication plumbing.
//!
//! [`ApiClient`] owns the underlying `reqwest::Client` and knows how to
//! build authenticated requests: every request helper routes the target
//! path through [`super::interceptor::bearer_for_request`] together with
//! the current session token, so endpoint modules never touch headers
//! themselves.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use shared::{
    AddCardStartRequest, AddCardStartResponse, AutoPayResponse, BillingCycle, CardDto,
    ChangePlanRequest, CurrencyOverviewResponse, CurrencyPairDto, FaqDto, Language, PlanDto,
    ProfileDto, TelegramAuthResponse, TransactionPage, VerifyCardRequest,
};

use crate::core::{ApiService, AppConfig};
use crate::services::api::interceptor;
use crate::services::api::transactions::TransactionQuery;
use crate::services::session::SessionStore;

/// Shared HTTP client for all backend endpoints.
pub struct ApiClient {
    pub(crate) client: Client,
    config: Arc<AppConfig>,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Creates a client bound to the configured backend, with the
    /// configured request timeout applied to every call.
    pub fn new(config: Arc<AppConfig>, session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            config,
            session,
        }
    }

    /// Base URL of the backend, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.get(self.url(path)), path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.post(self.url(path)), path)
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.put(self.url(path)), path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(self.client.delete(self.url(path)), path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn authorize(&self, builder: RequestBuilder, path: &str) -> RequestBuilder {
        let session_token = self.session.token();
        let header = interceptor::bearer_for_request(
            path,
            session_token.as_deref(),
            self.config.fallback_token.as_deref(),
        );

        match header {
            Some(value) => builder.header(reqwest::header::AUTHORIZATION, value),
            None => builder,
        }
    }
}

/// Extracts the server's error message from a non-2xx response, falling
/// back to the status code when the body is not the standard
/// `{"error": "..."}` shape.
pub(crate) async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    response
        .json::<shared::ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("Request failed with status {}", status))
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn authenticate_telegram(&self, init_data: &str) -> Result<TelegramAuthResponse, String> {
        crate::services::api::auth::authenticate_telegram(self, init_data).await
    }

    async fn get_cards(&self) -> Result<Vec<CardDto>, String> {
        crate::services::api::cards::get_cards(self).await
    }

    async fn start_add_card(
        &self,
        request: AddCardStartRequest,
    ) -> Result<AddCardStartResponse, String> {
        crate::services::api::cards::start_add_card(self, request).await
    }

    async fn verify_add_card(&self, request: VerifyCardRequest) -> Result<CardDto, String> {
        crate::services::api::cards::verify_add_card(self, request).await
    }

    async fn delete_card(&self, card_id: i64) -> Result<(), String> {
        crate::services::api::cards::delete_card(self, card_id).await
    }

    async fn get_transactions(&self, query: &TransactionQuery) -> Result<TransactionPage, String> {
        crate::services::api::transactions::get_transactions(self, query).await
    }

    async fn get_profile(&self) -> Result<ProfileDto, String> {
        crate::services::api::profile::get_profile(self).await
    }

    async fn update_language(&self, language: Language) -> Result<(), String> {
        crate::services::api::profile::update_language(self, language).await
    }

    async fn update_autopay(&self, enabled: bool) -> Result<AutoPayResponse, String> {
        crate::services::api::profile::update_autopay(self, enabled).await
    }

    async fn get_plans(&self, billing_cycle: BillingCycle) -> Result<Vec<PlanDto>, String> {
        crate::services::api::subscriptions::get_plans(self, billing_cycle).await
    }

    async fn change_plan(&self, request: ChangePlanRequest) -> Result<ProfileDto, String> {
        crate::services::api::subscriptions::change_plan(self, request).await
    }

    async fn get_currency_overview(&self, amount: i64) -> Result<CurrencyOverviewResponse, String> {
        crate::services::api::currency::get_overview(self, amount).await
    }

    async fn get_currency_pairs(&self) -> Result<Vec<CurrencyPairDto>, String> {
        crate::services::api::currency::get_pairs(self).await
    }

    async fn get_faqs(&self, active_only: bool) -> Result<Vec<FaqDto>, String> {
        crate::services::api::faqs::get_faqs(self, active_only).await
    }
}
