//! Exchange-rate store.

use std::sync::Arc;

use shared::{CurrencyOverviewResponse, CurrencyPairDto};

use crate::core::ApiService;
use crate::state::observable::Observable;

/// Conversion amount shown before the user types anything.
pub const DEFAULT_CONVERSION_AMOUNT: i64 = 100;

/// Cached USD/UZS overview and the raw pair list.
pub struct CurrencyStore {
    api: Arc<dyn ApiService>,
    pub overview: Observable<Option<CurrencyOverviewResponse>>,
    pub pairs: Observable<Vec<CurrencyPairDto>>,
    pub amount: Observable<i64>,
    pub loading: Observable<bool>,
}

impl CurrencyStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            overview: Observable::new(None),
            pairs: Observable::new(Vec::new()),
            amount: Observable::new(DEFAULT_CONVERSION_AMOUNT),
            loading: Observable::new(false),
        }
    }

    /// Reloads the overview converted for `amount` base units, clearing
    /// it on failure. The amount is remembered so a later refresh keeps
    /// the user's input.
    pub async fn load_overview(&self, amount: i64) {
        self.amount.set(amount);
        self.loading.set(true);

        match self.api.get_currency_overview(amount).await {
            Ok(overview) => {
                tracing::debug!(rate = overview.rate, "Currency overview loaded");
                self.overview.set(Some(overview));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load currency overview, clearing cache");
                self.overview.set(None);
            }
        }

        self.loading.set(false);
    }

    /// Reloads the raw pair list, clearing it on failure.
    pub async fn load_pairs(&self) {
        self.loading.set(true);

        match self.api.get_currency_pairs().await {
            Ok(pairs) => {
                tracing::debug!(count = pairs.len(), "Currency pairs loaded");
                self.pairs.set(pairs);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load currency pairs, clearing cache");
                self.pairs.set(Vec::new());
            }
        }

        self.loading.set(false);
    }

    /// Drops both caches, e.g. on logout.
    pub fn reset(&self) {
        self.overview.set(None);
        self.pairs.set(Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::{BestOfferDto, CurrencyInfoDto};

    use crate::core::service::mock::MockApiService;

    // ========== CurrencyStore Tests ==========

    fn overview(rate: f64) -> CurrencyOverviewResponse {
        CurrencyOverviewResponse {
            base: CurrencyInfoDto {
                currency: "USD".to_string(),
                currency_name: "AQSH dollari".to_string(),
                flag_url: "/img/us.svg".to_string(),
                amount: 100.0,
            },
            quote: CurrencyInfoDto {
                currency: "UZS".to_string(),
                currency_name: "O'zbek so'mi".to_string(),
                flag_url: "/img/uz.svg".to_string(),
                amount: 100.0 * rate,
            },
            rate,
            updated_at: Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap(),
            best_offers: vec![BestOfferDto {
                id: 1,
                bank_name: "Kapitalbank".to_string(),
                bank_code: Some("KAPITAL".to_string()),
                logo_url: "/img/kapital.svg".to_string(),
                sell_rate: rate + 30.0,
                buy_rate: rate - 30.0,
            }],
        }
    }

    fn store() -> (Arc<MockApiService>, CurrencyStore) {
        let api = Arc::new(MockApiService::new());
        let store = CurrencyStore::new(api.clone());
        (api, store)
    }

    #[tokio::test]
    async fn test_load_overview_remembers_the_amount() {
        let (api, store) = store();
        api.overview.lock().push_back(Ok(overview(12650.0)));

        store.load_overview(250).await;

        assert_eq!(store.amount.get(), 250);
        assert_eq!(store.overview.get().unwrap().rate, 12650.0);
        assert_eq!(api.calls(), vec!["get_currency_overview:250"]);
    }

    #[tokio::test]
    async fn test_overview_failure_clears_cache() {
        let (api, store) = store();
        store.overview.set(Some(overview(12650.0)));
        api.overview.lock().push_back(Err("boom".to_string()));

        store.load_overview(100).await;

        assert_eq!(store.overview.get(), None);
        assert!(!store.loading.get());
    }

    #[tokio::test]
    async fn test_pairs_failure_clears_cache() {
        let (api, store) = store();
        store.pairs.set(vec![CurrencyPairDto {
            base: "EUR".to_string(),
            quote: "UZS".to_string(),
            rate: 13800.0,
            updated_at: Utc.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap(),
        }]);
        api.pairs.lock().push_back(Err("boom".to_string()));

        store.load_pairs().await;

        assert!(store.pairs.get().is_empty());
    }
}
