//! FAQ store.

use std::sync::Arc;

use shared::FaqDto;

use crate::core::ApiService;
use crate::state::observable::Observable;

/// Cached FAQ entries, kept sorted by their editorial order.
pub struct FaqStore {
    api: Arc<dyn ApiService>,
    pub faqs: Observable<Vec<FaqDto>>,
    pub loading: Observable<bool>,
}

impl FaqStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            faqs: Observable::new(Vec::new()),
            loading: Observable::new(false),
        }
    }

    /// Reloads published FAQ entries. The server's ordering is not
    /// trusted; entries are sorted by `display_order` before caching.
    pub async fn load(&self) {
        self.loading.set(true);

        match self.api.get_faqs(true).await {
            Ok(mut faqs) => {
                faqs.sort_by_key(|f| f.display_order);
                tracing::debug!(count = faqs.len(), "FAQs loaded");
                self.faqs.set(faqs);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load FAQs, clearing cache");
                self.faqs.set(Vec::new());
            }
        }

        self.loading.set(false);
    }

    /// Drops the cached entries, e.g. on logout.
    pub fn reset(&self) {
        self.faqs.set(Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::mock::MockApiService;

    // ========== FaqStore Tests ==========

    fn faq(id: i64, display_order: i32) -> FaqDto {
        FaqDto {
            id,
            question_uz: format!("Savol {}", id),
            question_ru: format!("Вопрос {}", id),
            question_en: format!("Question {}", id),
            answer_uz: "Javob".to_string(),
            answer_ru: "Ответ".to_string(),
            answer_en: "Answer".to_string(),
            display_order,
            active: true,
        }
    }

    fn store() -> (Arc<MockApiService>, FaqStore) {
        let api = Arc::new(MockApiService::new());
        let store = FaqStore::new(api.clone());
        (api, store)
    }

    #[tokio::test]
    async fn test_faqs_are_sorted_by_display_order() {
        let (api, store) = store();
        api.faqs
            .lock()
            .push_back(Ok(vec![faq(1, 30), faq(2, 10), faq(3, 20)]));

        store.load().await;

        let ids: Vec<i64> = store.faqs.get().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(api.calls(), vec!["get_faqs:true"]);
    }

    #[tokio::test]
    async fn test_load_failure_clears_cache() {
        let (api, store) = store();
        store.faqs.set(vec![faq(1, 10)]);
        api.faqs.lock().push_back(Err("boom".to_string()));

        store.load().await;

        assert!(store.faqs.get().is_empty());
        assert!(!store.loading.get());
    }
}
