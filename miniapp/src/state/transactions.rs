//! Transaction history store with cursor pagination.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{TransactionDto, TransactionPage};

use crate::core::ApiService;
use crate::services::api::transactions::TransactionQuery;
use crate::state::observable::Observable;

/// Period-level totals reported alongside every history page.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub income: i64,
    pub expenses: i64,
    pub period: String,
    pub total_elements: u64,
}

impl PeriodSummary {
    fn from_page(page: &TransactionPage) -> Self {
        Self {
            income: page.income_amount,
            expenses: page.expenses_amount,
            period: page.period.clone(),
            total_elements: page.total_elements,
        }
    }
}

/// Where the next `load_more` continues from.
struct PageCursor {
    query: TransactionQuery,
    next_page: u32,
    has_next: bool,
    in_flight: bool,
}

/// Cached history for the current filter, grown page by page.
///
/// `load` resets the cursor to page zero of a new query; `load_more`
/// appends the next page behind an in-flight guard so a double-tap
/// cannot fetch the same page twice and duplicate rows.
pub struct TransactionStore {
    api: Arc<dyn ApiService>,
    pub transactions: Observable<Vec<TransactionDto>>,
    pub summary: Observable<Option<PeriodSummary>>,
    pub loading: Observable<bool>,
    cursor: RwLock<PageCursor>,
}

impl TransactionStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            transactions: Observable::new(Vec::new()),
            summary: Observable::new(None),
            loading: Observable::new(false),
            cursor: RwLock::new(PageCursor {
                query: TransactionQuery::default(),
                next_page: 0,
                has_next: false,
                in_flight: false,
            }),
        }
    }

    /// True while more pages remain behind the current filter.
    pub fn has_more(&self) -> bool {
        self.cursor.read().has_next
    }

    /// Loads the first page of a new query, replacing the whole cache.
    /// On failure the list and summary are cleared together.
    pub async fn load(&self, query: TransactionQuery) {
        let query = query.with_page(0);
        self.loading.set(true);
        {
            let mut cursor = self.cursor.write();
            cursor.query = query.clone();
            cursor.next_page = 0;
            cursor.has_next = false;
            cursor.in_flight = false;
        }

        match self.api.get_transactions(&query).await {
            Ok(page) => {
                tracing::debug!(
                    returned = page.content.len(),
                    total = page.total_elements,
                    "History reloaded"
                );
                {
                    let mut cursor = self.cursor.write();
                    cursor.has_next = page.has_next;
                    cursor.next_page = page.page + 1;
                }
                self.summary.set(Some(PeriodSummary::from_page(&page)));
                self.transactions.set(page.content);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load history, clearing cache");
                self.clear();
            }
        }

        self.loading.set(false);
    }

    /// Appends the next page of the current query. No-op while a page
    /// is already being fetched or when the last page was reached.
    /// A failed append poisons the whole sequence, so the cache is
    /// cleared rather than left with a gap before the next page.
    pub async fn load_more(&self) {
        let query = {
            let mut cursor = self.cursor.write();
            if cursor.in_flight || !cursor.has_next {
                return;
            }
            cursor.in_flight = true;
            cursor.query.clone().with_page(cursor.next_page)
        };

        match self.api.get_transactions(&query).await {
            Ok(page) => {
                {
                    let mut cursor = self.cursor.write();
                    cursor.in_flight = false;
                    cursor.has_next = page.has_next;
                    cursor.next_page = page.page + 1;
                }
                self.transactions.update(move |txs| txs.extend(page.content));
            }
            Err(e) => {
                tracing::warn!(error = %e, page = query.page, "Failed to load next page");
                {
                    let mut cursor = self.cursor.write();
                    cursor.in_flight = false;
                    cursor.has_next = false;
                }
                self.clear();
            }
        }
    }

    /// Drops the cached history and rewinds the cursor, e.g. on logout.
    pub fn reset(&self) {
        {
            let mut cursor = self.cursor.write();
            cursor.next_page = 0;
            cursor.has_next = false;
            cursor.in_flight = false;
        }
        self.clear();
    }

    fn clear(&self) {
        self.summary.set(None);
        self.transactions.set(Vec::new());
    }

    #[cfg(test)]
    fn set_in_flight(&self, value: bool) {
        self.cursor.write().in_flight = value;
    }
}
