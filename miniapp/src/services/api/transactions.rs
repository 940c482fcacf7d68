//! Paged transaction history.

use chrono::NaiveDate;
use shared::{TransactionFilter, TransactionPage};

use crate::services::api::client::{error_message, ApiClient};

/// Default page size for history listings.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page size used when a whole month is pulled in one request for
/// expense aggregation.
pub const CHART_PAGE_SIZE: u32 = 100;

/// Query parameters for `GET /api/history/transactions`.
///
/// Pages are zero-based. `start` and `end` bound `transactedAt`
/// inclusively and are encoded as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    pub filter: TransactionFilter,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub card_id: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            filter: TransactionFilter::All,
            start: None,
            end: None,
            card_id: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TransactionQuery {
    /// Expense-only query over a date window, sized so a month of
    /// spending fits in a single page.
    pub fn expenses_between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            filter: TransactionFilter::Expense,
            start: Some(start),
            end: Some(end),
            size: CHART_PAGE_SIZE,
            ..Self::default()
        }
    }

    /// Same query pointed at a different page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("type", self.filter.as_str().to_string())];
        if let Some(start) = self.start {
            pairs.push(("start", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(card_id) = &self.card_id {
            pairs.push(("cardId", card_id.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", self.size.to_string()));
        pairs
    }
}

/// Fetches one page of transaction history with its period summary.
#[tracing::instrument(skip(client, query), fields(filter = query.filter.as_str(), page = query.page))]
pub async fn get_transactions(
    client: &ApiClient,
    query: &TransactionQuery,
) -> Result<TransactionPage, String> {
    let started = std::time::Instant::now();

    let response = client
        .get("/api/history/transactions")
        .query(&query.to_query_pairs())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if status.is_success() {
        let page = response
            .json::<TransactionPage>()
            .await
            .map_err(|e| format!("Failed to parse history page: {}", e))?;

        tracing::debug!(
            duration_ms = started.elapsed().as_millis() as u64,
            returned = page.content.len(),
            total = page.total_elements,
            "History page loaded"
        );
        Ok(page)
    } else {
        let error = error_message(response).await;
        tracing::warn!(status = %status, error = %error, "History request rejected");
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== TransactionQuery Tests ==========

    #[test]
    fn test_default_query_pairs() {
        let pairs = TransactionQuery::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("type", "ALL".to_string()),
                ("page", "0".to_string()),
                ("size", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_dates_and_card_are_encoded_when_present() {
        let query = TransactionQuery {
            filter: TransactionFilter::Income,
            start: NaiveDate::from_ymd_opt(2025, 3, 1),
            end: NaiveDate::from_ymd_opt(2025, 3, 31),
            card_id: Some("c-42".to_string()),
            page: 2,
            size: 50,
        };

        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("type", "INCOME".to_string()),
                ("start", "2025-03-01".to_string()),
                ("end", "2025-03-31".to_string()),
                ("cardId", "c-42".to_string()),
                ("page", "2".to_string()),
                ("size", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_page_only_moves_the_cursor() {
        let base = TransactionQuery::default();
        let next = base.clone().with_page(3);
        assert_eq!(next.page, 3);
        assert_eq!(next.filter, base.filter);
        assert_eq!(next.size, base.size);
    }

    #[test]
    fn test_expenses_between_targets_one_big_page() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let query = TransactionQuery::expenses_between(start, end);

        assert_eq!(query.filter, TransactionFilter::Expense);
        assert_eq!(query.page, 0);
        assert_eq!(query.size, CHART_PAGE_SIZE);
        assert_eq!(query.start, Some(start));
        assert_eq!(query.end, Some(end));
    }
}
