use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transaction direction as transmitted by the processing backend.
///
/// The wire values are literally `"+"` (money in) and `"-"` (money out).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TranType {
    #[serde(rename = "+")]
    Income,
    #[serde(rename = "-")]
    Expense,
}

/// History filter accepted by `GET /api/history/transactions` (`type=` param).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionFilter {
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    /// Wire form of the filter for the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionFilter::All => "ALL",
            TransactionFilter::Income => "INCOME",
            TransactionFilter::Expense => "EXPENSE",
        }
    }
}

/// A single historical transaction.
///
/// Immutable once issued; the client never writes transactions, only reads
/// pages of them. `amount` and `balance_after` are minor units (tiyin).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDto {
    pub id: i64,
    #[serde(rename = "tranType")]
    pub tran_type: TranType,
    pub amount: i64,
    #[serde(rename = "balanceAfter")]
    pub balance_after: i64,
    pub currency: String,
    #[serde(rename = "merchantName")]
    pub merchant_name: String,
    #[serde(rename = "cardId")]
    pub card_id: String,
    #[serde(rename = "maskPan")]
    pub mask_pan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "categoryDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category_description: Option<String>,
    #[serde(rename = "mccLogoUrl", default, skip_serializing_if = "Option::is_none")]
    pub mcc_logo_url: Option<String>,
    #[serde(rename = "transactedAt")]
    pub transacted_at: DateTime<Utc>,
    pub reversal: bool,
}

/// Paginated envelope returned by `GET /api/history/transactions`.
///
/// Alongside the page of `content` the backend reports income and expense
/// totals for the requested period so the client never sums pages itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionPage {
    pub page: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    #[serde(rename = "hasPrevious")]
    pub has_previous: bool,
    #[serde(rename = "incomeAmount")]
    pub income_amount: i64,
    #[serde(rename = "expensesAmount")]
    pub expenses_amount: i64,
    pub period: String,
    pub content: Vec<TransactionDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tran_type_wire_values() {
        assert_eq!(serde_json::to_string(&TranType::Income).unwrap(), "\"+\"");
        assert_eq!(serde_json::to_string(&TranType::Expense).unwrap(), "\"-\"");
        let parsed: TranType = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(parsed, TranType::Expense);
    }

    #[test]
    fn test_filter_as_str() {
        assert_eq!(TransactionFilter::All.as_str(), "ALL");
        assert_eq!(TransactionFilter::Income.as_str(), "INCOME");
        assert_eq!(TransactionFilter::Expense.as_str(), "EXPENSE");
    }

    #[test]
    fn test_page_deserializes_from_wire_shape() {
        let page: TransactionPage = serde_json::from_str(
            r#"{
                "page": 0,
                "size": 20,
                "totalElements": 41,
                "totalPages": 3,
                "hasNext": true,
                "hasPrevious": false,
                "incomeAmount": 900000,
                "expensesAmount": 455000,
                "period": "2025-01",
                "content": [{
                    "id": 1001,
                    "tranType": "-",
                    "amount": 45000,
                    "balanceAfter": 205000,
                    "currency": "UZS",
                    "merchantName": "KORZINKA",
                    "cardId": "c-7781",
                    "maskPan": "8600 12** **** 3456",
                    "category": "GROCERY",
                    "categoryDescription": "Oziq-ovqat",
                    "mccLogoUrl": "/img/mcc/grocery.svg",
                    "transactedAt": "2025-01-14T09:15:00Z",
                    "reversal": false
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(page.total_elements, 41);
        assert!(page.has_next);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].tran_type, TranType::Expense);
        assert_eq!(page.content[0].amount, 45_000);
    }

    #[test]
    fn test_transaction_tolerates_missing_category_fields() {
        let tx: TransactionDto = serde_json::from_str(
            r#"{
                "id": 1002,
                "tranType": "+",
                "amount": 900000,
                "balanceAfter": 1105000,
                "currency": "UZS",
                "merchantName": "SALARY",
                "cardId": "c-7781",
                "maskPan": "8600 12** **** 3456",
                "transactedAt": "2025-01-01T06:00:00Z",
                "reversal": false
            }"#,
        )
        .unwrap();
        assert_eq!(tx.category, None);
        assert_eq!(tx.mcc_logo_url, None);
    }
}
