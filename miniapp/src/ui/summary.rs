//! Spending aggregation for the home and history screens.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use shared::{TranType, TransactionDto};

/// Donut palette, assigned to categories in descending spend order and
/// cycled when a month has more categories than colors.
pub const CHART_COLORS: [&str; 8] = [
    "#4ADE80", "#F87171", "#60A5FA", "#FBBF24", "#A78BFA", "#FB923C", "#2DD4BF", "#F472B6",
];

/// Bucket for transactions the processor left uncategorized.
pub const FALLBACK_CATEGORY: &str = "Boshqa";

/// Sum of incoming amounts in minor units.
pub fn total_income(transactions: &[TransactionDto]) -> i64 {
    transactions
        .iter()
        .filter(|tx| tx.tran_type == TranType::Income)
        .map(|tx| tx.amount.abs())
        .sum()
}

/// Sum of outgoing amounts in minor units, as a positive number.
pub fn total_expenses(transactions: &[TransactionDto]) -> i64 {
    transactions
        .iter()
        .filter(|tx| tx.tran_type == TranType::Expense)
        .map(|tx| tx.amount.abs())
        .sum()
}

/// The first `count` rows of a newest-first list, for the home screen's
/// recent-activity card.
pub fn recent(transactions: &[TransactionDto], count: usize) -> &[TransactionDto] {
    &transactions[..transactions.len().min(count)]
}

/// Transactions of one calendar day, in the order the server sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub transactions: Vec<TransactionDto>,
}

/// Buckets a newest-first transaction list into day sections for the
/// history screen. Groups appear in first-seen order, so a descending
/// input yields descending sections.
pub fn group_by_day(transactions: &[TransactionDto]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for tx in transactions {
        let date = tx.transacted_at.date_naive();
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.transactions.push(tx.clone()),
            None => groups.push(DayGroup {
                date,
                transactions: vec![tx.clone()],
            }),
        }
    }
    groups
}

/// One donut segment of the monthly expense chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    /// Spend in minor units, always positive.
    pub total: i64,
    /// Share of the month's spend, rounded to one decimal.
    pub percentage: f64,
    pub color: &'static str,
}

/// Groups a month of transactions into chart segments.
///
/// Only expense rows count; amounts are folded in absolute value per
/// `category_description`, uncategorized rows land in
/// [`FALLBACK_CATEGORY`]. Segments come back sorted by spend, largest
/// first, with palette colors assigned in that order.
pub fn group_by_category(transactions: &[TransactionDto]) -> Vec<CategorySlice> {
    let mut totals: HashMap<&str, i64> = HashMap::new();
    for tx in transactions {
        if tx.tran_type != TranType::Expense {
            continue;
        }
        let key = tx
            .category_description
            .as_deref()
            .unwrap_or(FALLBACK_CATEGORY);
        *totals.entry(key).or_insert(0) += tx.amount.abs();
    }

    let grand_total: i64 = totals.values().sum();
    if grand_total == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(&str, i64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (category, total))| CategorySlice {
            category: category.to_string(),
            total,
            percentage: ((total as f64 / grand_total as f64) * 1000.0).round() / 10.0,
            color: CHART_COLORS[i % CHART_COLORS.len()],
        })
        .collect()
}

/// Calendar month with the inclusive date bounds the history endpoint
/// expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    /// `YYYY-MM`, doubles as the selector label.
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The `count` most recent calendar months up to and including the one
/// containing `today`, oldest first.
pub fn recent_months(today: NaiveDate, count: usize) -> Vec<MonthWindow> {
    let mut months = Vec::with_capacity(count);
    let mut year = today.year();
    let mut month = today.month();

    for _ in 0..count {
        if let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) {
            let (next_year, next_month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
                .and_then(|first| first.pred_opt())
                .unwrap_or(start);

            months.push(MonthWindow {
                label: format!("{:04}-{:02}", year, month),
                start,
                end,
            });
        }

        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }

    months.reverse();
    months
}
