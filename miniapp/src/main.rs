//! CardWatch dev driver.
//!
//! Runs the client outside Telegram: configuration and captured init
//! data come from the environment, then the home-screen data is printed
//! instead of rendered.
//!
//! ```text
//! CARDWATCH_API_URL=http://127.0.0.1:3001 \
//! CARDWATCH_INIT_DATA='query_id=...&hash=...' \
//! cargo run -p miniapp
//! ```

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use miniapp::core::AppConfig;
use miniapp::services::api::TransactionQuery;
use miniapp::services::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use miniapp::services::telegram::EnvHost;
use miniapp::ui::group_by_category;
use miniapp::MiniApp;
use shared::format_money;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, "CardWatch starting");

    let storage: Arc<dyn KeyValueStorage> = match FileStorage::open(&config.storage_path) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "Device storage unavailable, using in-memory storage");
            Arc::new(MemoryStorage::new())
        }
    };

    let app = MiniApp::new(config, Arc::new(EnvHost::from_env()), storage);

    let outcome = app.startup().await;
    tracing::info!(?outcome, "Startup finished");

    app.cards.load().await;
    let cards = app.cards.cards.get();
    println!("Cards ({})", cards.len());
    for card in &cards {
        println!(
            "  {}  {}  {} UZS",
            card.mask_pan,
            card.card_design_info.bank_name,
            format_money(card.balance)
        );
    }
    println!(
        "Total balance: {} UZS",
        format_money(app.cards.total_balance())
    );

    app.transactions.load(TransactionQuery::default()).await;
    if let Some(summary) = app.transactions.summary.get() {
        println!(
            "{}: income {} UZS, expenses {} UZS",
            summary.period,
            format_money(summary.income),
            format_money(summary.expenses)
        );
    }
    for slice in group_by_category(&app.transactions.transactions.get()) {
        println!("  {:>5.1}%  {}", slice.percentage, slice.category);
    }
}
