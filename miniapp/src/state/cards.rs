//! Card list store.

use std::sync::Arc;

use shared::{AddCardStartRequest, AddCardStartResponse, CardDto, VerifyCardRequest};

use crate::core::{ApiService, Result};
use crate::state::observable::Observable;

/// Cached card list plus the add/remove flows.
pub struct CardStore {
    api: Arc<dyn ApiService>,
    pub cards: Observable<Vec<CardDto>>,
    pub loading: Observable<bool>,
}

impl CardStore {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            cards: Observable::new(Vec::new()),
            loading: Observable::new(false),
        }
    }

    /// Reloads the card list. The cache is replaced wholesale on
    /// success and emptied on failure, so views never render a mix of
    /// old and new state.
    pub async fn load(&self) {
        self.loading.set(true);

        match self.api.get_cards().await {
            Ok(cards) => {
                tracing::debug!(count = cards.len(), "Cards loaded");
                self.cards.set(cards);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load cards, clearing cache");
                self.cards.set(Vec::new());
            }
        }

        self.loading.set(false);
    }

    /// Starts the add-card flow. Pure pass-through: nothing is cached
    /// until the OTP is verified.
    pub async fn start_add(&self, request: AddCardStartRequest) -> Result<AddCardStartResponse> {
        Ok(self.api.start_add_card(request).await?)
    }

    /// Confirms the add-card OTP and appends the returned card to the
    /// cache, sparing a full reload.
    pub async fn verify_add(&self, request: VerifyCardRequest) -> Result<CardDto> {
        let card = self.api.verify_add_card(request).await?;
        let appended = card.clone();
        self.cards.update(move |cards| cards.push(appended));
        Ok(card)
    }

    /// Removes a card. On success the card is filtered out locally; the
    /// cache stays untouched when the server refuses.
    pub async fn delete(&self, card_id: i64) -> Result<()> {
        self.api.delete_card(card_id).await?;
        self.cards.update(|cards| cards.retain(|c| c.id != card_id));
        Ok(())
    }

    /// Combined balance across the cached cards, in minor units.
    pub fn total_balance(&self) -> i64 {
        self.cards.get().iter().map(|c| c.balance).sum()
    }

    /// Drops all cached cards, e.g. on logout.
    pub fn reset(&self) {
        self.cards.set(Vec::new());
    }
}
