//! Swipe-to-reveal gesture state machine.
//!
//! Each card row can be swiped left to expose a delete action beneath
//! it. The tracker keeps one phase per card and guarantees at most one
//! card is ever revealed: starting a drag anywhere collapses everything
//! else first.
//!
//! ```text
//!            begin                release, |dx| past threshold
//! Resting ─────────► Dragging ───────────────────────────────► Revealed
//!    ▲                  │                                          │
//!    └──────────────────┴── release short / cancel / other begin ──┘
//! ```

use std::collections::HashMap;

/// Leftward travel (px) the finger must exceed at release for the
/// action row to stay open.
pub const REVEAL_THRESHOLD: f32 = 50.0;

/// Width (px) of the action row a revealed card slides aside to show.
pub const ACTION_WIDTH: f32 = 80.0;

/// Gesture phase of a single card row.
///
/// `dx` is the horizontal delta since the gesture began, negative while
/// the finger moves left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipePhase {
    Resting,
    Dragging { dx: f32 },
    Revealed,
}

/// Tracks swipe phases for every visible card row, keyed by card id.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    phases: HashMap<i64, SwipePhase>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase of one card. Cards never touched are `Resting`.
    pub fn phase(&self, card_id: i64) -> SwipePhase {
        self.phases
            .get(&card_id)
            .copied()
            .unwrap_or(SwipePhase::Resting)
    }

    /// Starts a drag on `card_id`, collapsing every other card.
    pub fn begin(&mut self, card_id: i64) {
        self.phases.clear();
        self.phases.insert(card_id, SwipePhase::Dragging { dx: 0.0 });
    }

    /// Updates the drag delta. Ignored unless the card is mid-drag, so
    /// stray move events cannot conjure a gesture out of nothing.
    pub fn drag(&mut self, card_id: i64, dx: f32) {
        if let Some(phase) = self.phases.get_mut(&card_id) {
            if matches!(phase, SwipePhase::Dragging { .. }) {
                *phase = SwipePhase::Dragging { dx };
            }
        }
    }

    /// Ends the drag: the card stays revealed only when the finger
    /// travelled left strictly past [`REVEAL_THRESHOLD`].
    pub fn release(&mut self, card_id: i64) {
        if let Some(phase) = self.phases.get_mut(&card_id) {
            *phase = match *phase {
                SwipePhase::Dragging { dx } if -dx > REVEAL_THRESHOLD => SwipePhase::Revealed,
                SwipePhase::Revealed => SwipePhase::Revealed,
                _ => SwipePhase::Resting,
            };
        }
    }

    /// Collapses one card, e.g. after its delete action ran.
    pub fn reset(&mut self, card_id: i64) {
        self.phases.remove(&card_id);
    }

    /// Collapses everything, e.g. when the card list reloads.
    pub fn reset_all(&mut self) {
        self.phases.clear();
    }

    /// Render offset for the card body: 0 at rest, the clamped drag
    /// delta mid-gesture, the full action width when revealed.
    pub fn offset(&self, card_id: i64) -> f32 {
        match self.phase(card_id) {
            SwipePhase::Resting => 0.0,
            SwipePhase::Dragging { dx } => dx.clamp(-ACTION_WIDTH, 0.0),
            SwipePhase::Revealed => -ACTION_WIDTH,
        }
    }

    /// The card whose action row is currently open, if any.
    pub fn revealed_card(&self) -> Option<i64> {
        self.phases
            .iter()
            .find(|(_, phase)| **phase == SwipePhase::Revealed)
            .map(|(id, _)| *id)
    }
}
