use super::chips::Unit;
use crate::PlayerId;
use serde::{Deserialize, Serialize};

/// Per-invocation display configuration. Passed by value to each
/// narration so concurrent replays cannot interfere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Show hole cards on every action, not just preflop.
    pub show_cards: bool,
    /// Reveal the viewpoint player's owner-visible cards.
    pub show_self: bool,
    /// Annotate bets and raises with pot percentages.
    pub advanced: bool,
    /// Annotate calls (and postflop folds) with required equity.
    pub required: bool,
    pub unit: Unit,
    /// Viewpoint player for owner-visible cards.
    pub hero: PlayerId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_cards: false,
            show_self: true,
            advanced: true,
            required: false,
            unit: Unit::Blinds,
            hero: 0,
        }
    }
}
