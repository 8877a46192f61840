use super::position::Position;
use super::settings::Settings;
use super::street::Street;
use super::verb::Verb;
use crate::cards::{Card, Hole};
use crate::{Chips, PlayerId};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Five community card slots; 0..=2 flop, 3 turn, 4 river.
/// A slot is either fully known or unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Board([Option<Card>; 5]);

impl Board {
    pub fn get(&self, index: usize) -> Option<Card> {
        self.0[index]
    }
    /// The river card is known, i.e. the full run-out was recorded.
    pub fn complete(&self) -> bool {
        self.0[4].is_some()
    }
    /// Display token for one slot; unknown slots render blank.
    pub fn token(&self, index: usize) -> String {
        self.0[index].map(|c| c.to_string()).unwrap_or_default()
    }
}

impl From<[Option<Card>; 5]> for Board {
    fn from(slots: [Option<Card>; 5]) -> Self {
        Self(slots)
    }
}

/// One hand's table-level metadata: identity, boards, and per-street
/// effective stacks (zero = not recorded).
#[derive(Debug, Clone, Serialize)]
pub struct HandMeta {
    pub table: i64,
    pub name: String,
    pub hand: i64,
    pub time: NaiveDateTime,
    pub players: i64,
    pub blind: Chips,
    pub board: Board,
    pub second: Option<Board>,
    pub effective: [Chips; 4],
}

impl HandMeta {
    /// Effective stack entering a street. The synthetic second-board
    /// street never carries one.
    pub fn effective(&self, street: Street) -> Chips {
        match street {
            Street::Pref => self.effective[0],
            Street::Flop => self.effective[1],
            Street::Turn => self.effective[2],
            Street::Rive => self.effective[3],
            Street::Show => 0,
        }
    }
}

/// Starting stack snapshot for one player, supplied ordered by
/// position code descending (button last).
#[derive(Debug, Clone, Serialize)]
pub struct StackEntry {
    pub name: String,
    pub stack: Chips,
    pub position: Position,
}

/// One recorded betting action. Pot and to-call are measured before
/// the action itself.
#[derive(Debug, Clone, Serialize)]
pub struct ActionEvent {
    pub street: Street,
    pub number: i64,
    pub player: PlayerId,
    pub name: String,
    pub verb: Verb,
    pub amount: Chips,
    pub net: Chips,
    pub allin: bool,
    pub pot: Chips,
    pub to_call: Chips,
    pub position: Position,
    /// Publicly known hole cards, if any.
    pub cards: Option<Hole>,
    /// Cards visible only to their owner (the viewpoint player).
    pub owned: Option<Hole>,
}

/// Final accounting for one player.
#[derive(Debug, Clone, Serialize)]
pub struct ShowdownResult {
    pub name: String,
    pub balance: Chips,
    pub cards: Option<Hole>,
    pub showdown: bool,
    pub class: Option<String>,
}

/// The four record collections for one hand key, ready to narrate.
#[derive(Debug, Clone, Serialize)]
pub struct Replay {
    pub meta: HandMeta,
    pub stacks: Vec<StackEntry>,
    pub actions: Vec<ActionEvent>,
    pub results: Vec<ShowdownResult>,
}

impl Replay {
    /// Render this hand as an ordered line sequence. Narration state is
    /// private to the call, so identical inputs always reproduce
    /// byte-identical output.
    pub fn narrate(&self, settings: &Settings) -> super::narrator::Transcript {
        super::narrator::Narrator::new(self, settings).run()
    }
}
