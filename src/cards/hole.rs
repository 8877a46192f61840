use super::card::Card;

/// An ordered pair of fully known hole cards.
/// A pair with either card unknown does not exist at this level;
/// record decoding collapses partial pairs to None.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize)]
pub struct Hole(Card, Card);

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self(a, b)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, {}", self.0, self.1)
    }
}

use serde::Serialize;
