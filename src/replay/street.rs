/// Betting rounds in table order, plus the synthetic terminal street
/// used for the second run-it-twice board. Discriminants match the
/// event-log encoding.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Street {
    Pref = 1,
    Flop = 3,
    Turn = 4,
    Rive = 5,
    Show = 6,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive, Self::Show]
    }
    /// Streets that reveal community cards during normal play.
    pub const fn dealt() -> &'static [Self] {
        &[Self::Flop, Self::Turn, Self::Rive]
    }
    /// Header label for the board line.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::Rive => "River",
            Self::Show => "SECOND BOARD",
        }
    }
}

impl TryFrom<i64> for Street {
    type Error = anyhow::Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            6 => Ok(Self::Show),
            _ => Err(anyhow::anyhow!("invalid street encoding: {}", n)),
        }
    }
}
impl From<Street> for i64 {
    fn from(street: Street) -> i64 {
        street as i64
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
            Self::Show => write!(f, "showdown"),
        }
    }
}

use serde::Serialize;
