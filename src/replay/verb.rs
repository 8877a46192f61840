/// What a player did. Labels outside the known set pass through
/// verbatim rather than failing the hand.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize)]
pub enum Verb {
    Post,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Other(String),
}

impl Verb {
    /// Bets and raises carry their amount in the narration.
    pub const fn wagers(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise)
    }
}

impl From<&str> for Verb {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "posts" => Self::Post,
            "folds" => Self::Fold,
            "checks" => Self::Check,
            "calls" => Self::Call,
            "bets" => Self::Bet,
            "raises" => Self::Raise,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Post => write!(f, "posts"),
            Self::Fold => write!(f, "folds"),
            Self::Check => write!(f, "checks"),
            Self::Call => write!(f, "calls"),
            Self::Bet => write!(f, "bets"),
            Self::Raise => write!(f, "raises"),
            Self::Other(label) => write!(f, "{}", label),
        }
    }
}

use serde::Serialize;
