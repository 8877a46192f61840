/// Numeric seat encoding counted from the button. Ordinary seats are
/// small integers (button = 1); blind roles live in higher bands
/// (straddle < big blind < small blind) so that plain numeric
/// comparison still ranks the worst position highest.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position(u8);

impl Position {
    pub const STRADDLE: u8 = 10;
    pub const BIG: u8 = 20;
    pub const SMALL: u8 = 30;

    /// Sentinel beyond all real positions. Fresh streets start here.
    pub const NONE: Self = Self(u8::MAX);
    pub const BUTTON: Self = Self(1);

    /// Ordinary (non-blind) seat.
    pub const fn seat(&self) -> bool {
        self.0 < Self::STRADDLE
    }
    /// Any of the blind bands, straddle included.
    pub const fn blind(&self) -> bool {
        self.0 >= Self::STRADDLE
    }

    /// Preflop seat label. Blind bands take their role name; ordinary
    /// seats are named by distance from the button.
    pub fn label(&self) -> String {
        if self.0 >= Self::SMALL {
            "SB".to_string()
        } else if self.0 >= Self::BIG {
            "BB".to_string()
        } else if self.0 >= Self::STRADDLE {
            "Straddle".to_string()
        } else {
            match self.0 {
                1 => "BTN".to_string(),
                2 => "CO".to_string(),
                3 => "HJ".to_string(),
                n => format!("UTG{}", n + 2),
            }
        }
    }
}

impl From<u8> for Position {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Position> for u8 {
    fn from(p: Position) -> u8 {
        p.0
    }
}

use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_labels() {
        assert!(Position::from(1).label() == "BTN");
        assert!(Position::from(2).label() == "CO");
        assert!(Position::from(3).label() == "HJ");
        assert!(Position::from(4).label() == "UTG6");
        assert!(Position::from(8).label() == "UTG10");
    }

    #[test]
    fn blind_labels() {
        assert!(Position::from(Position::STRADDLE).label() == "Straddle");
        assert!(Position::from(Position::BIG).label() == "BB");
        assert!(Position::from(Position::SMALL).label() == "SB");
        assert!(Position::from(31).label() == "SB");
    }

    #[test]
    fn worst_position_ranks_highest() {
        assert!(Position::from(Position::SMALL) > Position::from(Position::BIG));
        assert!(Position::from(Position::BIG) > Position::from(Position::STRADDLE));
        assert!(Position::from(Position::STRADDLE) > Position::from(9));
        assert!(Position::NONE > Position::from(Position::SMALL));
    }

    #[test]
    fn bands() {
        assert!(Position::from(9).seat());
        assert!(!Position::from(Position::STRADDLE).seat());
        assert!(Position::from(Position::STRADDLE).blind());
        assert!(!Position::BUTTON.blind());
    }
}
