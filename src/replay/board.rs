use super::chips;
use super::chips::Unit;
use super::records::HandMeta;
use super::street::Street;
use crate::Chips;

/// Community-card display text for one street: cards already shown on
/// earlier streets (`prior`, trailing separator included) and the cards
/// revealed now (`fresh`). Derived from the boards alone, so revealing
/// street by street and jumping straight to a later street agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reveal {
    pub prior: String,
    pub fresh: String,
}

impl Reveal {
    pub fn at(street: Street, meta: &HandMeta) -> Self {
        let board = &meta.board;
        match street {
            Street::Pref => Self::default(),
            Street::Flop => Self {
                prior: String::new(),
                fresh: format!("{}, {}, {}", board.token(0), board.token(1), board.token(2)),
            },
            Street::Turn => Self {
                prior: format!(
                    "{}, {}, {}, ",
                    board.token(0),
                    board.token(1),
                    board.token(2)
                ),
                fresh: board.token(3),
            },
            Street::Rive => Self {
                prior: format!(
                    "{}, {}, {}, {}, ",
                    board.token(0),
                    board.token(1),
                    board.token(2),
                    board.token(3)
                ),
                fresh: board.token(4),
            },
            Street::Show => match &meta.second {
                None => Self::default(),
                Some(second) => {
                    // shared cards accumulate left, divergent run-out right
                    let mut prior = String::new();
                    let mut fresh = String::new();
                    for index in 0..5 {
                        if board.get(index) == second.get(index) {
                            prior += &format!("{}, ", board.token(index));
                        } else {
                            fresh += &format!("{}, ", second.token(index));
                        }
                    }
                    if fresh.len() >= 2 {
                        fresh.truncate(fresh.len() - 2);
                    }
                    Self { prior, fresh }
                }
            },
        }
    }
}

/// Full board header line: street label, pot and effective-stack
/// suffix from the flop on, player count preflop, and the
/// `prior[fresh]` card text.
pub fn headline(street: Street, meta: &HandMeta, pot: Chips, unit: Unit) -> String {
    let mut line = street.label().to_string();
    if street >= Street::Flop {
        let mut suffix = format!("pot {}", chips::amount(pot, meta.blind, unit));
        let effective = meta.effective(street);
        if effective != 0 {
            suffix += &format!("; eff {}", chips::amount(effective, meta.blind, unit));
        }
        line += &format!(" ({})", suffix);
    }
    line += ": ";
    if street == Street::Pref {
        line += &format!("{} Players", meta.players);
    }
    if street >= Street::Flop {
        let reveal = Reveal::at(street, meta);
        line += &format!("{}[{}]", reveal.prior, reveal.fresh);
    }
    line
}
