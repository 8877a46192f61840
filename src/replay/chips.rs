use super::verb::Verb;
use crate::Chips;

/// Display denomination for chip amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Blinds,
    Cash,
}

/// Format a chip amount in the chosen unit: big blinds to two decimals,
/// or minor currency units as dollars. A non-positive blind renders as
/// zero rather than failing.
pub fn amount(value: Chips, blind: Chips, unit: Unit) -> String {
    match unit {
        Unit::Blinds => match blind > 0 {
            true => format!("{:.2} bb", value as f64 / blind as f64),
            false => "0.00 bb".to_string(),
        },
        Unit::Cash => format!("${:.2}", value as f64 / 100.0),
    }
}

/// A wager as a whole-number percentage of the pot. Raises are measured
/// against the pot after a hypothetical call:
/// raise_% = (raise_amount - bet) / (bet + pot_before_bet).
/// Any non-positive denominator yields 0.
pub fn wager_share(verb: &Verb, net: Chips, to_call: Chips, pot: Chips) -> Chips {
    if pot <= 0 {
        return 0;
    }
    match verb {
        Verb::Raise => match to_call + pot > 0 {
            true => ((net - to_call) as f64 / (to_call + pot) as f64 * 100.0) as Chips,
            false => 0,
        },
        _ => (net as f64 / pot as f64 * 100.0) as Chips,
    }
}

/// Minimum win probability (whole-number percent) making a call
/// break-even given pot odds. Zero when nothing is at stake.
pub fn required_equity(to_call: Chips, pot: Chips) -> Chips {
    match pot + to_call > 0 {
        true => (to_call as f64 / (pot + to_call) as f64 * 100.0) as Chips,
        false => 0,
    }
}

use serde::{Deserialize, Serialize};
