use super::chips;
use super::chips::Unit;
use super::records::ShowdownResult;
use crate::Chips;

/// Winners block: one line per player who finished the hand up,
/// in the order the results were supplied. Losing and break-even
/// rows are omitted.
pub fn block(results: &[ShowdownResult], blind: Chips, unit: Unit) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.balance > 0)
        .map(|r| {
            let cards = r
                .cards
                .map(|hole| format!(" [{}]", hole))
                .unwrap_or_default();
            let class = r
                .class
                .as_ref()
                .map(|name| format!(" with a {}", name))
                .unwrap_or_default();
            let showdown = match r.showdown {
                true => "",
                false => " (no showdown)",
            };
            format!(
                "{}{} wins {}{}{}",
                r.name,
                cards,
                chips::amount(r.balance, blind, unit),
                class,
                showdown
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Hole};

    fn result(name: &str, balance: Chips) -> ShowdownResult {
        ShowdownResult {
            name: name.to_string(),
            balance,
            cards: None,
            showdown: true,
            class: None,
        }
    }

    #[test]
    fn losers_omitted() {
        let results = vec![result("MikeA", -500), result("WillJ", 500), result("CoreyL", 0)];
        let lines = block(&results, 50, Unit::Blinds);
        assert!(lines.len() == 1);
        assert!(lines[0] == "WillJ wins 10.00 bb");
    }

    #[test]
    fn showdown_class() {
        let mut winner = result("WillJ", 500);
        winner.cards = Some(Hole::from((Card::from("Ah"), Card::from("Ad"))));
        winner.class = Some("Pair".to_string());
        let lines = block(&[winner], 50, Unit::Blinds);
        assert!(lines[0] == "WillJ [Ah, Ad] wins 10.00 bb with a Pair");
    }

    #[test]
    fn uncontested_pot() {
        let mut winner = result("MikeA", 150);
        winner.showdown = false;
        let lines = block(&[winner], 50, Unit::Cash);
        assert!(lines[0] == "MikeA wins $1.50 (no showdown)");
    }

    #[test]
    fn stable_order_on_ties() {
        let results = vec![result("MikeA", 250), result("WillJ", 250)];
        let lines = block(&results, 50, Unit::Blinds);
        assert!(lines[0].starts_with("MikeA"));
        assert!(lines[1].starts_with("WillJ"));
    }
}
