use super::board;
use super::chips;
use super::position::Position;
use super::records::{ActionEvent, Replay};
use super::settings::Settings;
use super::street::Street;
use super::verb::Verb;
use super::winners;
use crate::Chips;
use serde::Serialize;

const BULLET: &str = "•";
const SEPARATOR: &str = ", ";

/// One hand's rendered replay: a finite, one-shot sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript(Vec<String>);

impl Transcript {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl IntoIterator for Transcript {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

/// Ephemeral narration cursor, created fresh for every hand and
/// discarded after it.
struct Cursor {
    street: Option<Street>,
    position: Position,
    verb: Option<Verb>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            street: None,
            position: Position::NONE,
            verb: None,
        }
    }
}

/// Drives one hand's action stream through street transitions, board
/// reveals, and per-action formatting. Pure compute over the already
/// ordered record collections.
pub struct Narrator<'a> {
    replay: &'a Replay,
    settings: &'a Settings,
    cursor: Cursor,
    lines: Vec<String>,
    tail: String,
}

impl<'a> Narrator<'a> {
    pub fn new(replay: &'a Replay, settings: &'a Settings) -> Self {
        Self {
            replay,
            settings,
            cursor: Cursor::default(),
            lines: Vec::new(),
            tail: String::new(),
        }
    }

    pub fn run(mut self) -> Transcript {
        self.header();
        self.stacks();
        for event in self.replay.actions.iter() {
            self.action(event);
        }
        self.runout();
        self.winners();
        Transcript(self.lines)
    }

    /// Append text to the open line.
    fn put(&mut self, text: &str) {
        self.tail.push_str(text);
    }
    /// Close the open line, empty or not.
    fn feed(&mut self) {
        self.lines.push(std::mem::take(&mut self.tail));
    }

    fn header(&mut self) {
        let meta = &self.replay.meta;
        self.put(&format!(
            "Table: {} ({}); Hand: {}; bb: ${:.2}; Date: {}",
            meta.table,
            meta.name,
            meta.hand,
            meta.blind as f64 / 100.0,
            meta.time.format("%Y-%m-%d %H:%M"),
        ));
        self.feed();
    }

    /// Stacks line, button last without a trailing separator. Left open
    /// so the next block closes it.
    fn stacks(&mut self) {
        let blind = self.replay.meta.blind;
        let unit = self.settings.unit;
        self.put("Stacks: ");
        for entry in self.replay.stacks.iter() {
            self.put(&format!(
                "{} {}",
                entry.name,
                chips::amount(entry.stack, blind, unit)
            ));
            if entry.position != Position::BUTTON {
                self.put(SEPARATOR);
            }
        }
    }

    /// Board header for a street: closes the open line, leaves a blank
    /// line, and opens the header.
    fn board(&mut self, street: Street, pot: Chips) {
        self.feed();
        self.feed();
        self.put(&board::headline(
            street,
            &self.replay.meta,
            pot,
            self.settings.unit,
        ));
    }

    fn action(&mut self, event: &ActionEvent) {
        let cards = self.pocket(event);
        let position = match event.street {
            Street::Pref => format!("/{}", event.position.label()),
            _ => String::new(),
        };

        if Some(event.street) == self.cursor.street {
            if self.armed() {
                self.put(SEPARATOR);
            }
        } else {
            self.board(event.street, event.pot);
            self.feed();
            self.put(BULLET);
            self.cursor.street = Some(event.street);
            self.cursor.position = Position::NONE;
        }

        // wrap-around: action has come back to a player who already
        // acted this street, so a new wagering round begins
        if self.armed() && self.wrapped(event) {
            self.feed();
            self.put(BULLET);
        }

        self.cursor.position = event.position;
        self.cursor.verb = Some(event.verb.clone());

        if event.verb == Verb::Post {
            return;
        }

        self.put(&format!("{}{}{} {}", event.name, position, cards, event.verb));
        if event.verb.wagers() {
            self.put(&format!(
                " {}",
                chips::amount(event.net, self.replay.meta.blind, self.settings.unit)
            ));
        }
        if event.allin {
            self.put(" all-in");
        }
        if self.settings.required && self.priced(event) {
            self.put(&format!(
                " ({}% req)",
                chips::required_equity(event.to_call, event.pot)
            ));
        }
        if self.settings.advanced && event.verb.wagers() && event.street >= Street::Flop {
            self.put(&format!(
                " ({}% pot)",
                chips::wager_share(&event.verb, event.net, event.to_call, event.pot)
            ));
        }
    }

    /// A rendered verb has opened the current run of actions; posts and
    /// fresh streets leave the separator and wrap rules disarmed.
    fn armed(&self) -> bool {
        !matches!(self.cursor.verb, None | Some(Verb::Post))
    }

    /// Preflop, action wraps when it leaves the blind bands for the
    /// ordinary seats, or climbs within them; postflop, when it returns
    /// to a worse position than the last actor.
    fn wrapped(&self, event: &ActionEvent) -> bool {
        let last = self.cursor.position;
        let next = event.position;
        match event.street {
            Street::Pref => (last.blind() && next.seat()) || (last < next && next.seat()),
            _ => last < next,
        }
    }

    /// Required-equity annotations apply to calls, and to folds once
    /// the flop is out.
    fn priced(&self, event: &ActionEvent) -> bool {
        match event.verb {
            Verb::Call => true,
            Verb::Fold => event.street >= Street::Flop,
            _ => false,
        }
    }

    /// Hole-card bracket. Preflop (or always, with the show-cards
    /// flag): the hero's owner-visible cards win when self-reveal is
    /// on; anyone's publicly known cards otherwise.
    fn pocket(&self, event: &ActionEvent) -> String {
        if !(self.settings.show_cards || event.street == Street::Pref) {
            return String::new();
        }
        if self.settings.show_self && event.player == self.settings.hero {
            if let Some(hole) = &event.owned {
                return format!(" [{}]", hole);
            }
        }
        match &event.cards {
            Some(hole) => format!(" [{}]", hole),
            None => String::new(),
        }
    }

    /// Board text for streets skipped by an early all-in, then the
    /// second run-it-twice board if one was dealt. The pot suffix
    /// reuses the last recorded pot; later-street pot reconstruction is
    /// out of scope.
    fn runout(&mut self) {
        let last = self.cursor.street;
        let pot = self.replay.actions.last().map(|e| e.pot).unwrap_or(0);
        if last.is_none_or(|s| s < Street::Rive) && self.replay.meta.board.complete() {
            for street in Street::dealt().iter().copied() {
                if last.is_none_or(|s| s < street) {
                    self.board(street, pot);
                }
            }
        }
        if self.replay.meta.second.as_ref().is_some_and(|b| b.complete()) {
            self.board(Street::Show, pot);
        }
    }

    fn winners(&mut self) {
        self.feed();
        self.feed();
        for line in winners::block(
            &self.replay.results,
            self.replay.meta.blind,
            self.settings.unit,
        ) {
            self.put(&line);
            self.feed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Hole};
    use crate::replay::records::{Board, HandMeta, ShowdownResult, StackEntry};

    fn board(tokens: [&str; 5]) -> Board {
        Board::from(tokens.map(|t| (!t.is_empty()).then(|| Card::from(t))))
    }

    fn meta() -> HandMeta {
        HandMeta {
            table: 262,
            name: "Badger".to_string(),
            hand: 503,
            time: chrono::NaiveDateTime::parse_from_str("2022-07-09 16:47:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            players: 3,
            blind: 50,
            board: board(["2s", "7h", "Kd", "9c", "3d"]),
            second: None,
            effective: [0; 4],
        }
    }

    // three-handed fixture: CoreyL posts the small blind, MikeA the
    // big blind, WillJ has the button
    fn act(street: Street, position: u8, verb: Verb, net: Chips, pot: Chips, to_call: Chips) -> ActionEvent {
        let (player, name) = match position {
            30 => (1, "CoreyL"),
            20 => (2, "MikeA"),
            _ => (3, "WillJ"),
        };
        ActionEvent {
            street,
            number: 0,
            player,
            name: name.to_string(),
            verb,
            amount: net,
            net,
            allin: false,
            pot,
            to_call,
            position: Position::from(position),
            cards: None,
            owned: None,
        }
    }

    fn posts() -> Vec<ActionEvent> {
        vec![
            act(Street::Pref, 30, Verb::Post, 25, 0, 0),
            act(Street::Pref, 20, Verb::Post, 50, 25, 0),
        ]
    }

    fn replay(actions: Vec<ActionEvent>, results: Vec<ShowdownResult>) -> Replay {
        Replay {
            meta: meta(),
            stacks: vec![
                StackEntry {
                    name: "CoreyL".to_string(),
                    stack: 5000,
                    position: Position::from(30),
                },
                StackEntry {
                    name: "MikeA".to_string(),
                    stack: 5000,
                    position: Position::from(20),
                },
                StackEntry {
                    name: "WillJ".to_string(),
                    stack: 10000,
                    position: Position::from(1),
                },
            ],
            actions,
            results,
        }
    }

    fn winner(name: &str, balance: Chips, showdown: bool) -> ShowdownResult {
        ShowdownResult {
            name: name.to_string(),
            balance,
            cards: None,
            showdown,
            class: None,
        }
    }

    #[test]
    fn full_hand_transcript() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Raise, 150, 75, 50),
            act(Street::Pref, 30, Verb::Fold, 0, 225, 125),
            act(Street::Pref, 20, Verb::Call, 100, 225, 100),
            act(Street::Flop, 20, Verb::Check, 0, 325, 0),
            act(Street::Flop, 1, Verb::Bet, 162, 325, 0),
            act(Street::Flop, 20, Verb::Call, 162, 487, 162),
            act(Street::Turn, 20, Verb::Check, 0, 649, 0),
            act(Street::Turn, 1, Verb::Check, 0, 649, 0),
            act(Street::Rive, 20, Verb::Bet, 325, 649, 0),
            act(Street::Rive, 1, Verb::Fold, 0, 974, 325),
        ]);
        let replay = replay(actions, vec![winner("MikeA", 487, false)]);
        let transcript = replay.narrate(&Settings::default());
        let lines = transcript.lines().collect::<Vec<_>>();
        assert!(
            lines
                == vec![
                    "Table: 262 (Badger); Hand: 503; bb: $0.50; Date: 2022-07-09 16:47",
                    "Stacks: CoreyL 100.00 bb, MikeA 100.00 bb, WillJ 200.00 bb",
                    "",
                    "Preflop: 3 Players",
                    "•WillJ/BTN raises 3.00 bb, CoreyL/SB folds, MikeA/BB calls",
                    "",
                    "Flop (pot 6.50 bb): [2s, 7h, Kd]",
                    "•MikeA checks, WillJ bets 3.24 bb (49% pot), ",
                    "•MikeA calls",
                    "",
                    "Turn (pot 12.98 bb): 2s, 7h, Kd, [9c]",
                    "•MikeA checks, WillJ checks",
                    "",
                    "River (pot 12.98 bb): 2s, 7h, Kd, 9c, [3d]",
                    "•MikeA bets 6.50 bb (50% pot), WillJ folds",
                    "",
                    "MikeA wins 9.74 bb (no showdown)",
                ]
        );
    }

    #[test]
    fn folded_out_hand_is_one_line() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Raise, 150, 75, 50),
            act(Street::Pref, 30, Verb::Fold, 0, 225, 125),
            act(Street::Pref, 20, Verb::Fold, 0, 225, 100),
        ]);
        let replay = replay(actions, vec![winner("WillJ", 75, false)]);
        let transcript = replay.narrate(&Settings::default());
        let narrative = transcript
            .lines()
            .filter(|l| l.starts_with(BULLET))
            .collect::<Vec<_>>();
        assert!(narrative.len() == 1);
        assert!(narrative[0] == "•WillJ/BTN raises 3.00 bb, CoreyL/SB folds, MikeA/BB folds");
        let winners = transcript
            .lines()
            .filter(|l| l.contains("wins"))
            .collect::<Vec<_>>();
        assert!(winners.len() == 1);
        assert!(winners[0].ends_with("(no showdown)"));
    }

    #[test]
    fn repeat_narration_is_byte_identical() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Raise, 150, 75, 50),
            act(Street::Pref, 30, Verb::Fold, 0, 225, 125),
            act(Street::Pref, 20, Verb::Call, 100, 225, 100),
            act(Street::Flop, 20, Verb::Check, 0, 325, 0),
            act(Street::Flop, 1, Verb::Check, 0, 325, 0),
        ]);
        let replay = replay(actions, vec![winner("MikeA", 325, true)]);
        let settings = Settings::default();
        assert!(replay.narrate(&settings) == replay.narrate(&settings));
    }

    #[test]
    fn posts_are_mute_but_tracked() {
        let mut actions = posts();
        actions.push(act(Street::Pref, 1, Verb::Raise, 150, 75, 50));
        let replay = replay(actions, vec![]);
        let transcript = replay.narrate(&Settings::default());
        let text = transcript.to_string();
        assert!(!text.contains("posts"));
        // no separator carried over from the blind posts
        assert!(transcript.lines().any(|l| l == "•WillJ/BTN raises 3.00 bb"));
    }

    #[test]
    fn preflop_reraise_wraps_line() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Raise, 150, 75, 50),
            act(Street::Pref, 30, Verb::Fold, 0, 225, 125),
            act(Street::Pref, 20, Verb::Raise, 400, 225, 100),
            act(Street::Pref, 1, Verb::Call, 300, 625, 300),
        ]);
        let replay = replay(actions, vec![winner("MikeA", 625, true)]);
        let transcript = replay.narrate(&Settings::default());
        let lines = transcript.lines().collect::<Vec<_>>();
        assert!(lines.contains(
            &"•WillJ/BTN raises 3.00 bb, CoreyL/SB folds, MikeA/BB raises 8.00 bb, "
        ));
        assert!(lines.contains(&"•WillJ/BTN calls"));
    }

    #[test]
    fn early_allin_runs_out_board() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Call, 50, 75, 50),
            act(Street::Pref, 30, Verb::Call, 25, 125, 25),
            act(Street::Pref, 20, Verb::Check, 0, 150, 0),
            act(Street::Flop, 30, Verb::Bet, 4975, 150, 0),
            act(Street::Flop, 20, Verb::Call, 4975, 5125, 4975),
        ]);
        let mut allin = actions;
        allin[5].allin = true;
        allin[6].allin = true;
        let replay = replay(allin, vec![winner("CoreyL", 5150, true)]);
        let transcript = replay.narrate(&Settings::default());
        let lines = transcript.lines().collect::<Vec<_>>();
        assert!(
            lines
                .iter()
                .any(|l| l.contains("CoreyL bets 99.50 bb all-in (3316% pot), MikeA calls all-in"))
        );
        assert!(lines.contains(&"Turn (pot 102.50 bb): 2s, 7h, Kd, [9c]"));
        assert!(lines.contains(&"River (pot 102.50 bb): 2s, 7h, Kd, 9c, [3d]"));
    }

    #[test]
    fn second_board_always_reported() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Raise, 10000, 75, 50),
            act(Street::Pref, 30, Verb::Fold, 0, 10075, 9975),
            act(Street::Pref, 20, Verb::Call, 4950, 10075, 4950),
        ]);
        let mut replay = replay(actions, vec![winner("MikeA", 5025, true)]);
        replay.meta.second = Some(board(["2s", "7h", "Kd", "9c", "Jh"]));
        let transcript = replay.narrate(&Settings::default());
        let lines = transcript.lines().collect::<Vec<_>>();
        assert!(lines.contains(&"SECOND BOARD (pot 201.50 bb): 2s, 7h, Kd, 9c, [Jh]"));
    }

    #[test]
    fn empty_action_stream_still_runs_out() {
        let replay = replay(vec![], vec![]);
        let transcript = replay.narrate(&Settings::default());
        let lines = transcript.lines().collect::<Vec<_>>();
        assert!(lines.contains(&"Flop (pot 0.00 bb): [2s, 7h, Kd]"));
        assert!(lines.contains(&"Turn (pot 0.00 bb): 2s, 7h, Kd, [9c]"));
        assert!(lines.contains(&"River (pot 0.00 bb): 2s, 7h, Kd, 9c, [3d]"));
    }

    #[test]
    fn required_equity_annotations() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Raise, 150, 75, 50),
            act(Street::Pref, 30, Verb::Fold, 0, 225, 125),
            act(Street::Pref, 20, Verb::Call, 100, 225, 100),
            act(Street::Flop, 20, Verb::Check, 0, 325, 0),
            act(Street::Flop, 1, Verb::Bet, 162, 325, 0),
            act(Street::Flop, 20, Verb::Fold, 0, 487, 162),
        ]);
        let replay = replay(actions, vec![winner("WillJ", 325, false)]);
        let settings = Settings {
            required: true,
            ..Settings::default()
        };
        let transcript = replay.narrate(&settings);
        let text = transcript.to_string();
        // preflop call: 100 into 225 + 100
        assert!(text.contains("MikeA/BB calls (30% req)"));
        // postflop fold facing 162 into 487 + 162
        assert!(text.contains("MikeA folds (24% req)"));
        // preflop fold carries no annotation
        assert!(text.contains("CoreyL/SB folds,"));
        assert!(!text.contains("CoreyL/SB folds ("));
    }

    #[test]
    fn hero_cards_take_precedence() {
        let mut event = act(Street::Pref, 1, Verb::Raise, 150, 75, 50);
        event.cards = Some(Hole::from((Card::from("Ah"), Card::from("Ad"))));
        event.owned = Some(Hole::from((Card::from("Ks"), Card::from("Kc"))));
        let mut actions = posts();
        actions.push(event);
        let replay = replay(actions, vec![]);
        let hero = Settings {
            hero: 3,
            ..Settings::default()
        };
        assert!(
            replay
                .narrate(&hero)
                .to_string()
                .contains("WillJ/BTN [Ks, Kc] raises")
        );
        let hidden = Settings {
            hero: 3,
            show_self: false,
            ..Settings::default()
        };
        assert!(
            replay
                .narrate(&hidden)
                .to_string()
                .contains("WillJ/BTN [Ah, Ad] raises")
        );
    }

    #[test]
    fn postflop_cards_gated_by_flag() {
        let mut actions = posts();
        actions.extend([
            act(Street::Pref, 1, Verb::Call, 50, 75, 50),
            act(Street::Pref, 30, Verb::Fold, 0, 125, 25),
            act(Street::Pref, 20, Verb::Check, 0, 125, 0),
            act(Street::Flop, 20, Verb::Check, 0, 125, 0),
        ]);
        let index = actions.len() - 1;
        actions[index].cards = Some(Hole::from((Card::from("Ah"), Card::from("Ad"))));
        let replay = replay(actions, vec![]);
        assert!(
            !replay
                .narrate(&Settings::default())
                .to_string()
                .contains("MikeA [Ah, Ad]")
        );
        let settings = Settings {
            show_cards: true,
            ..Settings::default()
        };
        assert!(
            replay
                .narrate(&settings)
                .to_string()
                .contains("MikeA [Ah, Ad] checks")
        );
    }
}
