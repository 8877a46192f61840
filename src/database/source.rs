use super::*;
use crate::cards::{Card, Hole, Rank, Suit};
use crate::replay::{
    ActionEvent, Board, HandMeta, Position, Replay, ShowdownResult, StackEntry, Street, Verb,
};
use anyhow::Context;
use anyhow::Result;
use chrono::NaiveDateTime;
use const_format::concatcp;
use tokio_postgres::Client;
use tokio_postgres::Row;

/// Source defines the read interface between the replay records and
/// PostgreSQL. All SELECT queries are consolidated here, decoupling
/// SQL from narration. Numeric columns are BIGINT, names TEXT, and
/// hand timestamps TEXT in `YYYY-MM-DD HH:MM:SS`.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    async fn meta(&self, table: i64, hand: i64) -> Result<HandMeta>;
    async fn stacks(&self, table: i64, hand: i64) -> Result<Vec<StackEntry>>;
    async fn actions(&self, table: i64, hand: i64) -> Result<Vec<ActionEvent>>;
    async fn results(&self, table: i64, hand: i64) -> Result<Vec<ShowdownResult>>;

    /// The four record collections for one hand key. A failure on any
    /// collection fails the whole hand; no partial replay is built.
    async fn replay(&self, table: i64, hand: i64) -> Result<Replay> {
        Ok(Replay {
            meta: self.meta(table, hand).await?,
            stacks: self.stacks(table, hand).await?,
            actions: self.actions(table, hand).await?,
            results: self.results(table, hand).await?,
        })
    }
}

#[rustfmt::skip]
#[async_trait::async_trait]
impl Source for Client {
    async fn meta(&self, table: i64, hand: i64) -> Result<HandMeta> {
        const SQL: &str = concatcp!(
            "SELECT h.time, h.table_id, t.table_name, h.hand_num, h.num_players, h.bb_amt, ",
                   "h.fc1_val, h.fc2_val, h.fc3_val, h.tc_val, h.rc_val, ",
                   "h.fc1_suit, h.fc2_suit, h.fc3_suit, h.tc_suit, h.rc_suit, ",
                   "h.f2c1_val, h.f2c2_val, h.f2c3_val, h.t2c_val, h.r2c_val, ",
                   "h.f2c1_suit, h.f2c2_suit, h.f2c3_suit, h.t2c_suit, h.r2c_suit, ",
                   "h.eff_pf, h.eff_flop, h.eff_turn, h.eff_river ",
            "FROM   ", HANDS, " h ",
            "JOIN   ", TABLES, " t USING (table_id) ",
            "WHERE  h.table_id = $1 ",
            "AND    h.hand_num = $2"
        );
        let row = self
            .query_opt(SQL, &[&table, &hand])
            .await?
            .ok_or_else(|| anyhow::anyhow!("no hand record for table {} hand {}", table, hand))?;
        let time = row.get::<_, String>(0);
        let time = NaiveDateTime::parse_from_str(&time, "%Y-%m-%d %H:%M:%S")
            .with_context(|| format!("unparseable hand time: {}", time))?;
        let primary = board(&row, 6);
        let second = board(&row, 16);
        Ok(HandMeta {
            table: row.get(1),
            name: row.get(2),
            hand: row.get(3),
            time,
            players: row.get(4),
            blind: row.get(5),
            board: primary,
            second: match second == Board::default() {
                true => None,
                false => Some(second),
            },
            effective: [
                row.get::<_, Option<i64>>(26).unwrap_or(0),
                row.get::<_, Option<i64>>(27).unwrap_or(0),
                row.get::<_, Option<i64>>(28).unwrap_or(0),
                row.get::<_, Option<i64>>(29).unwrap_or(0),
            ],
        })
    }

    async fn stacks(&self, table: i64, hand: i64) -> Result<Vec<StackEntry>> {
        const SQL: &str = concatcp!(
            "SELECT   first_name || substr(last_name, 1, 1) AS full_name, ",
                     "stack, ",
                     "pos ",
            "FROM     ", PLAYER_HANDS, " ",
            "JOIN     ", PLAYER_NAMES, " USING (player_id) ",
            "WHERE    table_id = $1 ",
            "AND      hand_num = $2 ",
            "ORDER BY pos DESC"
        );
        self.query(SQL, &[&table, &hand])
            .await?
            .into_iter()
            .map(|row| {
                Ok(StackEntry {
                    name: row.get(0),
                    stack: row.get(1),
                    position: Position::from(row.get::<_, i64>(2) as u8),
                })
            })
            .collect()
    }

    async fn actions(&self, table: i64, hand: i64) -> Result<Vec<ActionEvent>> {
        const SQL: &str = concatcp!(
            "SELECT   street, action_num, player_id, ",
                     "first_name || substr(last_name, 1, 1) AS full_name, ",
                     "action_name, amount, net_amount, allin_flag, pot, to_call, pos, ",
                     "card1_val, card2_val, card1_suit, card2_suit, ",
                     "own_c1_val, own_c2_val, own_c1_suit, own_c2_suit ",
            "FROM     ", ACTIONS, " ",
            "JOIN     ", PLAYER_NAMES, " USING (player_id) ",
            "JOIN     ", ACTION_NAMES, " USING (action_id) ",
            "JOIN     ", PLAYER_HANDS, " USING (table_id, hand_num, player_id) ",
            "WHERE    table_id = $1 ",
            "AND      hand_num = $2 ",
            "ORDER BY action_num"
        );
        self.query(SQL, &[&table, &hand])
            .await?
            .into_iter()
            .map(|row| {
                Ok(ActionEvent {
                    street: Street::try_from(row.get::<_, i64>(0))?,
                    number: row.get(1),
                    player: row.get(2),
                    name: row.get(3),
                    verb: Verb::from(row.get::<_, String>(4).as_str()),
                    amount: row.get(5),
                    net: row.get(6),
                    allin: row.get::<_, i64>(7) != 0,
                    pot: row.get(8),
                    to_call: row.get(9),
                    position: Position::from(row.get::<_, i64>(10) as u8),
                    cards: pocket(&row, 11),
                    owned: pocket(&row, 15),
                })
            })
            .collect()
    }

    async fn results(&self, table: i64, hand: i64) -> Result<Vec<ShowdownResult>> {
        // the lateral subquery finds the latest street on which the
        // player's hand class was known
        const SQL: &str = concatcp!(
            "SELECT   first_name || substr(last_name, 1, 1) AS full_name, ",
                     "ph.balance, ",
                     "ph.card1_val, ph.card2_val, ph.card1_suit, ph.card2_suit, ",
                     "ph.saw_sd, c.class_name ",
            "FROM     ", PLAYER_HANDS, " ph ",
            "JOIN     ", PLAYER_NAMES, " USING (player_id) ",
            "LEFT JOIN LATERAL ( ",
                "SELECT   ps.class_id ",
                "FROM     ", PLAYER_STREETS, " ps ",
                "WHERE    ps.table_id  = ph.table_id ",
                "AND      ps.hand_num  = ph.hand_num ",
                "AND      ps.player_id = ph.player_id ",
                "AND      ps.class_id IS NOT NULL ",
                "ORDER BY ps.street DESC ",
                "LIMIT    1 ",
            ") latest ON TRUE ",
            "LEFT JOIN ", CLASS_NAMES, " c ON c.class_id = latest.class_id ",
            "WHERE    ph.table_id = $1 ",
            "AND      ph.hand_num = $2 ",
            "ORDER BY ph.balance"
        );
        self.query(SQL, &[&table, &hand])
            .await?
            .into_iter()
            .map(|row| {
                Ok(ShowdownResult {
                    name: row.get(0),
                    balance: row.get(1),
                    cards: pocket(&row, 2),
                    showdown: row.get::<_, i64>(6) != 0,
                    class: row.get(7),
                })
            })
            .collect()
    }
}

/// A fully known card from a (value, suit) column pair; partial or
/// out-of-range codes decode as unknown rather than failing the hand.
fn slot(value: Option<i64>, suit: Option<i64>) -> Option<Card> {
    match (value, suit) {
        (Some(v @ 0..=12), Some(s @ 0..=3)) => {
            Some(Card::from((Rank::from(v as u8), Suit::from(s as u8))))
        }
        _ => None,
    }
}

/// Five board slots laid out as value columns then suit columns
/// starting at `index`.
fn board(row: &Row, index: usize) -> Board {
    Board::from(std::array::from_fn(|i| {
        slot(row.get(index + i), row.get(index + 5 + i))
    }))
}

/// A hole pair laid out as (c1_val, c2_val, c1_suit, c2_suit) starting
/// at `index`. Both cards must decode for the pair to exist.
fn pocket(row: &Row, index: usize) -> Option<Hole> {
    let first = slot(row.get(index), row.get(index + 2))?;
    let second = slot(row.get(index + 1), row.get(index + 3))?;
    Some(Hole::from((first, second)))
}
