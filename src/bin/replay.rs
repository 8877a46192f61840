//! Replay Binary
//!
//! Narrates a recorded hand from the hand-history database.

use clap::Parser;
use colored::Colorize;
use railbird::database::Source;
use railbird::replay::{Settings, Unit};

#[derive(Parser)]
#[command(author, version, about = "Narrate a recorded hand from the hand-history database")]
struct Args {
    /// Table id of the hand to replay
    #[arg(long)]
    table: Option<i64>,
    /// Hand number within the table
    #[arg(long)]
    hand: Option<i64>,
    /// Show hole cards on every action, not just preflop
    #[arg(long)]
    cards: bool,
    /// Reveal this player's own hole cards
    #[arg(long)]
    hero: Option<i64>,
    /// Annotate calls and postflop folds with required equity
    #[arg(long)]
    req: bool,
    /// Display amounts in dollars instead of big blinds
    #[arg(long)]
    cash: bool,
    /// Emit the replay as a JSON array of lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    railbird::log();
    let args = Args::parse();
    let table = match args.table {
        Some(table) => table,
        None => dialoguer::Input::new().with_prompt("Table").interact_text()?,
    };
    let hand = match args.hand {
        Some(hand) => hand,
        None => dialoguer::Input::new().with_prompt("Hand").interact_text()?,
    };
    let settings = Settings {
        show_cards: args.cards,
        show_self: args.hero.is_some(),
        required: args.req,
        unit: match args.cash {
            true => Unit::Cash,
            false => Unit::Blinds,
        },
        hero: args.hero.unwrap_or(0),
        ..Settings::default()
    };
    let client = railbird::database::db().await;
    let replay = client.replay(table, hand).await?;
    let transcript = replay.narrate(&settings);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
        return Ok(());
    }
    println!(
        "{}",
        format!("********** Table {}, Hand {} **********", table, hand).bold()
    );
    println!("{}", transcript);
    Ok(())
}
