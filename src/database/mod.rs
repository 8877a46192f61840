#![cfg(feature = "database")]

mod source;
pub use source::*;

use std::sync::Arc;
use tokio_postgres::Client;

// event-log table names
pub const HANDS: &str = "hands";
pub const TABLES: &str = "tablenames";
pub const PLAYER_HANDS: &str = "playerhands";
pub const PLAYER_NAMES: &str = "playernames";
pub const ACTIONS: &str = "actions";
pub const ACTION_NAMES: &str = "actionnames";
pub const PLAYER_STREETS: &str = "playerstreets";
pub const CLASS_NAMES: &str = "classnames";

/// Get a database connection and return the client.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    Arc::new(client)
}
