//! Print the configured owner's collection, or a single game, as JSON.
//!
//! Usage: cargo run --bin dump-catalog [game_id]
//!
//! Reads the same environment variables as the server.

use anyhow::{bail, Context};
use server::clients::geekdo::GeekdoClient;
use server::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let client = GeekdoClient::new(&config)?;

    let json = match std::env::args().nth(1) {
        Some(arg) => {
            let game_id: u64 = arg
                .parse()
                .with_context(|| format!("Invalid game id: {arg}"))?;
            match client.fetch_game(game_id).await? {
                Some(game) => serde_json::to_string_pretty(&game)?,
                None => bail!("Game not found."),
            }
        }
        None => {
            eprintln!("Fetching collection of {}...", config.owner);
            let games = client.fetch_collection().await?;
            eprintln!("Found {} games", games.len());
            serde_json::to_string_pretty(&games)?
        }
    };

    println!("{json}");
    Ok(())
}
