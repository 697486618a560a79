//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use lotterycn::{
    cli::{Commands, LotteryCn},
    commands::{
        history::{handle_history, HistoryParams},
        random::handle_random,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = LotteryCn::parse();

    match app.command {
        Commands::History {
            game,
            begin,
            end,
            sleep_ms,
            timeout_secs,
            proxy,
            json,
            verbose,
        } => {
            handle_history(HistoryParams {
                game,
                begin,
                end,
                sleep_ms,
                timeout_secs,
                proxy,
                as_json: json,
                verbose,
            })
            .await?
        }

        Commands::Random { game, amount, json } => handle_random(game, amount, json)?,
    }

    Ok(())
}
