//! `history` command: fetch and print one game's draw history.

use std::time::Duration;

use chrono::NaiveDate;

use crate::client::{ChinaLottery, FetchOptions};
use crate::error::Result;
use crate::games::Game;

pub struct HistoryParams {
    pub game: Game,
    pub begin: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub sleep_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub proxy: Option<String>,
    pub as_json: bool,
    pub verbose: bool,
}

pub async fn handle_history(params: HistoryParams) -> Result<()> {
    let options = FetchOptions {
        timeout: params.timeout_secs.map(Duration::from_secs),
        proxy: params.proxy,
        sleep: params.sleep_ms.map(Duration::from_millis),
    };

    if params.verbose {
        println!("Downloading <{}> draw history...", params.game);
    }

    let mut lottery = ChinaLottery::new();
    let records = lottery
        .fetch_history(params.game, params.begin, params.end, &options)
        .await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!(
                "{}\t{}\t{}\t{}",
                record.game,
                record.code,
                record.date,
                record.numbers.join(" | ")
            );
        }
    }

    if params.verbose {
        println!("{} draws fetched", records.len());
    }
    Ok(())
}
