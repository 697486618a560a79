//! CLI argument definitions and parsing.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::games::Game;

#[derive(Debug, Parser)]
#[clap(name = "lotterycn", about = "Chinese lottery draw history and random picks")]
pub struct LotteryCn {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the historical draw results of one game.
    ///
    /// Welfare games (ssq, qlc, kl8, 3d) honor --begin/--end; sports games
    /// (dlt, pls, plw, qxc) are page-based upstream and always return the
    /// full available history.
    History {
        /// Game short name: ssq, qlc, kl8, 3d, dlt, pls, plw or qxc.
        #[clap(long, short, value_parser = clap::value_parser!(Game))]
        game: Game,

        /// First draw date, YYYY-MM-DD (default: the game's earliest available date).
        #[clap(long, short)]
        begin: Option<NaiveDate>,

        /// Last draw date, YYYY-MM-DD (default: today).
        #[clap(long, short)]
        end: Option<NaiveDate>,

        /// Fixed delay between requests, in milliseconds (default: random sub-second).
        #[clap(long)]
        sleep_ms: Option<u64>,

        /// Per-request timeout, in seconds (default: none).
        #[clap(long)]
        timeout_secs: Option<u64>,

        /// Proxy URL for all requests.
        #[clap(long)]
        proxy: Option<String>,

        /// Output records as JSON instead of tab-separated lines.
        #[clap(long)]
        json: bool,

        /// Print progress information.
        #[clap(long)]
        verbose: bool,
    },

    /// Generate random picks for one game.
    Random {
        /// Game short name: ssq, qlc, kl8, 3d, dlt, pls, plw or qxc.
        #[clap(long, short, value_parser = clap::value_parser!(Game))]
        game: Game,

        /// How many picks to generate.
        #[clap(long, short, default_value_t = 1)]
        amount: usize,

        /// Output picks as JSON instead of one line per pick.
        #[clap(long)]
        json: bool,
    },
}
