//! Chinese Lottery Data Client
//!
//! A Rust library for retrieving historical draw results from the two Chinese
//! government lottery portals — the China Welfare Lottery (福彩) and the China
//! Sports Lottery (体彩) — and for generating random lottery picks that
//! conform to each game's number-selection rules.
//!
//! ## Features
//!
//! - **Draw History Retrieval**: Fetch complete draw histories over HTTP,
//!   split into date windows (welfare) or result pages (sports) to respect
//!   upstream per-request limits
//! - **Session Handling**: Browser-emulating headers and a cookie handshake
//!   against each portal, established once and reused across fetches
//! - **Random Picks**: Uniform without-replacement sampling per game rule,
//!   from 双色球 red/blue groups to 排列5 independent digits
//! - **Self-Throttling**: A configurable (by default random sub-second) sleep
//!   after every request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lotterycn::{ChinaLottery, FetchOptions, Game};
//!
//! # async fn example() -> lotterycn::Result<()> {
//! let mut lottery = ChinaLottery::new();
//!
//! // Full 双色球 history, from its earliest available date through today.
//! let records = lottery
//!     .fetch_history(Game::Ssq, None, None, &FetchOptions::default())
//!     .await?;
//! println!("{} draws", records.len());
//!
//! // Five random 大乐透 picks.
//! for pick in lotterycn::random_picks(Game::Dlt, 5)? {
//!     println!("{pick}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod core;
pub mod error;
pub mod games;
pub mod models;
pub mod picks;

// Re-export commonly used types
pub use client::{ChinaLottery, FetchOptions, SportsLotteryClient, WelfareLotteryClient};
pub use error::{LotteryError, Result};
pub use games::Game;
pub use models::DrawRecord;
pub use picks::{random_picks, RandomPick};
