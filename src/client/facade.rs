//! Combined facade over both lottery portals.

use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::client::{FetchOptions, SportsLotteryClient, WelfareLotteryClient};
use crate::error::Result;
use crate::games::Game;
use crate::models::DrawRecord;
use crate::picks::{random_picks, RandomPick};

/// One retrieval entry point for all eight games.
///
/// Holds one client per portal and dispatches by game ownership. Each inner
/// client keeps its own session state, so fetching from both authorities
/// through one facade reuses at most two HTTP sessions.
#[derive(Debug, Default)]
pub struct ChinaLottery {
    welfare: WelfareLotteryClient,
    sports: SportsLotteryClient,
}

impl ChinaLottery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the draw history of `game`, ascending chronologically.
    ///
    /// For welfare games, `begin` defaults to the game's earliest available
    /// date and `end` to today. For sports games the upstream API is
    /// strictly page-based, so both date arguments are ignored and the full
    /// history is fetched.
    pub async fn fetch_history(
        &mut self,
        game: Game,
        begin: Option<NaiveDate>,
        end: Option<NaiveDate>,
        options: &FetchOptions,
    ) -> Result<Vec<DrawRecord>> {
        if game.is_welfare() {
            let (begin, end) = welfare_range(game, begin, end);
            self.welfare.fetch_history(game, begin, end, options).await
        } else {
            self.sports.fetch_history(game, options).await
        }
    }

    /// Raw-JSON variant of [`fetch_history`](Self::fetch_history).
    pub async fn fetch_history_detail(
        &mut self,
        game: Game,
        begin: Option<NaiveDate>,
        end: Option<NaiveDate>,
        options: &FetchOptions,
    ) -> Result<Vec<Value>> {
        if game.is_welfare() {
            let (begin, end) = welfare_range(game, begin, end);
            self.welfare
                .fetch_history_detail(game, begin, end, options)
                .await
        } else {
            self.sports.fetch_history_detail(game, options).await
        }
    }

    /// Generate `amount` random picks for `game`. No network involved.
    pub fn random_picks(&self, game: Game, amount: usize) -> Result<Vec<RandomPick>> {
        random_picks(game, amount)
    }
}

fn welfare_range(
    game: Game,
    begin: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> (NaiveDate, NaiveDate) {
    let today = Local::now().date_naive();
    let begin = begin.or_else(|| game.earliest_draw_date()).unwrap_or(today);
    (begin, end.unwrap_or(today))
}
