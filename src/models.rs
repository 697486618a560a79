//! Normalized draw records and the raw response envelopes they come from.

use serde::{Deserialize, Serialize};

/// One normalized lottery draw.
///
/// `numbers` holds the winning-number strings exactly as the upstream API
/// reports them: one or two groups for welfare games (red balls, plus blue
/// ball(s) when the game has them), a single result string for sports games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    /// Game name as reported upstream, e.g. "双色球".
    pub game: String,
    /// Draw code / issue identifier, e.g. "2023001".
    pub code: String,
    /// Draw date string as reported upstream.
    pub date: String,
    pub numbers: Vec<String>,
}

/// Response body of the welfare `findDrawNotice` endpoint.
#[derive(Debug, Deserialize)]
pub struct WelfareEnvelope {
    #[serde(default)]
    pub result: Vec<WelfareDraw>,
}

/// One element of a welfare response's `result` list.
///
/// `blue` and `blue2` come back as empty strings for games without the
/// corresponding ball group.
#[derive(Debug, Clone, Deserialize)]
pub struct WelfareDraw {
    pub name: String,
    pub code: String,
    pub date: String,
    #[serde(default)]
    pub red: String,
    #[serde(default)]
    pub blue: String,
    #[serde(default)]
    pub blue2: String,
}

impl WelfareDraw {
    pub fn into_record(self) -> DrawRecord {
        let mut numbers = vec![self.red];
        if !self.blue.is_empty() {
            numbers.push(self.blue);
        }
        if !self.blue2.is_empty() {
            numbers.push(self.blue2);
        }
        DrawRecord {
            game: self.name,
            code: self.code,
            date: self.date,
            numbers,
        }
    }
}

/// Response body of the sports `getHistoryPageListV1.qry` endpoint.
#[derive(Debug, Deserialize)]
pub struct SportsEnvelope {
    pub value: SportsValue,
}

#[derive(Debug, Deserialize)]
pub struct SportsValue {
    pub pages: u32,
    #[serde(default)]
    pub list: Vec<SportsDraw>,
}

/// One element of a sports response's `value.list`.
#[derive(Debug, Clone, Deserialize)]
pub struct SportsDraw {
    #[serde(rename = "lotteryGameName")]
    pub game_name: String,
    #[serde(rename = "lotteryDrawNum")]
    pub draw_num: String,
    #[serde(rename = "lotteryDrawTime")]
    pub draw_time: String,
    #[serde(rename = "lotteryDrawResult")]
    pub draw_result: String,
}

impl SportsDraw {
    pub fn into_record(self) -> DrawRecord {
        DrawRecord {
            game: self.game_name,
            code: self.draw_num,
            date: self.draw_time,
            numbers: vec![self.draw_result],
        }
    }
}
