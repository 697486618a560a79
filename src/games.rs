//! Game definitions for the two Chinese lottery authorities.
//!
//! The welfare lottery (福彩) owns `ssq`, `qlc`, `kl8` and `3d`; the sports
//! lottery (体彩) owns `dlt`, `pls`, `plw` and `qxc`. Each game also carries
//! the static rule its random picks are drawn by.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LotteryError, Result};

/// One supported lottery game, identified by its conventional short name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    /// 双色球 — 6 from \[1,33\] plus 1 from \[1,16\]
    #[serde(rename = "ssq")]
    Ssq,
    /// 七乐彩 — 7 from \[1,30\] plus one held-out extra from the same draw
    #[serde(rename = "qlc")]
    Qlc,
    /// 快乐8 — 20 from \[1,80\]
    #[serde(rename = "kl8")]
    Kl8,
    /// 福彩3D — three independent digits
    #[serde(rename = "3d")]
    ThreeD,
    /// 大乐透 — 5 from \[1,35\] plus 2 from \[1,12\]
    #[serde(rename = "dlt")]
    Dlt,
    /// 排列3 — three independent digits
    #[serde(rename = "pls")]
    Pls,
    /// 排列5 — five independent digits
    #[serde(rename = "plw")]
    Plw,
    /// 7星彩 — five independent digits plus 1 from \[0,14\]
    #[serde(rename = "qxc")]
    Qxc,
}

/// Games served by the welfare lottery portal (www.cwl.gov.cn).
pub const WELFARE_GAMES: [Game; 4] = [Game::Ssq, Game::Qlc, Game::Kl8, Game::ThreeD];

/// Games served by the sports lottery portal (webapi.sporttery.cn).
pub const SPORTS_GAMES: [Game; 4] = [Game::Dlt, Game::Pls, Game::Plw, Game::Qxc];

impl Game {
    /// All eight supported games.
    pub fn all() -> [Game; 8] {
        [
            Game::Ssq,
            Game::Qlc,
            Game::Kl8,
            Game::ThreeD,
            Game::Dlt,
            Game::Pls,
            Game::Plw,
            Game::Qxc,
        ]
    }

    /// Conventional short name, as used in the welfare API's `name` parameter.
    pub fn short_name(&self) -> &'static str {
        match self {
            Game::Ssq => "ssq",
            Game::Qlc => "qlc",
            Game::Kl8 => "kl8",
            Game::ThreeD => "3d",
            Game::Dlt => "dlt",
            Game::Pls => "pls",
            Game::Plw => "plw",
            Game::Qxc => "qxc",
        }
    }

    pub fn is_welfare(&self) -> bool {
        WELFARE_GAMES.contains(self)
    }

    pub fn is_sports(&self) -> bool {
        SPORTS_GAMES.contains(self)
    }

    /// Numeric game code used by the sports API's `gameNo` parameter.
    /// `None` for welfare games.
    pub fn sports_game_no(&self) -> Option<&'static str> {
        match self {
            Game::Dlt => Some("85"),
            Game::Pls => Some("35"),
            Game::Plw => Some("350133"),
            Game::Qxc => Some("04"),
            _ => None,
        }
    }

    /// Earliest draw date the welfare API serves for this game.
    /// `None` for sports games, which are strictly page-based.
    pub fn earliest_draw_date(&self) -> Option<NaiveDate> {
        match self {
            // kl8 launched much later than the other three welfare games.
            Game::Kl8 => NaiveDate::from_ymd_opt(2020, 10, 28),
            Game::Ssq | Game::Qlc | Game::ThreeD => NaiveDate::from_ymd_opt(2013, 1, 1),
            _ => None,
        }
    }

    /// The rule this game's random picks are drawn by.
    pub fn pick_rule(&self) -> PickRule {
        match self {
            Game::Ssq => PickRule::Groups(&[
                GroupRule { count: 6, min: 1, max: 33 },
                GroupRule { count: 1, min: 1, max: 16 },
            ]),
            Game::Qlc => PickRule::SetWithHeldExtra { count: 7, max: 30 },
            Game::Kl8 => PickRule::Groups(&[GroupRule { count: 20, min: 1, max: 80 }]),
            Game::ThreeD | Game::Pls => PickRule::Digits(3),
            Game::Plw => PickRule::Digits(5),
            Game::Dlt => PickRule::Groups(&[
                GroupRule { count: 5, min: 1, max: 35 },
                GroupRule { count: 2, min: 1, max: 12 },
            ]),
            Game::Qxc => PickRule::DigitsWithExtra { digits: 5, extra_max: 14 },
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for Game {
    type Err = LotteryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ssq" => Ok(Game::Ssq),
            "qlc" => Ok(Game::Qlc),
            "kl8" => Ok(Game::Kl8),
            "3d" => Ok(Game::ThreeD),
            "dlt" => Ok(Game::Dlt),
            "pls" => Ok(Game::Pls),
            "plw" => Ok(Game::Plw),
            "qxc" => Ok(Game::Qxc),
            other => Err(LotteryError::UnsupportedGame {
                game: other.to_string(),
            }),
        }
    }
}

/// One without-replacement sample: `count` distinct numbers in `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRule {
    pub count: usize,
    pub min: u32,
    pub max: u32,
}

/// How one game's random pick is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickRule {
    /// Independent without-replacement groups, each sorted ascending.
    Groups(&'static [GroupRule]),
    /// Independent digit draws in \[0,9\], with replacement.
    Digits(usize),
    /// Independent digits plus one uniform draw in `[0, extra_max]`.
    DigitsWithExtra { digits: usize, extra_max: u32 },
    /// One unordered draw of `count + 1` distinct numbers from `[1, max]`;
    /// the last number drawn is held out as the extra (it is not resampled),
    /// the remaining `count` are sorted ascending.
    SetWithHeldExtra { count: usize, max: u32 },
}

#[cfg(test)]
mod tests;
