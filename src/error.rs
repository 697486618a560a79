//! Error types for the Chinese lottery data client

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LotteryError>;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Unsupported lottery game: {game}")]
    UnsupportedGame { game: String },

    #[error("Invalid date range: begin {begin} must not be after end {end} or after today")]
    InvalidRange { begin: NaiveDate, end: NaiveDate },

    #[error("Invalid pick amount: {amount} (must be at least 1)")]
    InvalidAmount { amount: usize },
}
