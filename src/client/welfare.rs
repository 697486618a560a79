//! Client for the China Welfare Lottery portal (www.cwl.gov.cn).
//!
//! The `findDrawNotice` endpoint caps each request at a fixed date span, so
//! a history fetch walks the requested range in date windows, one GET per
//! window, sleeping between requests.

use chrono::{Local, NaiveDate};
use reqwest::Client;
use serde_json::Value;

use crate::client::{build_http_client, throttle, FetchOptions};
use crate::core::http::{api_headers, host_headers};
use crate::core::window::date_windows;
use crate::error::{LotteryError, Result};
use crate::games::Game;
use crate::models::{DrawRecord, WelfareDraw};

const CWL_HOST_URL: &str = "http://www.cwl.gov.cn";
const CWL_API_URL: &str = "http://www.cwl.gov.cn/cwl_admin/front/cwlkj/search/kjxx/findDrawNotice";

/// Maximum date span the API accepts per request, in days.
const CWL_MAX_BATCH_DAYS: u64 = 99;

/// Date-windowed history client for the four welfare games
/// (ssq, qlc, kl8, 3d).
///
/// The HTTP session (cookie handshake against the host page) is established
/// once, either explicitly via [`connect`](Self::connect) or lazily on the
/// first fetch, and reused by every later fetch on the same instance.
#[derive(Debug, Default)]
pub struct WelfareLotteryClient {
    http: Option<Client>,
}

impl WelfareLotteryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish the HTTP session if not yet connected.
    pub async fn connect(&mut self, options: &FetchOptions) -> Result<()> {
        self.session(options).await.map(|_| ())
    }

    /// Fetch all draws of `game` in `[begin, end]`, ascending by draw code.
    ///
    /// `begin` is clamped to the game's earliest available date and `end` to
    /// today. Fails with [`LotteryError::UnsupportedGame`] for sports games
    /// and [`LotteryError::InvalidRange`] when `begin` is after `end` or in
    /// the future. Transport and decode errors propagate; a failing window
    /// aborts the whole fetch.
    pub async fn fetch_history(
        &mut self,
        game: Game,
        begin: NaiveDate,
        end: NaiveDate,
        options: &FetchOptions,
    ) -> Result<Vec<DrawRecord>> {
        let items = self.fetch_all(game, begin, end, options).await?;
        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let draw: WelfareDraw = serde_json::from_value(item)?;
            records.push(draw.into_record());
        }
        records.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(records)
    }

    /// Like [`fetch_history`](Self::fetch_history), but returns the raw JSON
    /// elements of each window's `result` list, in chronological order,
    /// without projecting them into [`DrawRecord`]s.
    pub async fn fetch_history_detail(
        &mut self,
        game: Game,
        begin: NaiveDate,
        end: NaiveDate,
        options: &FetchOptions,
    ) -> Result<Vec<Value>> {
        self.fetch_all(game, begin, end, options).await
    }

    /// Validate, clamp, window and fetch. Each window's items arrive
    /// newest-first and are reversed back to ascending before aggregation.
    async fn fetch_all(
        &mut self,
        game: Game,
        begin: NaiveDate,
        end: NaiveDate,
        options: &FetchOptions,
    ) -> Result<Vec<Value>> {
        let today = Local::now().date_naive();
        let (begin, end) = clamp_range(game, begin, end, today)?;
        let http = self.session(options).await?;

        let mut items = Vec::new();
        for window in date_windows(begin, end, CWL_MAX_BATCH_DAYS)? {
            let body = Self::fetch_window(&http, game, window.begin, window.end, options).await?;
            items.extend(window_items(body)?.into_iter().rev());
        }
        Ok(items)
    }

    async fn fetch_window(
        http: &Client,
        game: Game,
        begin: NaiveDate,
        end: NaiveDate,
        options: &FetchOptions,
    ) -> Result<Value> {
        let params = [
            ("name", game.short_name().to_string()),
            ("dayStart", begin.to_string()),
            ("dayEnd", end.to_string()),
            ("issueCount", String::new()),
            ("issueStart", String::new()),
            ("issueEnd", String::new()),
        ];
        let body: Value = http
            .get(CWL_API_URL)
            .query(&params)
            .headers(api_headers(CWL_API_URL)?)
            .send()
            .await?
            .json()
            .await?;
        throttle(options).await;
        Ok(body)
    }

    /// Return the session, performing the host-page cookie handshake on
    /// first use. The handshake body is discarded.
    async fn session(&mut self, options: &FetchOptions) -> Result<Client> {
        if let Some(http) = &self.http {
            return Ok(http.clone());
        }
        let http = build_http_client(options)?;
        http.get(CWL_HOST_URL)
            .headers(host_headers(CWL_HOST_URL)?)
            .send()
            .await?;
        self.http = Some(http.clone());
        Ok(http)
    }
}

/// Pull the `result` list out of a response body.
fn window_items(mut body: Value) -> Result<Vec<Value>> {
    match body.get_mut("result") {
        Some(list) => Ok(serde_json::from_value(list.take())?),
        None => Ok(Vec::new()),
    }
}

/// Validate the requested range and clamp it to what the API can serve:
/// `begin` no earlier than the game's first draw, `end` no later than
/// `today`. A range lying entirely before the first draw collapses to the
/// earliest available date rather than failing.
fn clamp_range(
    game: Game,
    begin: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate)> {
    if !game.is_welfare() {
        return Err(LotteryError::UnsupportedGame {
            game: game.to_string(),
        });
    }
    if begin > end || begin > today {
        return Err(LotteryError::InvalidRange { begin, end });
    }
    let begin = match game.earliest_draw_date() {
        Some(earliest) => begin.max(earliest),
        None => begin,
    };
    let end = end.min(today).max(begin);
    Ok((begin, end))
}
