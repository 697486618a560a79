//! Client for the China Sports Lottery portal (webapi.sporttery.cn).
//!
//! The history endpoint is strictly page-based: callers cannot select a date
//! window. Total page count is discovered once via a probe request and then
//! cached on the client for the life of the session.

use reqwest::Client;
use serde_json::Value;

use crate::client::{build_http_client, throttle, FetchOptions};
use crate::core::http::{api_headers, host_headers};
use crate::error::{LotteryError, Result};
use crate::games::Game;
use crate::models::{DrawRecord, SportsDraw, SportsEnvelope};

const CSL_HOST_URL: &str = "https://www.lottery.gov.cn/";
const CSL_API_URL: &str = "https://webapi.sporttery.cn/gateway/lottery/getHistoryPageListV1.qry";
const CSL_PROJECT_URL: &str = "https://www.lottery.gov.cn/tz_kj.json";
const CSL_REFERER_URL: &str = "https://static.sporttery.cn";

/// Fixed page size for every history request, probe included.
const CSL_PAGE_SIZE: u32 = 30;

/// Game code the page-count probe is issued against (dlt).
const CSL_PROBE_GAME_NO: &str = "85";

/// Page-windowed history client for the four sports games
/// (dlt, pls, plw, qxc).
///
/// The page count discovered by the probe is a session-scoped snapshot: it
/// is never invalidated automatically, even when the upstream adds draws
/// while the client lives. Call
/// [`refresh_page_count`](Self::refresh_page_count) to re-probe.
#[derive(Debug, Default)]
pub struct SportsLotteryClient {
    http: Option<Client>,
    pages: Option<u32>,
}

impl SportsLotteryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish the HTTP session and discover the page count if not yet
    /// done.
    pub async fn connect(&mut self, options: &FetchOptions) -> Result<()> {
        self.page_count(options).await.map(|_| ())
    }

    /// Drop the cached page count and re-probe.
    pub async fn refresh_page_count(&mut self, options: &FetchOptions) -> Result<u32> {
        self.pages = None;
        self.page_count(options).await
    }

    /// Fetch all draws of `game`, ascending chronologically.
    ///
    /// Fails with [`LotteryError::UnsupportedGame`] for welfare games.
    /// Non-2xx responses, transport and decode errors propagate; a failing
    /// page aborts the whole fetch.
    pub async fn fetch_history(
        &mut self,
        game: Game,
        options: &FetchOptions,
    ) -> Result<Vec<DrawRecord>> {
        let items = self.fetch_all(game, options).await?;
        let mut records = Vec::with_capacity(items.len());
        for item in items {
            let draw: SportsDraw = serde_json::from_value(item)?;
            records.push(draw.into_record());
        }
        Ok(records)
    }

    /// Like [`fetch_history`](Self::fetch_history), but returns the raw JSON
    /// elements of each page's `value.list`, in chronological order.
    pub async fn fetch_history_detail(
        &mut self,
        game: Game,
        options: &FetchOptions,
    ) -> Result<Vec<Value>> {
        self.fetch_all(game, options).await
    }

    /// Fetch every page in request order (newest first), then reverse the
    /// aggregate into chronological ascending order.
    async fn fetch_all(&mut self, game: Game, options: &FetchOptions) -> Result<Vec<Value>> {
        let game_no = game
            .sports_game_no()
            .ok_or_else(|| LotteryError::UnsupportedGame {
                game: game.to_string(),
            })?;
        let pages = self.page_count(options).await?;
        let http = self.session(options).await?;

        let mut items = Vec::new();
        for page_no in 1..=pages {
            let body = Self::fetch_page(&http, game_no, page_no, options).await?;
            items.extend(page_items(body)?);
        }
        items.reverse();
        Ok(items)
    }

    async fn fetch_page(
        http: &Client,
        game_no: &str,
        page_no: u32,
        options: &FetchOptions,
    ) -> Result<Value> {
        let body: Value = http
            .get(CSL_API_URL)
            .query(&page_params(game_no, page_no))
            .headers(api_headers(CSL_REFERER_URL)?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        throttle(options).await;
        Ok(body)
    }

    /// Return the cached page count, probing for it on first use.
    async fn page_count(&mut self, options: &FetchOptions) -> Result<u32> {
        if let Some(pages) = self.pages {
            return Ok(pages);
        }
        let http = self.session(options).await?;
        let envelope: SportsEnvelope = http
            .get(CSL_API_URL)
            .query(&page_params(CSL_PROBE_GAME_NO, 1))
            .headers(api_headers(CSL_REFERER_URL)?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        self.pages = Some(envelope.value.pages);
        Ok(envelope.value.pages)
    }

    /// Return the session, warming it up on first use with two page loads
    /// (host page, then the draw-overview JSON). Both bodies are discarded.
    async fn session(&mut self, options: &FetchOptions) -> Result<Client> {
        if let Some(http) = &self.http {
            return Ok(http.clone());
        }
        let http = build_http_client(options)?;
        http.get(CSL_HOST_URL)
            .headers(host_headers(CSL_HOST_URL)?)
            .send()
            .await?;
        http.get(CSL_PROJECT_URL)
            .headers(host_headers(CSL_HOST_URL)?)
            .send()
            .await?;
        self.http = Some(http.clone());
        Ok(http)
    }
}

fn page_params(game_no: &str, page_no: u32) -> [(&'static str, String); 5] {
    [
        ("gameNo", game_no.to_string()),
        ("pageNo", page_no.to_string()),
        ("pageSize", CSL_PAGE_SIZE.to_string()),
        ("provinceId", "0".to_string()),
        ("isVerify", "1".to_string()),
    ]
}

/// Pull the `value.list` out of a response body.
fn page_items(mut body: Value) -> Result<Vec<Value>> {
    match body.pointer_mut("/value/list") {
        Some(list) => Ok(serde_json::from_value(list.take())?),
        None => Ok(Vec::new()),
    }
}
