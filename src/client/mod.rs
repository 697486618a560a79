//! HTTP clients for the two lottery portals, plus the combined facade.

pub mod facade;
pub mod sports;
pub mod welfare;

pub use facade::ChinaLottery;
pub use sports::SportsLotteryClient;
pub use welfare::WelfareLotteryClient;

use std::time::Duration;

use rand::Rng;
use reqwest::Client;

use crate::error::Result;

/// Per-fetch configuration.
///
/// `proxy` only takes effect at session build time, i.e. before the first
/// request a client instance sends; later fetches reuse the existing session.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Per-request timeout. `None` means no timeout.
    pub timeout: Option<Duration>,
    /// Proxy URL applied to all requests of the session.
    pub proxy: Option<String>,
    /// Fixed delay after each request. `None` means a fresh random
    /// sub-second delay per request.
    pub sleep: Option<Duration>,
}

/// Build the reqwest client backing one portal session. The cookie store is
/// what makes the handshake request useful to later API calls.
pub(crate) fn build_http_client(options: &FetchOptions) -> Result<Client> {
    let mut builder = Client::builder().cookie_store(true);
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(proxy) = &options.proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }
    Ok(builder.build()?)
}

/// Self-throttling sleep after each request.
pub(crate) async fn throttle(options: &FetchOptions) {
    let delay = options
        .sleep
        .unwrap_or_else(|| Duration::from_millis(rand::thread_rng().gen_range(0..1000)));
    tokio::time::sleep(delay).await;
}
