//! Browser-emulating header builders.
//!
//! Both portals reject requests that do not look like they came from a
//! browser: page loads need a Referer + User-Agent pair, while API calls
//! additionally need Origin, X-Requested-With and a form Content-Type.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};

use crate::error::Result;

/// Fixed Chrome User-Agent sent with every request.
pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36";

const X_REQUESTED_WITH: &str = "X-Requested-With";

/// Headers for a page-load (handshake) request against a portal host.
pub fn host_headers(host_url: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(REFERER, HeaderValue::from_str(host_url)?);
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    Ok(headers)
}

/// Headers for an AJAX-style API request, with `referer_url` as Referer.
pub fn api_headers(referer_url: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ORIGIN, HeaderValue::from_str(origin_of(referer_url))?);
    headers.insert(REFERER, HeaderValue::from_str(referer_url)?);
    headers.insert(X_REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    Ok(headers)
}

/// Scheme + authority of a URL, i.e. the URL with any path stripped.
fn origin_of(url: &str) -> &str {
    match url.find("://") {
        Some(scheme_end) => match url[scheme_end + 3..].find('/') {
            Some(path_start) => &url[..scheme_end + 3 + path_start],
            None => url,
        },
        None => url,
    }
}
