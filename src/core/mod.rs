//! Core utilities for the lottery clients
//!
//! This module consolidates the leaf utilities the two clients share:
//! - `http`: browser-emulating header builders for page loads vs API calls
//! - `window`: date-range windowing against per-request span limits

pub mod http;
pub mod window;

// Re-export commonly used items for convenience
pub use http::{api_headers, host_headers};
pub use window::{date_windows, DateWindow};
