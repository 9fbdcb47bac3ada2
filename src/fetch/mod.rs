//! HTTP fetching for the crawler
//!
//! One shared client, one GET per page, no retries. [`build_http_client`]
//! describes the header set, [`fetch_page`] the error classification.

mod client;

pub use client::{build_http_client, fetch_page, FetchedPage};
