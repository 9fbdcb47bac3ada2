//! Pricewalk: a category-tree price harvester
//!
//! This crate crawls the category hierarchy of a single e-commerce site,
//! extracts product names and prices from every leaf category page, and
//! writes the aggregated results to a dated CSV file (with a plain-text
//! backup path when the tabular write fails).

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod fetch;
pub mod output;

use thiserror::Error;

/// Main error type for pricewalk operations
#[derive(Debug, Error)]
pub enum PricewalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised by the page fetcher
///
/// A fetch failure is never retried; it isolates to the crawl branch that
/// raised it while sibling branches continue.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Server returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Errors raised by the result writer and reader
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Saved table {path} is missing column {column}")]
    MissingColumn { path: String, column: String },

    #[error("Malformed row in {path}: {message}")]
    MalformedRow { path: String, message: String },

    #[error("Saved table {0} contains no rows")]
    EmptyTable(String),
}

/// Result type alias for pricewalk operations
pub type Result<T> = std::result::Result<T, PricewalkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use catalog::{aggregate, Price, ResultSet, SectionResult};
pub use config::Config;
pub use extract::{CategoryLink, PageKind, RawProduct};
