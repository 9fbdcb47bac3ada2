//! Crawler module: the concurrent category-tree traversal
//!
//! [`crawl`] is the single parameterless-style entry point: given a loaded
//! configuration it fetches the catalog root, walks the category tree, and
//! returns everything the leaf pages yielded.

mod collector;
mod engine;

pub use collector::Collector;
pub use engine::run_crawl;

use crate::catalog::ResultSet;
use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation
pub async fn crawl(config: Config) -> Result<ResultSet> {
    run_crawl(config).await
}
