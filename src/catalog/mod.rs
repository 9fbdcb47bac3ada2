//! The catalog data model and section aggregation
//!
//! Types shared between the crawl engine and the result writer: prices,
//! per-section product maps, and the run-scoped result set.

mod aggregate;
mod types;

pub use aggregate::aggregate;
pub use types::{Price, ProductMap, ResultSet, SectionResult};
