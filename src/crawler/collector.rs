//! Shared result accumulation across concurrent crawl tasks

use crate::catalog::{ResultSet, SectionResult};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    sections: ResultSet,
    requests: u64,
}

/// The run-scoped accumulator leaf tasks append into
///
/// One mutex guards both the section list and the progress counter: the pair
/// must stay consistent so that "request N produced section X" holds, and
/// tasks run on parallel worker threads.
#[derive(Debug, Default)]
pub struct Collector {
    inner: Mutex<Inner>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section result and emits the progress notification
    pub fn record(&self, section: SectionResult) {
        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        tracing::debug!(
            "Request {}: section {:?} written to the result list ({} products)",
            inner.requests,
            section.label,
            section.products.len()
        );
        inner.sections.push(section);
    }

    /// Number of sections recorded so far
    pub fn request_count(&self) -> u64 {
        self.inner.lock().unwrap().requests
    }

    /// Takes the accumulated sections, leaving the collector empty
    ///
    /// Called once, after every crawl task has joined.
    pub fn drain(&self) -> ResultSet {
        std::mem::take(&mut self.inner.lock().unwrap().sections)
    }
}
