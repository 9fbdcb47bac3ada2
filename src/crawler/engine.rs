//! The recursive crawl engine
//!
//! Traversal is a concurrent walk of the category tree. Each task processes
//! one (url, label) pair: fetch, classify, then either record a section (leaf),
//! spawn one task per child link (interior), or stop (dead end). A fetch
//! failure is logged and terminates only its own branch; everything already
//! collected elsewhere survives. Every spawned task, transitively, is joined
//! before the result set is handed back, so the writer never observes a
//! partially appended run.
//!
//! There is no cycle detection and no depth limit: the category graph is
//! assumed tree-shaped by construction, and a cyclic graph would not terminate.

use crate::catalog::{aggregate, ResultSet, SectionResult};
use crate::config::Config;
use crate::crawler::collector::Collector;
use crate::extract::{classify_page, extract_category_links, CategoryLink, PageKind};
use crate::fetch::{build_http_client, fetch_page};
use crate::Result;
use reqwest::Client;
use scraper::Html;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Semaphore;
use url::Url;

/// State shared by every traversal task of one crawl run
struct CrawlContext {
    client: Client,
    base: Url,
    config: Config,
    collector: Collector,

    /// Caps in-flight fetches; the category tree's branching factor is
    /// discovered at runtime and otherwise unbounded.
    limiter: Semaphore,
}

/// Runs a complete crawl and returns the accumulated result set
///
/// Fetches the root page, launches one concurrent traversal per top-level
/// category link, and waits for all of them (and their descendants) to finish.
/// Only the root fetch is fatal; branch failures are logged and skipped.
pub async fn run_crawl(config: Config) -> Result<ResultSet> {
    let base = Url::parse(&config.site.base_url)?;
    let root = base.join(&config.site.root_path)?;

    let client = build_http_client(&config.fetch)?;

    tracing::info!("Sending request to {}", root);
    let page = fetch_page(&client, root.as_str()).await?;
    tracing::info!("Server response received: {}", page.status);

    let top_links: Vec<CategoryLink> = {
        let doc = Html::parse_document(&page.body);
        extract_category_links(&doc, &base, &config.selectors).collect()
    };
    tracing::info!("Discovered {} top-level categories", top_links.len());

    let ctx = Arc::new(CrawlContext {
        limiter: Semaphore::new(config.fetch.max_concurrent_requests as usize),
        client,
        base,
        config,
        collector: Collector::new(),
    });

    let mut handles = Vec::new();
    for link in top_links {
        handles.push(tokio::spawn(visit(ctx.clone(), link)));
    }
    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!("Crawl task panicked: {}", e);
        }
    }

    let sections = ctx.collector.drain();
    tracing::info!(
        "All data collected: {} sections from {} requests",
        sections.len(),
        ctx.collector.request_count()
    );

    Ok(sections)
}

/// Processes one (url, label) pair, recursing concurrently on child links
///
/// Boxed because the future is recursive. Parsing happens in a scope of its
/// own: the parsed document is not `Send` and must be dropped before the next
/// suspension point.
fn visit(ctx: Arc<CrawlContext>, link: CategoryLink) -> Pin<Box<dyn Future<Output = ()> + Send>> {
    Box::pin(async move {
        let body = {
            let _permit = match ctx.limiter.acquire().await {
                Ok(permit) => permit,
                Err(_) => return,
            };
            match fetch_page(&ctx.client, link.url.as_str()).await {
                Ok(page) => page.body,
                Err(e) => {
                    tracing::warn!("Branch {:?} failed: {}", link.label, e);
                    return;
                }
            }
        };

        let kind = {
            let doc = Html::parse_document(&body);
            classify_page(&doc, &ctx.base, &ctx.config.selectors)
        };

        match kind {
            PageKind::Leaf(products) => {
                ctx.collector.record(SectionResult {
                    label: link.label,
                    products: aggregate(products),
                });
            }
            PageKind::Interior(children) => {
                tracing::debug!(
                    "No products under {:?}, descending into {} subcategories",
                    link.label,
                    children.len()
                );
                let mut handles = Vec::new();
                for child in children {
                    handles.push(tokio::spawn(visit(ctx.clone(), child)));
                }
                for handle in handles {
                    if let Err(e) = handle.await {
                        tracing::error!("Crawl task panicked: {}", e);
                    }
                }
            }
            PageKind::DeadEnd => {
                tracing::debug!("Dead end at {:?} ({})", link.label, link.url);
            }
        }
    })
}
