//! Markup extraction for catalog pages
//!
//! A fetched page parses into one of two shapes: a product grid (leaf) or a
//! list of category links (interior). [`classify_page`] makes that decision
//! explicit so the crawl engine switches on a tag instead of inferring the
//! shape from list emptiness.

mod links;
mod products;

pub use links::extract_category_links;
pub use products::extract_products;

use crate::config::SelectorConfig;
use scraper::{ElementRef, Html};
use url::Url;

/// A link to a child category discovered on an interior page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    /// Absolute URL of the child category page
    pub url: Url,

    /// Trimmed visible text of the link
    pub label: String,
}

/// A (name, price-text) pair extracted from one product card
///
/// The price is the literal displayed text; emptiness is resolved later by
/// the aggregator, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProduct {
    pub name: String,
    pub price: String,
}

/// Classification of a fetched page
#[derive(Debug)]
pub enum PageKind {
    /// The page carries product cards
    Leaf(Vec<RawProduct>),

    /// No products, but category links to descend into
    Interior(Vec<CategoryLink>),

    /// Neither products nor links: a silent dead end, not an error
    DeadEnd,
}

/// Classifies a parsed document as leaf, interior, or dead end
///
/// A page with at least one product card is a leaf even if it also carries
/// category links; link extraction only runs when no products were found.
pub fn classify_page(doc: &Html, base: &Url, selectors: &SelectorConfig) -> PageKind {
    let products = extract_products(doc, selectors);
    if !products.is_empty() {
        return PageKind::Leaf(products);
    }

    let links: Vec<CategoryLink> = extract_category_links(doc, base, selectors).collect();
    if links.is_empty() {
        PageKind::DeadEnd
    } else {
        PageKind::Interior(links)
    }
}

/// Class membership test used by both extractors
pub(crate) fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Collects and trims the visible text of an element
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
