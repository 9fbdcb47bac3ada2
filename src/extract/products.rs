//! Product extraction from leaf pages
//!
//! Matching is positional rather than structural: for each product card, the
//! name and price are the nearest *following* elements in document order that
//! carry the configured classes. This tolerates markup where the name or the
//! price is a sibling of the card rather than a descendant.

use crate::config::SelectorConfig;
use crate::extract::{element_text, has_class, RawProduct};
use scraper::{ElementRef, Html};

/// Extracts all (name, price-text) pairs from a document
///
/// Returns an empty vec if the page has no product cards. A card with no
/// following name element is skipped; a card with no following price element
/// yields an empty price string, resolved to the unset sentinel downstream.
pub fn extract_products(doc: &Html, selectors: &SelectorConfig) -> Vec<RawProduct> {
    let mut cards: Vec<usize> = Vec::new();
    let mut names: Vec<(usize, String)> = Vec::new();
    let mut prices: Vec<(usize, String)> = Vec::new();

    // One preorder pass assigns every element its document-order position.
    for (pos, node) in doc.root_element().descendants().enumerate() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        if has_class(&el, &selectors.product_item) {
            cards.push(pos);
        }
        if has_class(&el, &selectors.product_name) {
            names.push((pos, element_text(&el)));
        }
        if has_class(&el, &selectors.product_price) {
            prices.push((pos, element_text(&el)));
        }
    }

    cards
        .into_iter()
        .filter_map(|card_pos| {
            let name = names
                .iter()
                .find(|(pos, _)| *pos > card_pos)
                .map(|(_, text)| text.clone())?;
            let price = prices
                .iter()
                .find(|(pos, _)| *pos > card_pos)
                .map(|(_, text)| text.clone())
                .unwrap_or_default();
            Some(RawProduct { name, price })
        })
        .collect()
}
