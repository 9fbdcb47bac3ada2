//! Combining raw (name, price) pairs into a section's product map

use crate::catalog::types::{Price, ProductMap};
use crate::extract::RawProduct;

/// Aggregates extracted pairs into an ordered, name-keyed product map
///
/// Pairs are stably sorted by name before insertion so the section contents
/// are deterministic even though extraction order from markup is not. A later
/// duplicate of a name overwrites the earlier one; with the stable sort that
/// means the last occurrence in extraction order wins. Empty price text maps
/// to [`Price::Unset`].
pub fn aggregate(mut pairs: Vec<RawProduct>) -> ProductMap {
    pairs.sort_by(|a, b| a.name.cmp(&b.name));

    let mut products = ProductMap::new();
    for pair in pairs {
        products.insert(pair.name, Price::from_text(&pair.price));
    }
    products
}
