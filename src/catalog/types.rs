use std::collections::BTreeMap;
use std::fmt;

/// A product price as it will appear in the output
///
/// The unset case serializes as a numeric `0` rather than an empty string.
/// Downstream consumers distinguish "no price recorded" by that value, so the
/// divergence is part of the output contract, not an accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Price {
    /// The literal displayed price text
    Text(String),

    /// No price text was present on the page
    Unset,
}

impl Price {
    /// Builds a price from extracted text, mapping emptiness to `Unset`
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            Price::Unset
        } else {
            Price::Text(text.to_string())
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Text(text) => f.write_str(text),
            Price::Unset => f.write_str("0"),
        }
    }
}

/// Products collected from one leaf page, keyed by product name
pub type ProductMap = BTreeMap<String, Price>;

/// The products of one named catalog section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    /// Display label of the category the products were found under
    pub label: String,

    /// Name-keyed products, unique per section
    pub products: ProductMap,
}

/// All section results accumulated over one crawl run
///
/// Written by many concurrent leaf tasks, read once by the writer after every
/// task has joined.
pub type ResultSet = Vec<SectionResult>;
