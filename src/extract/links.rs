//! Category link extraction from interior pages

use crate::config::SelectorConfig;
use crate::extract::{element_text, has_class, CategoryLink};
use scraper::{ElementRef, Html};
use url::Url;

/// Extracts category links from a document as a lazy, single-pass sequence
///
/// Each matching anchor is visited once; the caller can start scheduling
/// children before the whole list is materialized. Anchors whose href does
/// not resolve against the base origin are skipped.
pub fn extract_category_links<'a>(
    doc: &'a Html,
    base: &'a Url,
    selectors: &'a SelectorConfig,
) -> impl Iterator<Item = CategoryLink> + 'a {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| {
            el.value().name() == "a" && has_class(el, &selectors.section_link)
        })
        .filter_map(move |el| {
            let href = el.value().attr("href")?;
            let url = base.join(href.trim()).ok()?;
            Some(CategoryLink {
                url,
                label: element_text(&el),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_of(html: &str) -> Vec<CategoryLink> {
        let doc = Html::parse_document(html);
        let base = Url::parse("https://shop.example.com").unwrap();
        extract_category_links(&doc, &base, &SelectorConfig::default()).collect()
    }

    #[test]
    fn resolves_relative_href_against_base_origin() {
        let links = links_of(
            r#"<html><body>
            <a class="section-item" href="/catalog/shoes">Shoes</a>
            </body></html>"#,
        );

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url.as_str(), "https://shop.example.com/catalog/shoes");
        assert_eq!(links[0].label, "Shoes");
    }

    #[test]
    fn trims_label_whitespace() {
        let links = links_of(
            r#"<html><body>
            <a class="section-item" href="/catalog/hats">
                Hats
            </a>
            </body></html>"#,
        );

        assert_eq!(links[0].label, "Hats");
    }

    #[test]
    fn ignores_anchors_without_the_link_class() {
        let links = links_of(
            r#"<html><body>
            <a href="/about">About</a>
            <a class="nav-item" href="/cart">Cart</a>
            <a class="section-item" href="/catalog/socks">Socks</a>
            </body></html>"#,
        );

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "Socks");
    }

    #[test]
    fn ignores_non_anchor_elements_with_the_class() {
        let links = links_of(
            r#"<html><body>
            <div class="section-item">Not a link</div>
            </body></html>"#,
        );

        assert!(links.is_empty());
    }

    #[test]
    fn skips_anchor_without_href() {
        let links = links_of(
            r#"<html><body>
            <a class="section-item">No target</a>
            </body></html>"#,
        );

        assert!(links.is_empty());
    }

    #[test]
    fn preserves_document_order() {
        let links = links_of(
            r#"<html><body>
            <a class="section-item" href="/catalog/a">A</a>
            <a class="section-item" href="/catalog/b">B</a>
            <a class="section-item" href="/catalog/c">C</a>
            </body></html>"#,
        );

        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn sequence_is_lazy() {
        let doc = Html::parse_document(
            r#"<html><body>
            <a class="section-item" href="/catalog/a">A</a>
            <a class="section-item" href="/catalog/b">B</a>
            </body></html>"#,
        );
        let base = Url::parse("https://shop.example.com").unwrap();
        let selectors = SelectorConfig::default();

        let mut iter = extract_category_links(&doc, &base, &selectors);
        assert_eq!(iter.next().unwrap().label, "A");
        assert_eq!(iter.next().unwrap().label, "B");
        assert!(iter.next().is_none());
    }
}
