//! Newegg search-results pages. Listing links are already absolute.

use scraper::Html;

use super::search_results::{extract_search_results, SearchResultsLayout};
use crate::error::ExtractionError;
use crate::types::StockFact;

const LAYOUT: SearchResultsLayout = SearchResultsLayout {
    item: ".item-container .item-info",
    status: ".item-promo",
    sold_out_marker: "OUT OF STOCK",
    title: ".item-title",
    link_origin: None,
};

pub(crate) fn extract_newegg_stock(doc: &Html) -> Result<Vec<StockFact>, ExtractionError> {
    extract_search_results(doc, &LAYOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(promo: Option<&str>, title: &str, href: &str) -> String {
        let promo = promo
            .map(|p| format!(r#"<p class="item-promo"><i class="item-promo-icon"></i>{p}</p>"#))
            .unwrap_or_default();
        format!(
            r#"<div class="item-container">
                 <div class="item-info">
                   {promo}
                   <a href="{href}" class="item-title" title="View Details">{title}</a>
                 </div>
               </div>"#
        )
    }

    fn page(items: &[String]) -> Html {
        Html::parse_document(&format!(
            r#"<html><body><div class="items-grid-view">{}</div></body></html>"#,
            items.concat()
        ))
    }

    #[test]
    fn one_fact_per_item_in_page_order() {
        let doc = page(&[
            item(
                Some("OUT OF STOCK"),
                "ASUS TUF Gaming GeForce RTX 3080",
                "https://www.newegg.com/asus-tuf/p/N82E16814126452",
            ),
            item(
                Some("Limited time offer"),
                "MSI Ventus 3X GeForce RTX 3080",
                "https://www.newegg.com/msi-ventus/p/N82E16814137598",
            ),
        ]);

        let facts = extract_newegg_stock(&doc).unwrap();

        assert_eq!(
            facts,
            vec![
                StockFact {
                    available: false,
                    product: "ASUS TUF Gaming GeForce RTX 3080".to_owned(),
                    source_url: Some(
                        "https://www.newegg.com/asus-tuf/p/N82E16814126452".to_owned()
                    ),
                },
                StockFact {
                    available: true,
                    product: "MSI Ventus 3X GeForce RTX 3080".to_owned(),
                    source_url: Some(
                        "https://www.newegg.com/msi-ventus/p/N82E16814137598".to_owned()
                    ),
                },
            ]
        );
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        let doc = page(&[item(
            Some("Out of stock soon"),
            "Gigabyte Eagle RTX 3080",
            "https://www.newegg.com/p/N82E16814932329",
        )]);
        let facts = extract_newegg_stock(&doc).unwrap();
        assert!(facts[0].available);
    }

    #[test]
    fn items_without_promo_are_skipped() {
        let doc = page(&[
            item(None, "Sponsored cable", "https://www.newegg.com/p/cable"),
            item(
                Some("OUT OF STOCK"),
                "EVGA RTX 3080 XC3",
                "https://www.newegg.com/p/N82E16814487518",
            ),
        ]);
        let facts = extract_newegg_stock(&doc).unwrap();
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].product, "EVGA RTX 3080 XC3");
    }

    #[test]
    fn empty_listing_is_not_an_error() {
        let doc = page(&[]);
        assert_eq!(extract_newegg_stock(&doc).unwrap(), vec![]);
    }

    #[test]
    fn promo_without_title_is_an_extraction_error() {
        let doc = Html::parse_document(
            r#"<div class="item-container"><div class="item-info">
                 <p class="item-promo">OUT OF STOCK</p>
               </div></div>"#,
        );
        let err = extract_newegg_stock(&doc).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::MissingElement {
                selector: ".item-title"
            }
        );
    }
}
