//! EVGA direct-sales product pages: one product per page.

use scraper::Html;

use crate::dom;
use crate::error::ExtractionError;
use crate::types::StockFact;

/// Panel rendered only while the product cannot be bought.
const OUT_OF_STOCK_PANEL: &str = "#LFrame_pnlOutOfStock";
const PRODUCT_NAME: &str = "#LFrame_lblProductName";

/// Exactly one fact: available unless the out-of-stock panel is present.
///
/// The polled page is already the product page, so no deep link is set.
pub(crate) fn extract_evga_stock(doc: &Html) -> Result<Vec<StockFact>, ExtractionError> {
    let available = dom::find(doc, OUT_OF_STOCK_PANEL)?.is_none();
    let product = dom::text(dom::require(doc, PRODUCT_NAME)?);

    Ok(vec![StockFact {
        available,
        product,
        source_url: None,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(out_of_stock: bool) -> String {
        let panel = if out_of_stock {
            r#"<div id="LFrame_pnlOutOfStock"><span>Out of Stock</span></div>"#
        } else {
            r#"<div id="LFrame_pnlAddToCart"><a>Add to Cart</a></div>"#
        };
        format!(
            r#"<html><body>
                 <h1><span id="LFrame_lblProductName">EVGA GeForce RTX 3080 FTW3 ULTRA GAMING</span></h1>
                 {panel}
               </body></html>"#
        )
    }

    #[test]
    fn in_stock_when_marker_absent() {
        let doc = Html::parse_document(&page(false));
        let facts = extract_evga_stock(&doc).unwrap();
        assert_eq!(
            facts,
            vec![StockFact {
                available: true,
                product: "EVGA GeForce RTX 3080 FTW3 ULTRA GAMING".to_owned(),
                source_url: None,
            }]
        );
    }

    #[test]
    fn out_of_stock_when_marker_present() {
        let doc = Html::parse_document(&page(true));
        let facts = extract_evga_stock(&doc).unwrap();
        assert_eq!(facts.len(), 1);
        assert!(!facts[0].available);
    }

    #[test]
    fn missing_product_name_is_an_extraction_error() {
        let doc = Html::parse_document("<html><body><p>Access denied</p></body></html>");
        let err = extract_evga_stock(&doc).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::MissingElement {
                selector: PRODUCT_NAME
            }
        );
    }

    #[test]
    fn same_document_gives_same_facts() {
        let html = page(false);
        let first = extract_evga_stock(&Html::parse_document(&html)).unwrap();
        let second = extract_evga_stock(&Html::parse_document(&html)).unwrap();
        assert_eq!(first, second);
    }
}
