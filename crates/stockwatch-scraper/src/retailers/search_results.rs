//! Shared extraction for search-results listings.
//!
//! Each listing item carries a status node (promo badge or cart button)
//! and a title link. Items without a status node are not product tiles
//! (sponsored rows, banners) and are skipped.

use url::Url;
use scraper::Html;

use crate::dom;
use crate::error::ExtractionError;
use crate::types::StockFact;

pub(super) struct SearchResultsLayout {
    /// One match per listing item.
    pub item: &'static str,
    /// Status node inside an item.
    pub status: &'static str,
    /// Case-sensitive text in the status node that means "cannot buy".
    pub sold_out_marker: &'static str,
    /// Title link inside an item; its text is the product name.
    pub title: &'static str,
    /// Origin for site-relative `href`s; `None` when links are absolute.
    pub link_origin: Option<&'static str>,
}

/// One fact per listed item, in page order. An empty listing is `Ok(vec![])`.
pub(super) fn extract_search_results(
    doc: &Html,
    layout: &SearchResultsLayout,
) -> Result<Vec<StockFact>, ExtractionError> {
    let mut facts = Vec::new();

    for item in dom::select_all(doc, layout.item)? {
        let Some(status) = dom::find_within(item, layout.status)? else {
            continue;
        };
        let available = !dom::text(status).contains(layout.sold_out_marker);

        let title = dom::require_within(item, layout.title)?;
        let href = dom::require_attr(title, layout.title, "href")?;
        let source_url = match layout.link_origin {
            Some(origin) => absolutize(origin, href)?,
            None => href.to_owned(),
        };

        facts.push(StockFact {
            available,
            product: dom::text(title),
            source_url: Some(source_url),
        });
    }

    Ok(facts)
}

/// Resolve `href` against `origin`. Already-absolute links pass through.
pub(super) fn absolutize(origin: &str, href: &str) -> Result<String, ExtractionError> {
    let invalid = |e: url::ParseError| ExtractionError::InvalidLink {
        href: href.to_owned(),
        reason: e.to_string(),
    };
    let base = Url::parse(origin).map_err(invalid)?;
    Ok(base.join(href.trim()).map_err(invalid)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolutize_prefixes_site_relative_links() {
        assert_eq!(
            absolutize("https://www.bestbuy.com", "/site/rtx-3080/6429440.p?skuId=6429440").unwrap(),
            "https://www.bestbuy.com/site/rtx-3080/6429440.p?skuId=6429440"
        );
    }

    #[test]
    fn absolutize_keeps_absolute_links() {
        assert_eq!(
            absolutize("https://www.bestbuy.com", "https://www.bestbuy.com/site/x.p").unwrap(),
            "https://www.bestbuy.com/site/x.p"
        );
    }

    #[test]
    fn absolutize_rejects_bad_origin() {
        let err = absolutize("not an origin", "/site/x.p").unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidLink { ref href, .. } if href == "/site/x.p"));
    }
}
