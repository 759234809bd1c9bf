//! B&H Photo pages are rendered client-side and are not parsed yet.

use scraper::Html;

use crate::dom;
use crate::error::ExtractionError;
use crate::types::StockFact;

const FALLBACK_NAME: &str = "B&H Photo";

/// Always reports a single unavailable fact so targets on this site are
/// logged every iteration without ever failing the check.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn extract_bhphoto_stock(doc: &Html) -> Result<Vec<StockFact>, ExtractionError> {
    let product = dom::find(doc, "title")
        .ok()
        .flatten()
        .map(dom::text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_owned());

    Ok(vec![StockFact {
        available: false,
        product,
        source_url: None,
    }])
}
