//! Best Buy search-results pages. Listing links are site-relative.

use scraper::Html;

use super::search_results::{extract_search_results, SearchResultsLayout};
use crate::error::ExtractionError;
use crate::types::StockFact;

const LAYOUT: SearchResultsLayout = SearchResultsLayout {
    item: "li.sku-item",
    status: ".add-to-cart-button",
    sold_out_marker: "Sold Out",
    title: ".sku-title a",
    link_origin: Some("https://www.bestbuy.com"),
};

pub(crate) fn extract_bestbuy_stock(doc: &Html) -> Result<Vec<StockFact>, ExtractionError> {
    extract_search_results(doc, &LAYOUT)
}
