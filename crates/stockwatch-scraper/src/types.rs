//! Domain types produced by the site extractors.

/// One availability reading for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockFact {
    pub available: bool,
    /// Display name, used as the notification body.
    pub product: String,
    /// Absolute deep link to the item when the polled page is a listing.
    pub source_url: Option<String>,
}

impl StockFact {
    /// The page a notification click should open: the deep link when there
    /// is one, otherwise the polled page itself.
    #[must_use]
    pub fn open_target<'a>(&'a self, target_url: &'a str) -> &'a str {
        self.source_url.as_deref().unwrap_or(target_url)
    }
}
