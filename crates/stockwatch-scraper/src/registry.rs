//! URL-prefix dispatch from a target URL to its retailer extractor.

use scraper::Html;

use crate::error::ExtractionError;
use crate::retailers::{
    extract_bestbuy_stock, extract_bhphoto_stock, extract_evga_stock, extract_newegg_stock,
};
use crate::types::StockFact;

/// A pure function from a parsed page to its stock facts.
pub type Extractor = fn(&Html) -> Result<Vec<StockFact>, ExtractionError>;

/// One retailer: the URL prefix that selects it and the extractor to run.
#[derive(Debug, Clone)]
pub struct RetailerBinding {
    /// Short name used in log fields.
    pub name: &'static str,
    /// Case-sensitive prefix matched against the start of the target URL.
    pub prefix: String,
    pub extractor: Extractor,
}

impl RetailerBinding {
    #[must_use]
    pub fn new(name: &'static str, prefix: impl Into<String>, extractor: Extractor) -> Self {
        Self {
            name,
            prefix: prefix.into(),
            extractor,
        }
    }

    /// Whether this binding handles `url`. Exact prefix, never substring.
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }

    /// Parse `html` and run the extractor.
    ///
    /// Parsing and extraction are synchronous; the parsed document never
    /// outlives this call.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError`] when the page lacks the structure the
    /// extractor depends on.
    pub fn extract(&self, html: &str) -> Result<Vec<StockFact>, ExtractionError> {
        let doc = Html::parse_document(html);
        (self.extractor)(&doc)
    }
}

/// Ordered set of retailer bindings; the first matching prefix wins.
#[derive(Debug, Clone, Default)]
pub struct ExtractorRegistry {
    bindings: Vec<RetailerBinding>,
}

impl ExtractorRegistry {
    /// An empty registry. Every URL is unroutable until bindings are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every supported retailer, in priority order.
    #[must_use]
    pub fn with_default_retailers() -> Self {
        let mut registry = Self::new();
        registry.register(RetailerBinding::new(
            "evga",
            "https://www.evga.com",
            extract_evga_stock,
        ));
        registry.register(RetailerBinding::new(
            "newegg",
            "https://www.newegg.com",
            extract_newegg_stock,
        ));
        registry.register(RetailerBinding::new(
            "bestbuy",
            "https://www.bestbuy.com",
            extract_bestbuy_stock,
        ));
        registry.register(RetailerBinding::new(
            "bhphoto",
            "https://www.bhphotovideo.com",
            extract_bhphoto_stock,
        ));
        registry
    }

    /// Append a binding. Earlier bindings keep priority.
    pub fn register(&mut self, binding: RetailerBinding) -> &mut Self {
        self.bindings.push(binding);
        self
    }

    /// The first binding whose prefix matches `url`, or `None` when the URL
    /// belongs to no known retailer.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<&RetailerBinding> {
        self.bindings.iter().find(|b| b.matches(url))
    }

    #[must_use]
    pub fn bindings(&self) -> &[RetailerBinding] {
        &self.bindings
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
