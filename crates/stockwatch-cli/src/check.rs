//! One availability check: fetch a target, extract its facts, alert on stock.
//!
//! Every failure is logged and folded into a [`CheckOutcome`]; nothing
//! propagates to sibling checks running in the same poll iteration.

use stockwatch_scraper::{ExtractorRegistry, HtmlClient, StockFact};

use crate::notify::{Alert, Notifier};

/// What happened to one target in one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CheckOutcome {
    /// No retailer is registered for the URL; nothing was fetched.
    Unroutable,
    FetchFailed,
    ExtractionFailed,
    /// The page parsed but listed no items.
    Empty,
    Checked {
        facts: Vec<StockFact>,
        /// Alerts successfully handed to the notifier.
        notified: usize,
    },
}

impl CheckOutcome {
    pub(crate) fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed | Self::ExtractionFailed | Self::Empty
        )
    }

    pub(crate) fn available_count(&self) -> usize {
        match self {
            Self::Checked { facts, .. } => facts.iter().filter(|f| f.available).count(),
            _ => 0,
        }
    }
}

pub(crate) struct Checker<N> {
    client: HtmlClient,
    registry: ExtractorRegistry,
    notifier: N,
}

impl<N: Notifier> Checker<N> {
    pub(crate) fn new(client: HtmlClient, registry: ExtractorRegistry, notifier: N) -> Self {
        Self {
            client,
            registry,
            notifier,
        }
    }

    pub(crate) fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Check one target URL.
    ///
    /// The retailer is resolved before fetching, so unknown URLs cost no
    /// request. Notification failures are logged and do not change the
    /// outcome.
    pub(crate) async fn check(&self, url: &str) -> CheckOutcome {
        let Some(binding) = self.registry.resolve(url) else {
            tracing::debug!(url, "no retailer registered for url; skipping");
            return CheckOutcome::Unroutable;
        };

        let body = match self.client.fetch_html(url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(retailer = binding.name, error = %e, "Failed checking url: {url}");
                return CheckOutcome::FetchFailed;
            }
        };

        let facts = match binding.extract(&body) {
            Ok(facts) => facts,
            Err(e) => {
                tracing::warn!(retailer = binding.name, error = %e, "Failed extracting url: {url}");
                return CheckOutcome::ExtractionFailed;
            }
        };

        if facts.is_empty() {
            tracing::warn!(retailer = binding.name, "Failed: {url}");
            return CheckOutcome::Empty;
        }

        let mut notified = 0;
        for fact in &facts {
            match &fact.source_url {
                Some(link) => tracing::info!(
                    retailer = binding.name,
                    "Product: {}, Available: {}, Link: {link}",
                    fact.product,
                    fact.available
                ),
                None => tracing::info!(
                    retailer = binding.name,
                    "Product: {}, Available: {}",
                    fact.product,
                    fact.available
                ),
            }

            if !fact.available {
                continue;
            }
            let alert = Alert::in_stock(fact, url);
            match self.notifier.notify(&alert).await {
                Ok(()) => notified += 1,
                Err(e) => tracing::warn!(
                    url,
                    product = %fact.product,
                    error = %e,
                    "failed to send notification"
                ),
            }
        }

        CheckOutcome::Checked { facts, notified }
    }
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
