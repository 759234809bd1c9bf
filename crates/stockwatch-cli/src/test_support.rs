//! Helpers shared by the binary's unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use stockwatch_scraper::{ExtractorRegistry, HtmlClient, RetailerBinding};
use tracing::subscriber::DefaultGuard;

use crate::check::Checker;
use crate::notify::testing::RecordingNotifier;

/// In-memory log sink; clones share one buffer.
#[derive(Debug, Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's log events into a buffer until the guard drops.
pub(crate) fn capture_logs() -> (DefaultGuard, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (tracing::subscriber::set_default(subscriber), buffer)
}

/// The default retailers, re-homed under `{base}/{name}` so a mock server
/// can stand in for every site.
pub(crate) fn mock_registry(base: &str) -> ExtractorRegistry {
    let mut registry = ExtractorRegistry::new();
    for binding in ExtractorRegistry::with_default_retailers().bindings() {
        registry.register(RetailerBinding::new(
            binding.name,
            format!("{base}/{}", binding.name),
            binding.extractor,
        ));
    }
    registry
}

pub(crate) fn test_checker(base: &str) -> (Checker<RecordingNotifier>, RecordingNotifier) {
    let notifier = RecordingNotifier::default();
    let client = HtmlClient::new(5, "stockwatch-test/0.1").expect("failed to build test client");
    let checker = Checker::new(client, mock_registry(base), notifier.clone());
    (checker, notifier)
}

pub(crate) const EVGA_OUT_OF_STOCK: &str = r#"<html><body>
    <span id="LFrame_lblProductName">EVGA GeForce RTX 3080 FTW3 ULTRA GAMING</span>
    <div id="LFrame_pnlOutOfStock">Out of Stock</div>
</body></html>"#;

pub(crate) const EVGA_IN_STOCK: &str = r#"<html><body>
    <span id="LFrame_lblProductName">EVGA GeForce RTX 3080 XC3 ULTRA GAMING</span>
    <div id="LFrame_pnlAddToCart"><a>Add to Cart</a></div>
</body></html>"#;

/// Two Newegg listings: the first sold out, the second purchasable.
pub(crate) const NEWEGG_ONE_AVAILABLE: &str = r#"<html><body>
    <div class="item-container"><div class="item-info">
        <p class="item-promo">OUT OF STOCK</p>
        <a class="item-title" href="https://www.newegg.com/p/N82E16814126452">ASUS TUF Gaming RTX 3080</a>
    </div></div>
    <div class="item-container"><div class="item-info">
        <p class="item-promo">Free Shipping</p>
        <a class="item-title" href="https://www.newegg.com/p/N82E16814137598">MSI Ventus 3X RTX 3080</a>
    </div></div>
</body></html>"#;
