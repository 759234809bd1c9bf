mod dom;
pub mod error;
pub mod fetch;
pub mod registry;
mod retailers;
pub mod types;

pub use error::{ExtractionError, ScraperError};
pub use fetch::HtmlClient;
pub use registry::{Extractor, ExtractorRegistry, RetailerBinding};
pub use types::StockFact;
