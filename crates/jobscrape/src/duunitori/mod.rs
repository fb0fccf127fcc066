mod parser;
pub mod scraper;

pub use scraper::DuunitoriScraper;

use crate::registry::ScraperRegistry;
use crate::scraper::Scraper;
use crate::types::Complexity;

/// Registry key.
pub const NAME: &str = "duunitori";

pub(crate) const BASE_URL: &str = "https://duunitori.fi";
pub(crate) const SOURCE: &str = "Duunitori";

pub fn register(registry: &mut ScraperRegistry) {
    registry.register(
        NAME,
        |config| Ok(Box::new(DuunitoriScraper::new(config)?) as Box<dyn Scraper>),
        Complexity::Simple,
    );
}
