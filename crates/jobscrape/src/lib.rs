pub mod config;
pub mod duunitori;
pub mod fetch;
pub mod normalize;
pub mod registry;
pub mod scraper;
pub mod types;

pub use config::ScraperConfig;
pub use registry::{RegistryError, ScraperRegistration, ScraperRegistry};
pub use scraper::Scraper;
pub use types::{Complexity, NormalizedJob};

/// Registers every scraper shipped with this crate. Call once at startup, before any lookup.
pub fn register_builtin(registry: &mut ScraperRegistry) {
    duunitori::register(registry);
}
