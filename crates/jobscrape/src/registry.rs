use crate::config::ScraperConfig;
use crate::fetch::FetchError;
use crate::scraper::Scraper;
use crate::types::Complexity;

use std::collections::BTreeMap;
use std::sync::Arc;

pub type ScraperFactory =
    Arc<dyn Fn(&ScraperConfig) -> Result<Box<dyn Scraper>, FetchError> + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Scraper '{name}' not found. Available: [{}]", .available.join(", "))]
    NotFound { name: String, available: Vec<String> },
    #[error("Failed to construct scraper: {0}")]
    Construction(#[from] FetchError),
}

/// What the registry knows about a scraper: how to build one and how heavy it is.
#[derive(Clone)]
pub struct ScraperRegistration {
    pub name: String,
    pub factory: ScraperFactory,
    pub complexity: Complexity,
}

impl std::fmt::Debug for ScraperRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScraperRegistration")
            .field("name", &self.name)
            .field("complexity", &self.complexity)
            .finish_non_exhaustive()
    }
}

/// Name to scraper factory directory.
///
/// Fill it once at startup (see [`crate::register_builtin`]) and share it read-only afterwards.
/// Registering an existing name replaces the previous entry.
#[derive(Debug, Clone, Default)]
pub struct ScraperRegistry {
    scrapers: BTreeMap<String, ScraperRegistration>,
}

impl ScraperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every scraper this crate ships.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        crate::register_builtin(&mut registry);
        registry
    }

    pub fn register<F>(&mut self, name: &str, factory: F, complexity: Complexity)
    where
        F: Fn(&ScraperConfig) -> Result<Box<dyn Scraper>, FetchError> + Send + Sync + 'static,
    {
        let registration = ScraperRegistration {
            name: name.to_string(),
            factory: Arc::new(factory),
            complexity,
        };

        if let Some(previous) = self.scrapers.insert(name.to_string(), registration) {
            log::warn!(
                "Replaced scraper: {} (complexity: {} -> {})",
                name,
                previous.complexity,
                complexity
            );
        } else {
            log::info!("Registered scraper: {} (complexity: {})", name, complexity);
        }
    }

    pub fn get(
        &self,
        name: &str,
        config: &ScraperConfig,
    ) -> Result<Box<dyn Scraper>, RegistryError> {
        let registration = self
            .scrapers
            .get(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
                available: self.list_all(),
            })?;

        log::debug!("Building scraper {} with {:?}", name, config);
        Ok((registration.factory)(config)?)
    }

    /// Lookup without failing, for introspection.
    pub fn get_info(&self, name: &str) -> Option<&ScraperRegistration> {
        self.scrapers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scrapers.contains_key(name)
    }

    pub fn list_simple(&self) -> Vec<String> {
        self.list_by(Complexity::Simple)
    }

    pub fn list_complex(&self) -> Vec<String> {
        self.list_by(Complexity::Complex)
    }

    pub fn list_all(&self) -> Vec<String> {
        self.scrapers.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.scrapers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scrapers.is_empty()
    }

    fn list_by(&self, complexity: Complexity) -> Vec<String> {
        self.scrapers
            .values()
            .filter(|r| r.complexity == complexity)
            .map(|r| r.name.clone())
            .collect()
    }
}
