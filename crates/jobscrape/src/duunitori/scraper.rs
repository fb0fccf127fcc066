use super::parser::{CARD, parse_job_card};

use crate::config::ScraperConfig;
use crate::fetch::{FetchClient, FetchError, Method, Transport};
use crate::scraper::{Scraper, collect_jobs};
use crate::types::NormalizedJob;

use async_trait::async_trait;
use std::sync::Arc;

/// Scraper for duunitori.fi, plain HTTP with no bot protection.
#[derive(Debug, Clone)]
pub struct DuunitoriScraper {
    client: FetchClient,
    base_url: String,
}

impl DuunitoriScraper {
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: FetchClient::new(config)?,
            base_url: super::BASE_URL.to_string(),
        })
    }

    pub fn with_transport(config: &ScraperConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: FetchClient::with_transport(config, transport),
            base_url: super::BASE_URL.to_string(),
        }
    }

    /// The site has a single search box, so the location rides along in the keyword query.
    pub fn search_query(keyword: &str, location: Option<&str>) -> String {
        match location.map(str::trim).filter(|l| !l.is_empty()) {
            Some(location) => format!("{} {}", keyword, location),
            None => keyword.to_string(),
        }
    }
}

#[async_trait]
impl Scraper for DuunitoriScraper {
    fn source(&self) -> &str {
        super::SOURCE
    }

    async fn scrape_jobs(
        &self,
        keyword: &str,
        location: Option<&str>,
        limit: usize,
    ) -> Vec<NormalizedJob> {
        if limit == 0 {
            log::debug!("Limit is 0, skipping Duunitori request");
            return Vec::new();
        }

        let url = format!("{}/tyopaikat", self.base_url);
        let query = Self::search_query(keyword, location);
        log::info!("Searching Duunitori for '{}'...", query);

        let html = match self
            .client
            .fetch(&url, &[("haku", query.as_str())], Method::Get)
            .await
        {
            Ok(html) => html,
            Err(e) => {
                log::error!("Duunitori scraping failed: {}", e);
                return Vec::new();
            }
        };

        let jobs = collect_jobs(&html, &CARD, limit, self.source(), parse_job_card);
        log::info!("Scraped {} jobs from Duunitori for '{}'", jobs.len(), keyword);
        jobs
    }
}
