use crate::normalize::normalize_job;
use crate::types::{NormalizedJob, RawJob};

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// A job board.
///
/// `scrape_jobs` never fails: request errors yield an empty list and broken cards are skipped,
/// both only visible in the logs. The result holds at most `limit` jobs.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Value stamped into `NormalizedJob::source`.
    fn source(&self) -> &str;

    async fn scrape_jobs(
        &self,
        keyword: &str,
        location: Option<&str>,
        limit: usize,
    ) -> Vec<NormalizedJob>;
}

/// Runs `extract` over the first `limit` elements matching `cards` and normalizes what comes
/// back. Cards the extractor rejects are logged and dropped.
pub fn collect_jobs<F>(
    html: &str,
    cards: &Selector,
    limit: usize,
    source: &str,
    extract: F,
) -> Vec<NormalizedJob>
where
    F: Fn(ElementRef<'_>) -> Result<RawJob, ExtractError>,
{
    let document = Html::parse_document(html);

    document
        .select(cards)
        .take(limit)
        .enumerate()
        .filter_map(|(i, card)| match extract(card) {
            Ok(raw) => Some(normalize_job(raw, source)),
            Err(e) => {
                log::warn!("Failed to parse job card #{} from {}: {}", i + 1, source, e);
                None
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::testing::{SiteAScraper, cards};
    use super::*;
    use crate::config::ScraperConfig;
    use crate::fetch::FetchClient;
    use crate::fetch::mock::MockTransport;

    use std::sync::Arc;

    fn site_a(transport: Arc<MockTransport>) -> SiteAScraper {
        let config = ScraperConfig::default().with_rate_limit(0.0);
        SiteAScraper {
            client: FetchClient::with_transport(&config, transport),
        }
    }

    #[tokio::test]
    async fn test_well_formed_cards() {
        let html = cards(&[Some("One"), Some("Two"), Some("Three")]);
        let scraper = site_a(Arc::new(MockTransport::ok(html)));

        let jobs = scraper.scrape_jobs("python", None, 5).await;

        assert_eq!(jobs.len(), 3);
        assert!(jobs.iter().all(|j| j.source == "site_a"));
        assert_eq!(jobs[0].title, "One");
        assert_eq!(jobs[2].company, "Acme");
    }

    #[tokio::test]
    async fn test_connection_error_yields_empty() {
        let scraper = site_a(Arc::new(MockTransport::failing("connection reset")));
        assert!(scraper.scrape_jobs("python", None, 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_card_is_skipped() {
        let html = cards(&[Some("One"), None, Some("Three")]);
        let scraper = site_a(Arc::new(MockTransport::ok(html)));

        let jobs = scraper.scrape_jobs("python", None, 5).await;

        let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["One", "Three"]);
    }

    #[test]
    fn test_limit_applies_to_cards() {
        let selector = Selector::parse("div.job").unwrap();
        let html = cards(&[Some("One"), None, Some("Three"), Some("Four")]);
        fn extract(card: ElementRef<'_>) -> Result<RawJob, ExtractError> {
            let title: String = card
                .select(&Selector::parse("h2").unwrap())
                .next()
                .ok_or_else(|| ExtractError::MissingField("title".into()))?
                .text()
                .collect();
            Ok(RawJob {
                title: Some(title),
                ..Default::default()
            })
        }

        assert_eq!(collect_jobs(&html, &selector, 2, "site_a", extract).len(), 1);
        assert_eq!(collect_jobs(&html, &selector, 10, "site_a", extract).len(), 3);
        assert!(collect_jobs(&html, &selector, 0, "site_a", extract).is_empty());
    }

    #[test]
    fn test_no_cards() {
        let selector = Selector::parse("div.job").unwrap();
        let jobs = collect_jobs("<p>nothing</p>", &selector, 5, "site_a", |_| {
            Ok(RawJob::default())
        });
        assert!(jobs.is_empty());
    }
}
