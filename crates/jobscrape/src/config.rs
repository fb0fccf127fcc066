use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_RATE_LIMIT: f64 = 1.0;

/// Options handed to a scraper factory when the registry builds an instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Seconds to wait before every request.
    pub rate_limit: f64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }
}

impl ScraperConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_rate_limit(mut self, seconds: f64) -> Self {
        self.rate_limit = seconds;
        self
    }

    /// Negative, NaN and infinite values all mean "don't wait". Values too large for a
    /// `Duration` saturate.
    pub fn rate_limit_duration(&self) -> Duration {
        if self.rate_limit.is_finite() && self.rate_limit > 0.0 {
            Duration::try_from_secs_f64(self.rate_limit).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}
