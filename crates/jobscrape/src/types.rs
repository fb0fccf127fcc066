use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[error("Invalid complexity '{0}'. Accepted values: 'simple', 'complex'")]
pub struct ComplexityParseError(String);

/// Whether a scraper gets by with plain HTTP or needs a browser automation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Complex,
}

impl FromStr for Complexity {
    type Err = ComplexityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Complexity::Simple),
            "complex" => Ok(Complexity::Complex),
            _ => Err(ComplexityParseError(s.to_string())),
        }
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

/// A job listing as every scraper hands it back.
///
/// All fields are always present; a value the board did not show is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub salary: String,
    pub posted_date: String,
    pub source: String,
}

impl Display for NormalizedJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.company.is_empty() {
            write!(f, " @ {}", self.company)?;
        }
        if !self.location.is_empty() {
            write!(f, " ({})", self.location)?;
        }
        write!(f, " [{}]", self.source)?;
        if !self.url.is_empty() {
            write!(f, "\n     {}", self.url)?;
        }
        Ok(())
    }
}

/// Provisional listing produced by a site extractor, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub salary: Option<String>,
    pub posted_date: Option<String>,
}

impl From<NormalizedJob> for RawJob {
    fn from(job: NormalizedJob) -> Self {
        RawJob {
            title: Some(job.title),
            company: Some(job.company),
            location: Some(job.location),
            description: Some(job.description),
            url: Some(job.url),
            salary: Some(job.salary),
            posted_date: Some(job.posted_date),
        }
    }
}
