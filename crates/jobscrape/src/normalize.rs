use crate::types::{NormalizedJob, RawJob};

fn field(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Turns a provisional record into a `NormalizedJob`: trims every field, fills gaps with empty
/// strings and stamps `source`.
pub fn normalize_job(raw: RawJob, source: &str) -> NormalizedJob {
    NormalizedJob {
        title: field(raw.title),
        company: field(raw.company),
        location: field(raw.location),
        description: field(raw.description),
        url: field(raw.url),
        salary: field(raw.salary),
        posted_date: field(raw.posted_date),
        source: source.trim().to_string(),
    }
}

/// Collapses runs of whitespace, including the newlines markup tends to leave in text nodes.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_fills() {
        let raw = RawJob {
            title: Some("  Rust Developer\n".into()),
            company: Some("\tAcme Oy ".into()),
            url: Some(" https://example.com/1 ".into()),
            ..Default::default()
        };

        let job = normalize_job(raw, "site_a");

        assert_eq!(job.title, "Rust Developer");
        assert_eq!(job.company, "Acme Oy");
        assert_eq!(job.url, "https://example.com/1");
        assert_eq!(job.location, "");
        assert_eq!(job.salary, "");
        assert_eq!(job.posted_date, "");
        assert_eq!(job.source, "site_a");
    }

    #[test]
    fn test_missing_description_is_empty() {
        let raw = RawJob {
            title: Some("Tester".into()),
            description: None,
            ..Default::default()
        };
        assert_eq!(normalize_job(raw, "site_a").description, "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = RawJob {
            title: Some(" Data Engineer ".into()),
            company: Some("Firma".into()),
            location: Some(" Tampere".into()),
            description: Some("Pipelines  ".into()),
            url: None,
            salary: Some(" 4000 € ".into()),
            posted_date: Some("6.11. ".into()),
        };

        let once = normalize_job(raw, "Duunitori");
        let twice = normalize_job(RawJob::from(once.clone()), &once.source);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Senior \n  Developer\t"), "Senior Developer");
        assert_eq!(collapse_whitespace(""), "");
    }
}
