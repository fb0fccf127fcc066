use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::normalize::collapse_whitespace;
use crate::scraper::ExtractError;
use crate::types::RawJob;

pub(crate) static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article").expect("invalid selector: card"));

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3").expect("invalid selector: title"));

static COMPANY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[href*="/yritykset/"]"#).expect("invalid selector: company")
});

static JOB_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[href*="/tyopaikat/tyo/"]"#).expect("invalid selector: job link")
});

static LOCATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.location").expect("invalid selector: location"));

const LOCATION_SEPARATOR: char = '–';

fn elem_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Location line reads "Helsinki – Julkaistu 6.11."; only the part before the dash is kept.
fn parse_location(card: ElementRef) -> String {
    let text = match card.select(&LOCATION).next() {
        Some(span) => elem_text(span),
        None => card
            .text()
            .find(|t| t.contains(LOCATION_SEPARATOR))
            .map(collapse_whitespace)
            .unwrap_or_default(),
    };

    match text.split_once(LOCATION_SEPARATOR) {
        Some((location, _)) => location.trim().to_string(),
        None => String::new(),
    }
}

fn absolute_url(href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", super::BASE_URL, href)
    }
}

pub(crate) fn parse_job_card(card: ElementRef) -> Result<RawJob, ExtractError> {
    let title = card
        .select(&TITLE)
        .next()
        .map(elem_text)
        .ok_or_else(|| ExtractError::MissingField("title".into()))?;

    let company = card
        .select(&COMPANY)
        .next()
        .map(elem_text)
        .unwrap_or_else(|| "N/A".to_string());

    let url = card
        .select(&JOB_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(absolute_url)
        .unwrap_or_default();

    Ok(RawJob {
        title: Some(title),
        company: Some(company),
        location: Some(parse_location(card)),
        description: Some(String::new()),
        url: Some(url),
        salary: Some(String::new()),
        posted_date: Some(String::new()),
    })
}
