use crate::error::{Error, Result};
use reqwest::{header, Client};
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/121.0.0.0";
pub const MIN_PARAGRAPH_CHARS: usize = 80;
pub const MAX_PARAGRAPHS: usize = 15;

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("static paragraph selector"));

#[derive(Clone)]
pub struct ArticleService {
    client: Client,
}

impl ArticleService {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch_article_text(&self, raw_url: &str) -> Result<String> {
        let url = Url::parse(raw_url.trim())
            .map_err(|e| Error::BadRequest(format!("Invalid URL '{}': {}", raw_url, e)))?;

        tracing::info!("Fetching article from: {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "text/html")
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;

        let text = extract_article_text(&html);
        if text.trim().is_empty() {
            tracing::warn!(url = %url, html_bytes = html.len(), "No qualifying paragraphs found");
            return Err(Error::EmptyArticle);
        }

        tracing::info!(url = %url, chars = text.chars().count(), "Article text extracted");
        Ok(text)
    }
}

/// Joins the first [`MAX_PARAGRAPHS`] `<p>` elements longer than
/// [`MIN_PARAGRAPH_CHARS`] characters, in document order, with single spaces.
pub fn extract_article_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&PARAGRAPH)
        .map(|p| p.text().collect::<String>())
        .filter(|text| text.chars().count() > MIN_PARAGRAPH_CHARS)
        .take(MAX_PARAGRAPHS)
        .collect::<Vec<_>>()
        .join(" ")
}
