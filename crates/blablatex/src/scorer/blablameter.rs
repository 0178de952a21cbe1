//! BlaBlaMeter HTTP scorer.
//!
//! The service has no official API: the text is posted through the
//! same form the website uses and the index is scraped from the page.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;

use crate::error::{BlablaError, Result};

use super::provider::{Language, Scorer, ScorerConfig};

/// Environment variable overriding the scoring endpoint.
pub const ENDPOINT_ENV: &str = "BLABLAMETER_URL";

static INDEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Bullshit-Index ([-+\d.]+)").unwrap());

/// Scorer backed by the BlaBlaMeter website.
pub struct BlablameterScorer {
    client: Client,
    endpoint: Option<String>,
}

impl BlablameterScorer {
    /// Create a scorer with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ScorerConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: ScorerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BlablaError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = config
            .endpoint
            .or_else(|| std::env::var(ENDPOINT_ENV).ok())
            .filter(|url| !url.trim().is_empty());

        Ok(Self { client, endpoint })
    }

    /// URL that will receive requests for `language`.
    pub fn endpoint_for(&self, language: Language) -> &str {
        self.endpoint.as_deref().unwrap_or(language.endpoint())
    }
}

impl Scorer for BlablameterScorer {
    fn score(&self, text: &str, language: Language) -> Result<f64> {
        let url = self.endpoint_for(language);
        debug!("posting {} chars to {} ({})", text.len(), url, language);

        let response = self
            .client
            .post(url)
            .form(&[(language.form_field(), text)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlablaError::Service {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        parse_index(&body)
    }

    fn name(&self) -> &str {
        "blablameter"
    }
}

/// Extract the bullshit index from a response page.
pub fn parse_index(body: &str) -> Result<f64> {
    let captured = INDEX_PATTERN
        .captures(body)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| BlablaError::Parse("No Bullshit-Index found in response".to_string()))?
        .as_str();

    captured
        .parse::<f64>()
        .map_err(|e| BlablaError::Parse(format!("Invalid index '{}': {}", captured, e)))
}
