//! Scorer trait and language selection.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BlablaError, Result};

/// Text language understood by the scoring service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
    Es,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::En, Language::De, Language::Es];

    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Es => "es",
        }
    }

    /// Scoring endpoint for this language.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Language::En => "http://www.blablameter.com/index.php",
            Language::De => "http://www.blablameter.de/index.php",
            Language::Es => "http://www.blablameter.com/spanish/index.php",
        }
    }

    /// Name of the form field carrying the text.
    pub fn form_field(&self) -> &'static str {
        match self {
            Language::De => "bc_ip",
            Language::En | Language::Es => "bc_input",
        }
    }
}

impl FromStr for Language {
    type Err = BlablaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "es" => Ok(Language::Es),
            _ => Err(BlablaError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Configuration for the HTTP scorer.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Endpoint used for every language instead of the built-in ones.
    pub endpoint: Option<String>,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl ScorerConfig {
    /// Override the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Something that rates a piece of prose.
///
/// Implementations must be thread-safe (Send + Sync) so a single scorer
/// can be shared by the transform driver and its callers.
pub trait Scorer: Send + Sync {
    /// Return the bullshit index for `text` written in `language`.
    fn score(&self, text: &str, language: Language) -> Result<f64>;

    /// Name of this scorer (for logging/reports).
    fn name(&self) -> &str;
}
