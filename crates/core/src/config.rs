//! Index configuration via `lexis.toml`
//!
//! All keys are optional; a missing key takes its default. The same structure
//! can be built in code with [`LexisConfig::default`] and the builder-style
//! setters.

use crate::error::{Error, Result};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "lexis.toml";

/// Default minimum similarity for a confident language match.
pub const DEFAULT_DETECTION_THRESHOLD: f64 = 0.3;

/// Default paragraph boundary: two consecutive line breaks.
pub const DEFAULT_PARAGRAPH_DELIMITER: &str = "\n\n";

/// Configuration for indexing, detection and querying.
///
/// # Example
///
/// ```toml
/// # Language used for queries and when detection abstains
/// default_language = "en"
///
/// # Minimum cosine similarity for a confident language match
/// detection_threshold = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexisConfig {
    /// Language used to tokenize queries and as detection fallback.
    #[serde(default)]
    pub default_language: Language,
    /// Minimum best score for detection to report a language.
    #[serde(default = "default_detection_threshold")]
    pub detection_threshold: f64,
    /// Paragraph boundary used when splitting documents.
    #[serde(default = "default_paragraph_delimiter")]
    pub paragraph_delimiter: String,
}

fn default_detection_threshold() -> f64 {
    DEFAULT_DETECTION_THRESHOLD
}

fn default_paragraph_delimiter() -> String {
    DEFAULT_PARAGRAPH_DELIMITER.to_string()
}

impl Default for LexisConfig {
    fn default() -> Self {
        Self {
            default_language: Language::english(),
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
            paragraph_delimiter: default_paragraph_delimiter(),
        }
    }
}

impl LexisConfig {
    /// Set the default language.
    pub fn default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Set the detection threshold.
    pub fn detection_threshold(mut self, threshold: f64) -> Self {
        self.detection_threshold = threshold;
        self
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the threshold is outside `[0, 1]` or the
    /// paragraph delimiter is empty.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.detection_threshold) {
            return Err(Error::invalid_input(format!(
                "detection_threshold must be within [0, 1], got {}",
                self.detection_threshold
            )));
        }
        if self.paragraph_delimiter.is_empty() {
            return Err(Error::invalid_input("paragraph_delimiter must not be empty"));
        }
        Ok(())
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the file does not exist, `Config` if it cannot be
    /// parsed, and `InvalidInput` if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::not_found(format!(
                "config file '{}'",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lexis configuration
#
# Language used to tokenize queries and as fallback when detection abstains.
default_language = "en"

# Minimum cosine similarity for a language match (0.0 - 1.0).
detection_threshold = 0.3

# Paragraph boundary used when splitting documents.
paragraph_delimiter = "\n\n"
"#
    }
}
