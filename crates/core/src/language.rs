//! Language codes
//!
//! A [`Language`] is a short lowercase code such as `"en"` or `"fr"`. Codes are
//! cheap to clone (shared `Arc<str>`) because every recorded occurrence in the
//! index carries one. Ordering is lexicographic on the code, which is what
//! classification uses to break score ties deterministically.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Code of the English language
pub const ENGLISH: &str = "en";
/// Code of the French language
pub const FRENCH: &str = "fr";

/// A normalized language code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(Arc<str>);

impl Language {
    /// Parse and normalize a language code.
    ///
    /// The code is trimmed and lowercased, and must then consist of ASCII
    /// letters with optional `-` separators (`"en"`, `"pt-br"`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for empty or malformed codes.
    pub fn parse(code: &str) -> Result<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        let well_formed = !normalized.is_empty()
            && !normalized.starts_with('-')
            && !normalized.ends_with('-')
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-');
        if !well_formed {
            return Err(Error::invalid_input(format!(
                "malformed language code '{}'",
                code
            )));
        }
        Ok(Language(Arc::from(normalized)))
    }

    /// The English language (`"en"`), also the default language.
    pub fn english() -> Self {
        Language(Arc::from(ENGLISH))
    }

    /// The French language (`"fr"`).
    pub fn french() -> Self {
        Language(Arc::from(FRENCH))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the French code
    pub fn is_french(&self) -> bool {
        &*self.0 == FRENCH
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::parse(s)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::parse(&code).map_err(serde::de::Error::custom)
    }
}
