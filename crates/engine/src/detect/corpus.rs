//! Reference corpus sources for language models.
//!
//! A [`CorpusSource`] hands the detector fully materialized texts. The
//! detector never enumerates files itself; [`FileCorpus`] is the one source
//! that touches the filesystem.

use lexis_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Extension of files picked up from a corpus directory.
const TEXT_EXTENSION: &str = ".txt";

/// Supplies reference documents for building a language model.
pub trait CorpusSource {
    /// Return every document of the corpus as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the source does not exist.
    fn documents(&self) -> Result<Vec<String>>;
}

/// In-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct TextCorpus {
    texts: Vec<String>,
}

impl TextCorpus {
    /// Create a corpus from texts.
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextCorpus {
            texts: texts.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one text.
    pub fn push(&mut self, text: impl Into<String>) {
        self.texts.push(text.into());
    }
}

impl CorpusSource for TextCorpus {
    fn documents(&self) -> Result<Vec<String>> {
        Ok(self.texts.clone())
    }
}

/// Corpus read from a file, or from every `.txt` file of a directory.
///
/// Directory entries are read in file-name order. Subdirectories are not
/// descended into.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
}

impl FileCorpus {
    /// Create a file corpus for `path`. The path is checked when read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCorpus { path: path.into() }
    }

    /// The corpus path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for FileCorpus {
    fn documents(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Err(Error::not_found(format!(
                "corpus path '{}'",
                self.path.display()
            )));
        }

        if self.path.is_file() {
            return Ok(vec![std::fs::read_to_string(&self.path)?]);
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.path)? {
            let entry = entry?;
            let path = entry.path();
            let is_text = path
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| n.ends_with(TEXT_EXTENSION));
            if is_text && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        if files.is_empty() {
            tracing::warn!(path = %self.path.display(), "Corpus directory has no .txt files");
        }

        files
            .iter()
            .map(|p| std::fs::read_to_string(p).map_err(Error::from))
            .collect()
    }
}
