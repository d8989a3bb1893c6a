//! Recorded token occurrences

use lexis_core::Language;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One appearance of a token in the index.
///
/// `word_position` is the 0-based index of the token within its paragraph's
/// filtered token sequence, so positions are dense over surviving tokens.
/// `language` is the language of the whole document.
///
/// Equality and hashing are structural over all four fields. The document
/// id is shared between all occurrences of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    /// Identifier of the source document
    pub document_id: Arc<str>,
    /// 0-based paragraph number within the document
    pub paragraph_index: usize,
    /// 0-based position within the paragraph's filtered tokens
    pub word_position: usize,
    /// Language the document was indexed under
    pub language: Language,
}

impl Occurrence {
    /// Create a new occurrence
    pub fn new(
        document_id: impl Into<Arc<str>>,
        paragraph_index: usize,
        word_position: usize,
        language: Language,
    ) -> Self {
        Occurrence {
            document_id: document_id.into(),
            paragraph_index,
            word_position,
            language,
        }
    }

    /// The occurrence `offset` filtered positions later in the same paragraph.
    pub fn shifted(&self, offset: usize) -> Occurrence {
        Occurrence {
            document_id: Arc::clone(&self.document_id),
            paragraph_index: self.paragraph_index,
            word_position: self.word_position + offset,
            language: self.language.clone(),
        }
    }
}
