//! Positional search
//!
//! This module contains:
//! - `occurrence`: the recorded (document, paragraph, position, language) tuple
//! - `index`: PositionalIndex with term and phrase search

mod index;
mod occurrence;

pub use index::{IndexStats, PositionalIndex};
pub use occurrence::Occurrence;
