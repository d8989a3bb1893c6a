//! Core types for Lexis
//!
//! This crate contains the foundational types shared by the analysis,
//! detection and search layers:
//! - Language: normalized language codes
//! - Error: the error taxonomy and `Result` alias
//! - LexisConfig: configuration loaded from `lexis.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod language;

pub use config::{LexisConfig, CONFIG_FILE_NAME, DEFAULT_DETECTION_THRESHOLD};
pub use error::{Error, Result};
pub use language::{Language, ENGLISH, FRENCH};

/// A normalized word unit produced by the tokenization pipeline.
///
/// Tokens are lowercase, punctuation-free and never empty.
pub type Token = String;
