//! Reading lists.
//!
//! A reading list is a TOML document naming the articles shown in the link
//! pane:
//!
//! ```toml
//! [[articles]]
//! slug = "hello-world"
//! title = "Hello, World"
//! ```
//!
//! The list only carries references; article content and preview fragments
//! live on the server.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::slug::Slug;

/// Errors produced when loading a reading list.
#[derive(Debug, Error)]
pub enum ReadingListError {
    #[error("failed to read reading list: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse reading list: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One entry in a reading list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleRef {
    pub slug: Slug,
    pub title: String,
}

/// An ordered collection of article references.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingList {
    #[serde(default)]
    pub articles: Vec<ArticleRef>,
}

impl ReadingList {
    /// Load a reading list from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ReadingListError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
