//! The knowledge corpus — an immutable block of text loaded once.
//!
//! The corpus is read at process start and injected into whatever needs
//! it (gateway state, CLI commands); nothing mutates it afterwards, so
//! concurrent selection needs no synchronization. A missing corpus file
//! is not an error: the service runs without a knowledge base and the
//! selector sees an empty corpus.

use std::path::Path;

use tracing::{info, warn};

use crate::select::select_relevant;

/// The full static knowledge text.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Wrap an already-loaded text block.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Load the corpus from a file, tolerating absence.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                info!(path = %path.display(), bytes = text.len(), "knowledge corpus loaded");
                Self { text }
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "knowledge corpus not found — running without a knowledge base"
                );
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when there is no usable corpus text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Select the sections relevant to a query. See [`select_relevant`].
    pub fn select(&self, query: &str) -> String {
        select_relevant(&self.text, query)
    }
}
