//! FAQ corpus and the retrieval signals computed over it
//!
//! This module holds:
//! - **FaqCorpus**: the ordered, index-addressable question/answer table
//! - **TfidfIndex**: term-weighted vectors over the question corpus,
//!   fitted once at initialization
//! - **fuzzy**: token-set string similarity, an independent gating signal

pub mod fuzzy;
mod index;

pub use index::TfidfIndex;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HrdeskError, HrdeskResult};

/// A single FAQ row: question, verbatim answer, category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// Ordered FAQ table; row order defines the indices used by the
/// similarity signals
pub struct FaqCorpus {
    entries: Vec<FaqEntry>,
}

impl FaqCorpus {
    /// Load the corpus from a CSV file with columns `question,answer,category`
    pub fn load_csv(path: impl AsRef<Path>) -> HrdeskResult<Self> {
        let path = path.as_ref();
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| HrdeskError::from_csv(path, e))?;

        let mut entries = Vec::new();
        for row in reader.deserialize() {
            let entry: FaqEntry = row.map_err(|e| HrdeskError::from_csv(path, e))?;
            entries.push(entry);
        }

        tracing::info!("Loaded {} FAQ entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn question(&self, index: usize) -> &str {
        &self.entries[index].question
    }

    pub fn answer(&self, index: usize) -> &str {
        &self.entries[index].answer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
