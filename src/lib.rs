//! Hrdesk: an HR help-desk assistant over two tabular data sources.
//!
//! This library provides:
//! - Keyword-rule answers for leave, employee details, payroll, and bank
//!   queries
//! - One-turn follow-up memory for queries missing an employee id
//! - FAQ retrieval combining TF-IDF cosine similarity with a fuzzy
//!   token-set gate
//! - A read-only employee directory loaded once from CSV
//!
//! # Example
//!
//! ```rust,ignore
//! use hrdesk::{Config, HrAssistant};
//!
//! let assistant = HrAssistant::open(Config::default())?;
//! let mut session = assistant.session();
//! println!("{}", session.retrieve("How many leaves do I have?"));
//! println!("{}", session.retrieve("EMP10234"));
//! ```

pub mod directory;
pub mod error;
pub mod faq;
pub mod session;
pub mod text;
pub mod cli;

// Re-export key types
pub use crate::directory::{EmployeeDirectory, EmployeeRecord};
pub use crate::error::{HrdeskError, HrdeskResult};
pub use crate::faq::{FaqCorpus, FaqEntry, TfidfIndex};
pub use crate::session::{ChatSession, DialogueMemory, PendingIntent, RuleEngine};

use std::path::PathBuf;
use std::sync::Arc;

/// Default minimum TF-IDF cosine similarity for accepting a FAQ match
pub const DEFAULT_THRESHOLD: f32 = 0.45;

/// Configuration for opening an assistant
#[derive(Debug, Clone)]
pub struct Config {
    pub faq_path: PathBuf,
    pub employee_path: PathBuf,
    pub threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            faq_path: PathBuf::from("data/faqs.csv"),
            employee_path: PathBuf::from("data/employees.csv"),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Shared, read-only core of the assistant
///
/// Opening loads both source tables and fits the similarity index; this is
/// the only step that touches disk and the only fatal path. The result is
/// cheap to clone and safe to share across concurrent conversations, each
/// of which gets its own [`ChatSession`] with private dialogue memory.
#[derive(Clone)]
pub struct HrAssistant {
    corpus: Arc<FaqCorpus>,
    index: Arc<TfidfIndex>,
    directory: Arc<EmployeeDirectory>,
    threshold: f32,
}

impl HrAssistant {
    /// Load both tables, fit the similarity index, and validate the
    /// threshold. Fails before any `retrieve` call can succeed.
    pub fn open(config: Config) -> HrdeskResult<Self> {
        if !(0.0..=1.0).contains(&config.threshold) {
            return Err(HrdeskError::Configuration(format!(
                "similarity threshold must be in [0, 1], got {}",
                config.threshold
            )));
        }

        let corpus = FaqCorpus::load_csv(&config.faq_path)?;
        let index = TfidfIndex::fit(&corpus)?;
        let directory = EmployeeDirectory::load_csv(&config.employee_path)?;

        tracing::info!(
            "Assistant ready: {} FAQ entries, {} employees, threshold {}",
            corpus.len(),
            directory.len(),
            config.threshold
        );

        Ok(Self {
            corpus: Arc::new(corpus),
            index: Arc::new(index),
            directory: Arc::new(directory),
            threshold: config.threshold,
        })
    }

    /// Start a new conversation with empty dialogue memory
    pub fn session(&self) -> ChatSession {
        ChatSession::new(
            self.corpus.clone(),
            self.index.clone(),
            self.directory.clone(),
            self.threshold,
        )
    }

    pub fn corpus(&self) -> &FaqCorpus {
        &self.corpus
    }

    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}
