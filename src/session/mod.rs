//! Conversation sessions and the per-turn retrieval pipeline

pub mod memory;
pub mod rules;

pub use memory::{DialogueMemory, PendingIntent};
pub use rules::RuleEngine;

use std::sync::Arc;

use crate::directory::EmployeeDirectory;
use crate::faq::{fuzzy, FaqCorpus, TfidfIndex};
use crate::text;

/// Minimum fuzzy score that lets a FAQ answer through when the TF-IDF
/// score is below the configured threshold
const FUZZY_THRESHOLD: f32 = 0.75;

const FALLBACK_ANSWER: &str = "I couldn't find an exact answer. You can try:\n\
    - `Check leaves for EMP10234`\n\
    - `Show employee details EMP56789`\n\
    - `How to download payslip?`";

/// One conversation: shared read-only artifacts plus private follow-up
/// memory
///
/// Each session owns its own `DialogueMemory`; the corpus, index, and
/// directory are shared immutably with every other session of the same
/// assistant. One call to [`retrieve`](ChatSession::retrieve) completes
/// fully before the caller proceeds; there is no concurrency within a
/// conversation.
pub struct ChatSession {
    id: String,
    corpus: Arc<FaqCorpus>,
    index: Arc<TfidfIndex>,
    rules: RuleEngine,
    memory: DialogueMemory,
    threshold: f32,
}

impl ChatSession {
    pub(crate) fn new(
        corpus: Arc<FaqCorpus>,
        index: Arc<TfidfIndex>,
        directory: Arc<EmployeeDirectory>,
        threshold: f32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            corpus,
            index,
            rules: RuleEngine::new(directory),
            memory: DialogueMemory::new(),
            threshold,
        }
    }

    /// Session identifier, used to correlate log events
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Answer one turn. Always produces exactly one textual response; the
    /// only state carried to the next call is the pending-intent slot.
    ///
    /// The decision order is fixed: pending-intent follow-up, then keyword
    /// rules, then FAQ similarity with a fuzzy gate, then the fallback.
    pub fn retrieve(&mut self, query: &str) -> String {
        let raw_query = query.trim();

        // A turn that supplies an id while an intent is pending resolves
        // the previous turn's question directly.
        if let Some(employee_id) = text::extract_employee_id(raw_query) {
            if let Some(intent) = self.memory.take_pending() {
                tracing::debug!(session = %self.id, ?intent, %employee_id, "Resolving follow-up");
                return match intent {
                    PendingIntent::AskLeave => self.rules.leave_balance(&employee_id),
                    PendingIntent::AskDetails => self.rules.employee_details(&employee_id),
                };
            }
        }

        if let Some(answer) = self.rules.apply(raw_query, &mut self.memory) {
            tracing::debug!(session = %self.id, "Rule engine answered");
            return answer;
        }

        // Both signals are always computed; the fuzzy score gates, the
        // TF-IDF index selects.
        let (best_index, best_score) = self.index.best_match(raw_query);
        let best_fuzzy = fuzzy::best_score(&self.corpus, raw_query);
        tracing::debug!(
            session = %self.id,
            best_index,
            best_score,
            best_fuzzy,
            "Similarity scores"
        );

        if best_score >= self.threshold || best_fuzzy >= FUZZY_THRESHOLD {
            self.memory.clear();
            return self.corpus.answer(best_index).to_string();
        }

        tracing::debug!(session = %self.id, "No match, returning fallback");
        FALLBACK_ANSWER.to_string()
    }

    /// The fallback text returned when nothing matches
    pub fn fallback_answer() -> &'static str {
        FALLBACK_ANSWER
    }
}
