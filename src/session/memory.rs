//! Single-slot follow-up memory for a conversation

use serde::{Deserialize, Serialize};

/// The category of information a turn asked for, pending a missing
/// employee id from the next turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PendingIntent {
    /// Leave balance requested without an employee id
    AskLeave,
    /// Employee details requested without an employee id
    AskDetails,
}

/// One-slot dialogue state: at most one pending intent at a time
///
/// Setting a new intent overwrites any prior one. The slot never expires by
/// time; it is consumed by the next qualifying turn or replaced by the next
/// rule that fires.
#[derive(Debug, Default)]
pub struct DialogueMemory {
    pending: Option<PendingIntent>,
    // Reserved for carrying an entity across turns; resolution logic does
    // not read it yet.
    last_entity: Option<String>,
}

impl DialogueMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pending intent, replacing any prior one
    pub fn set_pending(&mut self, intent: PendingIntent) {
        self.pending = Some(intent);
    }

    /// Read and clear the pending intent in one step
    pub fn take_pending(&mut self) -> Option<PendingIntent> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<PendingIntent> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.last_entity = None;
    }

    pub fn set_last_entity(&mut self, entity: impl Into<String>) {
        self.last_entity = Some(entity.into());
    }

    pub fn last_entity(&self) -> Option<&str> {
        self.last_entity.as_deref()
    }
}
