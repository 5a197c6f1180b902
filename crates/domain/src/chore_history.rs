//! ChoreHistory — an immutable record of a single chore completion.

use serde::{Deserialize, Serialize};

use crate::id::{ChoreId, HistoryId};
use crate::time::Timestamp;

/// One completion of a chore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreHistory {
    pub id: HistoryId,
    pub chore_id: ChoreId,
    pub completed_at: Timestamp,
    /// Optional free-text note about the completion.
    pub notes: Option<String>,
}

impl ChoreHistory {
    /// Create a new, not yet persisted completion record.
    #[must_use]
    pub fn new(chore_id: ChoreId, completed_at: Timestamp) -> Self {
        Self {
            id: HistoryId::default(),
            chore_id,
            completed_at,
            notes: None,
        }
    }

    /// Attach a note to the completion.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_create_record_without_notes() {
        let record = ChoreHistory::new(ChoreId::new(3), now());
        assert_eq!(record.chore_id, ChoreId::new(3));
        assert!(record.notes.is_none());
    }

    #[test]
    fn should_attach_notes() {
        let record = ChoreHistory::new(ChoreId::new(3), now()).with_notes("extra scrubbing");
        assert_eq!(record.notes.as_deref(), Some("extra scrubbing"));
    }
}
