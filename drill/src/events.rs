use ledger::data_model::{Event, RecordError};

use crate::term::{Day, TermStore};

/// One correct first answer: the term at `index` gained `delta` on `day`.
/// Journaled as `<index><TAB><delta><TAB><day>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScoreEvent {
    pub index: usize,
    pub delta: u64,
    pub day: Day,
}

impl Event for ScoreEvent {
    const FIELDS: usize = 3;
}

impl ledger::AppState for TermStore {
    type Event = ScoreEvent;

    /// Events refer to terms by position, so a journal is only valid for a term set of the same size.
    fn fingerprint(&self) -> u64 {
        self.len() as u64
    }

    fn validate_event(&self, event: &ScoreEvent) -> Result<(), RecordError> {
        if event.index >= self.len() {
            return Err(RecordError::new(format!(
                "term index {} out of range ({} terms)",
                event.index,
                self.len()
            )));
        }
        if event.delta == 0 {
            return Err(RecordError::new("score delta must be positive"));
        }
        Ok(())
    }

    fn apply_event(&mut self, event: &ScoreEvent) {
        self.apply_delta(event.index, event.delta, event.day);
    }
}
