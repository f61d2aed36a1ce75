//! This is a library for keeping application state in a local, append-only journal.
//! It was created for the `drill` review tool, so it doesn't include much that was not needed for that project.
//!
//! Journaling strategy:
//! 1. The application loads a baseline state from wherever it keeps it (for `drill`, a tab-separated item file).
//! 2. Instead of saving the state after every change, the application appends an "event" describing the change. Each append is flushed to disk before the application continues.
//! 3. On the next start, the baseline is loaded again and the journal is replayed on top of it, in file order.
//! 4. The first line of a journal is a header carrying a fingerprint of the state it was written against. Replaying a journal against a state with a different fingerprint is refused, since the events would likely refer to the wrong things.
//!
//! Replay is all-or-nothing: every record is parsed and validated before any of them is applied.

pub mod data_model;
mod error;

pub use error::Error;

use crate::data_model::{Event, RecordError};

pub trait AppState {
    type Event: Event;

    /// Identifies the shape of the state that events refer to. Stored in the journal header.
    fn fingerprint(&self) -> u64;

    /// Checks that `event` can be applied to this state. Called for every event before any is applied.
    fn validate_event(&self, event: &Self::Event) -> Result<(), RecordError>;

    fn apply_event(&mut self, event: &Self::Event);
}
