//! # Event
//! Events are the basic unit in Ledger's data model. The application state is the baseline plus the result of applying a sequence of events.
//! Events are what is saved in the journal. Each event is one tab-separated record with a fixed number of fields, encoded through serde.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Event: Sized + Clone + Serialize + DeserializeOwned {
    /// Number of fields in one encoded record.
    const FIELDS: usize;
}

/// Why a single record could not be turned into an event, or why the state refused it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RecordError(String);

impl RecordError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

pub(crate) fn decode<E: Event>(record: &csv::StringRecord) -> Result<E, RecordError> {
    if record.len() != E::FIELDS {
        return Err(RecordError::new(format!(
            "expected {} fields, found {}",
            E::FIELDS,
            record.len()
        )));
    }
    record
        .deserialize(None)
        .map_err(|e| RecordError::new(format!("malformed record: {e}")))
}
