use crate::data_model::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("journal I/O error")]
    Io(#[from] std::io::Error),

    #[error("journal is not readable as tab-separated text")]
    Csv(#[from] csv::Error),

    /// The header fingerprint disagrees with the state being replayed into.
    #[error("log does not match (journal fingerprint {found}, expected {expected})")]
    Mismatch { expected: u64, found: u64 },

    #[error("journal does not start with an `id` header line")]
    MissingHeader,

    #[error("journal line {line}: {reason}")]
    Corrupt { line: u64, reason: RecordError },
}
