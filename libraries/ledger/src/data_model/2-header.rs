//! # Header
//! The first record of every journal is `id<TAB><fingerprint>`.
//! The fingerprint binds the journal to the state it was started against. For `drill` it is the number of terms, since events refer to terms by position.

use crate::Error;
use crate::data_model::RecordError;

pub const HEADER_TAG: &str = "id";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub fingerprint: u64,
}

impl Header {
    pub fn to_record(self) -> csv::StringRecord {
        csv::StringRecord::from(vec![HEADER_TAG.to_string(), self.fingerprint.to_string()])
    }

    pub fn from_record(record: &csv::StringRecord) -> Result<Self, Error> {
        if record.get(0) != Some(HEADER_TAG) {
            return Err(Error::MissingHeader);
        }
        let line = record.position().map(|p| p.line()).unwrap_or(1);
        if record.len() != 2 {
            return Err(Error::Corrupt {
                line,
                reason: RecordError::new(format!(
                    "header has {} fields, expected 2",
                    record.len()
                )),
            });
        }
        record[1]
            .parse()
            .map(|fingerprint| Header { fingerprint })
            .map_err(|_| Error::Corrupt {
                line,
                reason: RecordError::new(format!("fingerprint `{}` is not a number", &record[1])),
            })
    }

    /// Fails with [`Error::Mismatch`] unless the header was written for `expected`.
    pub fn check(self, expected: u64) -> Result<(), Error> {
        if self.fingerprint == expected {
            Ok(())
        } else {
            Err(Error::Mismatch {
                expected,
                found: self.fingerprint,
            })
        }
    }
}
