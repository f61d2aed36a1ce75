//! # Replay
//! Reading a journal back. Events are returned in file order, which is the order they were appended in.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::data_model::{Event, Header, decode};
use crate::{AppState, Error};

fn reader(file: File) -> csv::Reader<File> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file)
}

fn open_existing(path: &Path) -> Result<Option<File>, Error> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Returns None if the journal doesn't exist or has no records yet.
pub fn read_header(path: &Path) -> Result<Option<Header>, Error> {
    let Some(file) = open_existing(path)? else {
        return Ok(None);
    };
    match reader(file).into_records().next() {
        None => Ok(None),
        Some(record) => Header::from_record(&record?).map(Some),
    }
}

fn read_numbered_events<E: Event>(path: &Path, fingerprint: u64) -> Result<Vec<(u64, E)>, Error> {
    let Some(file) = open_existing(path)? else {
        return Ok(Vec::new());
    };
    let mut records = reader(file).into_records();
    let Some(header) = records.next() else {
        return Ok(Vec::new());
    };
    Header::from_record(&header?)?.check(fingerprint)?;

    records
        .map(|record| {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            decode(&record)
                .map(|event| (line, event))
                .map_err(|reason| Error::Corrupt { line, reason })
        })
        .collect()
}

/// Reads every event of the journal at `path`, after checking its header against `fingerprint`.
/// A journal that doesn't exist yet has no events.
pub fn read_events<E: Event>(path: impl AsRef<Path>, fingerprint: u64) -> Result<Vec<E>, Error> {
    Ok(read_numbered_events(path.as_ref(), fingerprint)?
        .into_iter()
        .map(|(_, event)| event)
        .collect())
}

/// Applies the journal at `path` to `state` and returns the number of events applied.
/// On any error, `state` is left exactly as it was.
pub fn replay<A: AppState>(path: impl AsRef<Path>, state: &mut A) -> Result<usize, Error> {
    let path = path.as_ref();
    let events = read_numbered_events::<A::Event>(path, state.fingerprint())
        .and_then(|events| {
            for (line, event) in &events {
                state.validate_event(event).map_err(|reason| Error::Corrupt {
                    line: *line,
                    reason,
                })?;
            }
            Ok(events)
        })
        .inspect_err(|e| {
            log::error!("Refusing journal {}: {e}", path.display());
        })?;

    for (_, event) in &events {
        state.apply_event(event);
    }

    log::info!("Replayed {} events from {}", events.len(), path.display());
    Ok(events.len())
}
