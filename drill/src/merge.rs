use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::items::write_snapshot;
use crate::term::TermStore;

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("no journal found at {}", .0.display())]
    NoJournal(PathBuf),

    #[error("could not replay the journal")]
    Journal(#[from] ledger::Error),

    #[error("could not write the snapshot")]
    Io(#[from] io::Error),

    #[error("could not write the snapshot")]
    Csv(#[from] csv::Error),

    #[error("could not replace the item file")]
    Persist(#[from] tempfile::PersistError),
}

/// Folds the journal at `journal_path` into the item file at `source_path`.
///
/// `terms` must be the item file as currently loaded. The journal is replayed over it, the result replaces the
/// item file, and the journal is removed, since its deltas are now part of the baseline. Returns the merged terms.
pub fn merge(
    source_path: impl AsRef<Path>,
    journal_path: impl AsRef<Path>,
    mut terms: TermStore,
) -> Result<TermStore, MergeError> {
    let source_path = source_path.as_ref();
    let journal_path = journal_path.as_ref();

    if !journal_path.try_exists()? {
        return Err(MergeError::NoJournal(journal_path.to_path_buf()));
    }

    let applied = ledger::data_model::replay(journal_path, &mut terms)?;
    replace_with_snapshot(source_path, &terms)?;
    fs::remove_file(journal_path)?;

    log::info!(
        "Merged {applied} journal events into {}",
        source_path.display()
    );
    Ok(terms)
}

/// Writes next to `path` first, then renames over it.
fn replace_with_snapshot(path: &Path, terms: &TermStore) -> Result<(), MergeError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    write_snapshot(terms, &mut file)?;
    if let Ok(metadata) = fs::metadata(path) {
        file.as_file().set_permissions(metadata.permissions())?;
    }
    file.as_file().sync_all()?;
    file.persist(path)?;
    Ok(())
}
