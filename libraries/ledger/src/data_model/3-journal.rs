//! # Journal
//! The append handle. A journal is opened once per session and only ever appended to.
//! Every append is flushed and synced before `append` returns, so an event that was reported as written survives a crash right after it.

use std::fs::{File, OpenOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::data_model::{Event, Header, read_header};

pub struct Journal<E> {
    writer: csv::Writer<File>,
    path: PathBuf,
    appended: usize,
    _event: PhantomData<E>,
}

impl<E: Event> Journal<E> {
    /// Opens the journal at `path` for appending. A missing or empty file gets a fresh header for `fingerprint`;
    /// an existing one must already carry that fingerprint.
    pub fn open(path: impl AsRef<Path>, fingerprint: u64) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)?;

        let fresh = file.metadata()?.len() == 0;
        if !fresh {
            read_header(&path)?
                .ok_or(Error::MissingHeader)?
                .check(fingerprint)?;
        }

        let mut journal = Self {
            writer: csv::WriterBuilder::new()
                .delimiter(b'\t')
                .has_headers(false)
                .flexible(true)
                .quote_style(csv::QuoteStyle::Never)
                .from_writer(file),
            path,
            appended: 0,
            _event: PhantomData,
        };

        if fresh {
            journal
                .writer
                .write_record(&Header { fingerprint }.to_record())?;
            journal.sync()?;
            log::info!(
                "Started journal {} for fingerprint {fingerprint}",
                journal.path.display()
            );
        }

        Ok(journal)
    }

    pub fn append(&mut self, event: &E) -> Result<(), Error> {
        self.writer.serialize(event)?;
        self.sync()?;
        self.appended += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of events appended through this handle.
    pub fn appended(&self) -> usize {
        self.appended
    }

    fn sync(&mut self) -> Result<(), Error> {
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        Ok(())
    }
}
