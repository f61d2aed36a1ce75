//! The item file: one term per line, `target<TAB>definition[<TAB>score<TAB>last reviewed day]`.
//! Lines starting with `#` are comments; blank lines are skipped. `|` quotes a field.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::term::{Term, TermStore};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not open item file")]
    Io(#[from] io::Error),

    #[error("item file is not readable as tab-separated text")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 2 or 4 fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("line {line}: {field} `{value}` is not a non-negative integer")]
    Number {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: duplicate definition: {target}")]
    Duplicate { line: u64, target: String },
}

pub fn load_terms(path: impl AsRef<Path>) -> Result<TermStore, LoadError> {
    read_terms(File::open(path)?)
}

pub fn read_terms<R: Read>(reader: R) -> Result<TermStore, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quote(b'|')
        .comment(Some(b'#'))
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut terms = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let mut term = match record.len() {
            2 | 4 => Term::new(&record[0], &record[1]),
            found => return Err(LoadError::FieldCount { line, found }),
        };
        if record.len() == 4 {
            term.score = parse_field(&record[2], "score", line)?;
            term.last_reviewed = parse_field(&record[3], "day", line)?;
        }

        if !seen.insert(term.target.clone()) {
            return Err(LoadError::Duplicate {
                line,
                target: term.target,
            });
        }
        terms.push(term);
    }

    Ok(TermStore::new(terms))
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
    line: u64,
) -> Result<T, LoadError> {
    value.parse().map_err(|_| LoadError::Number {
        line,
        field,
        value: value.to_string(),
    })
}

/// Writes `terms` in the item file shape. Terms without any score keep only their two text fields.
pub fn write_snapshot<W: Write>(terms: &TermStore, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote(b'|')
        .comment(Some(b'#'))
        .flexible(true)
        .from_writer(writer);

    for term in terms.iter() {
        if term.score == 0 {
            writer.write_record([term.target.as_str(), term.definition.as_str()])?;
        } else {
            writer.write_record([
                term.target.clone(),
                term.definition.clone(),
                term.score.to_string(),
                term.last_reviewed.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}
