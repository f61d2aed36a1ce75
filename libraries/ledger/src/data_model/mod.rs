#[path = "1-event.rs"]
mod event;

#[path = "2-header.rs"]
mod header;

#[path = "3-journal.rs"]
mod journal;

#[path = "4-replay.rs"]
mod replay;

pub use event::*;
pub use header::*;
pub use journal::*;
pub use replay::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppState, Error};

    #[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    struct Tally {
        slot: usize,
        amount: u32,
    }

    impl Event for Tally {
        const FIELDS: usize = 2;
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Counters(Vec<u32>);

    impl AppState for Counters {
        type Event = Tally;

        fn fingerprint(&self) -> u64 {
            self.0.len() as u64
        }

        fn validate_event(&self, event: &Tally) -> Result<(), RecordError> {
            if event.slot < self.0.len() {
                Ok(())
            } else {
                Err(RecordError::new(format!("slot {} out of range", event.slot)))
            }
        }

        fn apply_event(&mut self, event: &Tally) {
            self.0[event.slot] += event.amount;
        }
    }

    fn journal_with(contents: &str) -> tempfile::TempPath {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file.into_temp_path()
    }

    #[test]
    fn test_missing_journal_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = Counters(vec![0, 0]);
        let applied = replay(dir.path().join("absent.log"), &mut state).unwrap();
        assert_eq!(applied, 0);
        assert_eq!(state, Counters(vec![0, 0]));
    }

    #[test]
    fn test_open_writes_header_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.log");

        let mut journal = Journal::<Tally>::open(&path, 2).unwrap();
        assert_eq!(journal.path(), path.as_path());
        journal.append(&Tally { slot: 1, amount: 5 }).unwrap();
        journal.append(&Tally { slot: 0, amount: 3 }).unwrap();
        assert_eq!(journal.appended(), 2);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "id\t2\n1\t5\n0\t3\n"
        );
    }

    #[test]
    fn test_reopen_continues_the_journal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally.log");

        Journal::<Tally>::open(&path, 2)
            .unwrap()
            .append(&Tally { slot: 1, amount: 5 })
            .unwrap();
        Journal::<Tally>::open(&path, 2)
            .unwrap()
            .append(&Tally { slot: 1, amount: 1 })
            .unwrap();

        let mut state = Counters(vec![0, 0]);
        assert_eq!(replay(&path, &mut state).unwrap(), 2);
        assert_eq!(state, Counters(vec![0, 6]));
    }

    #[test]
    fn test_reopen_with_other_fingerprint_is_refused() {
        let path = journal_with("id\t3\n");
        let err = Journal::<Tally>::open(&path, 4).err().unwrap();
        assert!(matches!(
            err,
            Error::Mismatch {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_mismatch_leaves_state_untouched() {
        let path = journal_with("id\t33\n0\t1\n");
        let mut state = Counters(vec![0, 0]);
        let err = replay(&path, &mut state).unwrap_err();
        assert!(err.to_string().starts_with("log does not match"));
        assert_eq!(state, Counters(vec![0, 0]));
    }

    #[test]
    fn test_header_only() {
        let path = journal_with("id\t2\n");
        let mut state = Counters(vec![0, 0]);
        assert_eq!(replay(&path, &mut state).unwrap(), 0);
        assert_eq!(state, Counters(vec![0, 0]));
    }

    #[test]
    fn test_wrong_field_count_is_corrupt() {
        let path = journal_with("id\t2\n0\t1\n1\t1\t9\n");
        let mut state = Counters(vec![0, 0]);
        let err = replay(&path, &mut state).unwrap_err();
        assert!(matches!(err, Error::Corrupt { line: 3, .. }), "{err:?}");
        assert_eq!(state, Counters(vec![0, 0]));
    }

    #[test]
    fn test_non_numeric_field_is_corrupt() {
        let path = journal_with("id\t2\n0\tlots\n");
        let mut state = Counters(vec![0, 0]);
        assert!(matches!(
            replay(&path, &mut state),
            Err(Error::Corrupt { line: 2, .. })
        ));
    }

    #[test]
    fn test_rejected_event_applies_nothing() {
        let path = journal_with("id\t2\n0\t4\n7\t1\n");
        let mut state = Counters(vec![0, 0]);
        let err = replay(&path, &mut state).unwrap_err();
        assert_eq!(err.to_string(), "journal line 3: slot 7 out of range");
        assert_eq!(state, Counters(vec![0, 0]));
    }

    #[test]
    fn test_missing_header() {
        let path = journal_with("0\t4\n");
        let mut state = Counters(vec![0, 0]);
        assert!(matches!(
            replay(&path, &mut state),
            Err(Error::MissingHeader)
        ));
        assert!(matches!(
            Journal::<Tally>::open(&path, 2),
            Err(Error::MissingHeader)
        ));
    }

    #[test]
    fn test_read_events_in_file_order() {
        let path = journal_with("id\t2\n1\t1\n0\t2\n1\t3\n");
        let events: Vec<Tally> = read_events(&path, 2).unwrap();
        assert_eq!(
            events,
            vec![
                Tally { slot: 1, amount: 1 },
                Tally { slot: 0, amount: 2 },
                Tally { slot: 1, amount: 3 },
            ]
        );
    }
}
