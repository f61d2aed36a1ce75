use std::fs;

use drill::items::load_terms;
use drill::merge::{MergeError, merge};
use drill::{PrefixSums, ReviewSession, journal_path};

const ITEMS: &str = "# vocabulary\nkot\tcat\npies\tdog\t12\t739400\nna stole\ton the table\n";

#[test]
fn merge_then_reload_reproduces_scores() {
    let dir = tempfile::tempdir().unwrap();
    let items = dir.path().join("words.csv");
    fs::write(&items, ITEMS).unwrap();
    let journal = journal_path(&items);

    let mut session =
        ReviewSession::<PrefixSums>::start(load_terms(&items).unwrap(), &journal, 100).unwrap();
    session.score(0, 739479).unwrap();
    session.score(1, 739479).unwrap();
    session.score(0, 739480).unwrap();
    let before = session.terms().clone();
    drop(session);

    let merged = merge(&items, &journal, load_terms(&items).unwrap()).unwrap();
    assert_eq!(merged, before);
    assert!(!journal.exists());
    assert_eq!(
        fs::read_to_string(&items).unwrap(),
        "kot\tcat\t5\t739480\npies\tdog\t96\t739479\nna stole\ton the table\n"
    );

    let mut reloaded = load_terms(&items).unwrap();
    assert_eq!(ledger::data_model::replay(&journal, &mut reloaded).unwrap(), 0);
    assert_eq!(reloaded, before);

    // the next session starts a fresh journal on top of the merged scores
    let session = ReviewSession::<PrefixSums>::start(reloaded, &journal, 100).unwrap();
    assert_eq!(session.scheduler().total_weight(), 95 + 4 + 100);
    assert_eq!(fs::read_to_string(&journal).unwrap(), "id\t3\n");
}

#[test]
fn merge_without_journal_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let items = dir.path().join("words.csv");
    fs::write(&items, ITEMS).unwrap();

    let err = merge(&items, journal_path(&items), load_terms(&items).unwrap()).unwrap_err();
    assert!(matches!(err, MergeError::NoJournal(_)), "{err:?}");
    assert_eq!(fs::read_to_string(&items).unwrap(), ITEMS);
}

#[test]
fn merge_with_foreign_journal_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let items = dir.path().join("words.csv");
    fs::write(&items, ITEMS).unwrap();
    let journal = journal_path(&items);
    fs::write(&journal, "id\t4\n3\t1\t739479\n").unwrap();

    let err = merge(&items, &journal, load_terms(&items).unwrap()).unwrap_err();
    assert!(
        matches!(
            err,
            MergeError::Journal(ledger::Error::Mismatch {
                expected: 3,
                found: 4
            })
        ),
        "{err:?}"
    );
    assert_eq!(fs::read_to_string(&items).unwrap(), ITEMS);
    assert!(journal.exists());
}
