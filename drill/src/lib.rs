//! An adaptive word drill.
//!
//! Terms are asked with probability proportional to how far their score is from a target. A correct first answer raises
//! the score by an amount that grows with the time since the term was last reviewed. Every credited answer is appended
//! to a journal next to the item file, so an interrupted session picks up where it left off. `merge` folds the journal
//! back into the item file.

pub mod answer;
pub mod console;
pub mod delta;
pub mod events;
pub mod items;
pub mod merge;
pub mod scheduler;
pub mod session;
pub mod shuffle;
pub mod term;

use std::path::{Path, PathBuf};

pub use console::{Console, TerminalConsole};
pub use events::ScoreEvent;
pub use scheduler::{Fenwick, PrefixSums, Scheduler, WeightIndex};
pub use session::{Outcome, ReviewSession};
pub use term::{Day, Term, TermStore};

/// The journal lives next to the item file, at `<item file>.log`.
pub fn journal_path(item_path: &Path) -> PathBuf {
    let mut path = item_path.as_os_str().to_owned();
    path.push(".log");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journal_path() {
        assert_eq!(
            journal_path(Path::new("pl_vocab_write.csv")),
            PathBuf::from("pl_vocab_write.csv.log")
        );
        assert_eq!(
            journal_path(Path::new("/data/words")),
            PathBuf::from("/data/words.log")
        );
    }
}
