use crate::term::{Day, NEVER_REVIEWED, Term};

/// Score credited per day since the last review.
pub const CREDIT_PER_DAY: u64 = 4;

/// Reached after three weeks away.
pub const MAX_DELTA: u64 = 84;

/// How much a correct first answer on `today` adds to `term`'s score.
///
/// Fresh terms and terms already reviewed today get 1. Otherwise the credit grows with the number of days
/// since the last review, so terms that are remembered after a long break leave the rotation quickly.
///
/// Panics if the term was last reviewed after `today`.
pub fn compute_delta(term: &Term, today: Day) -> u64 {
    if term.last_reviewed == NEVER_REVIEWED {
        return 1;
    }
    assert!(
        term.last_reviewed <= today,
        "term `{}` was last reviewed on day {}, which is after today ({today})",
        term.target,
        term.last_reviewed
    );

    match u64::from(today - term.last_reviewed) {
        0 => 1,
        elapsed => (elapsed * CREDIT_PER_DAY).min(MAX_DELTA),
    }
}
