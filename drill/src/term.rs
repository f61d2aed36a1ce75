use std::fmt;
use std::ops::Index;

use chrono::{Datelike, Utc};

/// Day ordinal: 0001-01-01 is day 1.
pub type Day = u32;

/// `last_reviewed` of a term that has never been answered correctly.
pub const NEVER_REVIEWED: Day = 0;

pub fn today() -> Day {
    Utc::now().date_naive().num_days_from_ce() as Day
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    /// The expected answer.
    pub target: String,
    /// What the user is shown.
    pub definition: String,
    pub score: u64,
    pub last_reviewed: Day,
}

impl Term {
    pub fn new(target: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            definition: definition.into(),
            score: 0,
            last_reviewed: NEVER_REVIEWED,
        }
    }

    /// How strongly this term should be favoured when picking. Terms at or above the target weigh nothing.
    pub fn weight(&self, target_count: u64) -> u64 {
        target_count.saturating_sub(self.score)
    }

    pub fn reviewed(&self) -> bool {
        self.last_reviewed != NEVER_REVIEWED
    }
}

/// The terms of a session, in load order. Positions are stable for the whole session, since the journal refers to terms by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TermStore {
    terms: Vec<Term>,
}

impl TermStore {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// Credits `delta` to the term at `index`, reviewed on `day`.
    ///
    /// Panics if `index` is out of range or `delta` is zero.
    pub fn apply_delta(&mut self, index: usize, delta: u64, day: Day) {
        assert!(
            index < self.terms.len(),
            "term index {index} out of range ({} terms)",
            self.terms.len()
        );
        assert!(delta > 0, "score delta must be positive");

        let term = &mut self.terms[index];
        term.score += delta;
        term.last_reviewed = day;
    }

    pub fn summary(&self, target_count: u64) -> Summary {
        Summary {
            terms: self.terms.len(),
            mastered: self
                .terms
                .iter()
                .filter(|t| t.weight(target_count) == 0)
                .count(),
            never_reviewed: self.terms.iter().filter(|t| !t.reviewed()).count(),
            total_weight: self.terms.iter().map(|t| t.weight(target_count)).sum(),
        }
    }
}

impl Index<usize> for TermStore {
    type Output = Term;

    fn index(&self, index: usize) -> &Term {
        &self.terms[index]
    }
}

impl FromIterator<Term> for TermStore {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub terms: usize,
    /// At or above the target score.
    pub mastered: usize,
    pub never_reviewed: usize,
    pub total_weight: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "terms:          {}", self.terms)?;
        writeln!(f, "mastered:       {}", self.mastered)?;
        writeln!(f, "never reviewed: {}", self.never_reviewed)?;
        write!(f, "total weight:   {}", self.total_weight)
    }
}
