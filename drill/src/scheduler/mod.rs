//! # Scheduler
//! Picks the next term to ask with probability proportional to its weight (`target_count - score`, floored at 0),
//! and keeps the weights current as scores go up.
//!
//! The weights live in a [`WeightIndex`]: something that can answer "which term does the n-th unit of weight belong to".
//! [`PrefixSums`] is the straightforward cumulative array, rebuilt once at session start and patched by a suffix walk after each answer.
//! [`Fenwick`] answers the same questions in logarithmic time. Both give identical picks for identical draws.

mod fenwick;
mod prefix_sums;

pub use fenwick::Fenwick;
pub use prefix_sums::PrefixSums;

use rand::Rng;

use crate::term::{Day, TermStore};

pub trait WeightIndex {
    fn from_weights(weights: &[u64]) -> Self
    where
        Self: Sized;

    fn len(&self) -> usize;

    fn total(&self) -> u64;

    /// Sum of the weights at positions `0..=index`.
    fn cumulative(&self, index: usize) -> u64;

    /// The smallest index whose cumulative weight reaches `draw`. Requires `1 <= draw <= total()`.
    fn lower_bound(&self, draw: u64) -> usize;

    /// Lowers the weight at `index` by `amount`, and with it every cumulative sum from `index` on.
    fn reduce(&mut self, index: usize, amount: u64);

    /// The weight currently held at `index`.
    fn weight(&self, index: usize) -> u64 {
        match index {
            0 => self.cumulative(0),
            _ => self.cumulative(index) - self.cumulative(index - 1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scheduler<I = PrefixSums> {
    weights: I,
    target_count: u64,
}

impl<I: WeightIndex> Scheduler<I> {
    /// Builds the weights of `terms` from scratch.
    ///
    /// Panics if `target_count` is zero.
    pub fn new(terms: &TermStore, target_count: u64) -> Self {
        assert!(target_count > 0, "target score must be positive");
        let weights: Vec<u64> = terms.iter().map(|t| t.weight(target_count)).collect();
        Self {
            weights: I::from_weights(&weights),
            target_count,
        }
    }

    pub fn target_count(&self) -> u64 {
        self.target_count
    }

    /// Zero once every term has reached the target.
    pub fn total_weight(&self) -> u64 {
        self.weights.total()
    }

    /// The cumulative weight array.
    pub fn cumulative(&self) -> Vec<u64> {
        (0..self.weights.len())
            .map(|i| self.weights.cumulative(i))
            .collect()
    }

    /// Returns None when nothing is left to ask.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let draw = rng.random_range(1..=total);
        Some(self.weights.lower_bound(draw))
    }

    /// Credits `delta` to the term at `index` and lowers its weight to match the new score.
    /// A term that reaches the target drops out of the draw entirely.
    pub fn apply_and_reweight(
        &mut self,
        terms: &mut TermStore,
        index: usize,
        delta: u64,
        day: Day,
    ) {
        terms.apply_delta(index, delta, day);

        let held = self.weights.weight(index);
        let remaining = terms[index].weight(self.target_count);
        debug_assert!(remaining <= held, "weights out of sync with term {index}");
        if held > remaining {
            self.weights.reduce(index, held - remaining);
        }
    }
}
