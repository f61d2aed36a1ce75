use std::io;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::answer::{Asked, ask};
use crate::console::Console;
use crate::term::TermStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrillReport {
    pub asked: usize,
    pub first_try: usize,
}

/// Asks every term once, in random order. Nothing is scored or journaled.
pub fn shuffled_pass<C, R>(
    terms: &TermStore,
    console: &mut C,
    rng: &mut R,
) -> io::Result<DrillReport>
where
    C: Console + ?Sized,
    R: Rng + ?Sized,
{
    let mut order: Vec<usize> = (0..terms.len()).collect();
    order.shuffle(rng);

    let mut report = DrillReport::default();
    for (n, &index) in order.iter().enumerate() {
        let status = format!("{} / {}", n + 1, order.len());
        match ask(console, &terms[index], &status)? {
            Asked::FirstTry => report.first_try += 1,
            Asked::Eventually => {}
            Asked::EndOfInput => break,
        }
        report.asked += 1;
    }

    console.show(&format!(
        "{} of {} right on the first try.",
        report.first_try, report.asked
    ))?;
    Ok(report)
}
