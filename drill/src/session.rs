use std::io;
use std::path::Path;

use ledger::AppState;
use ledger::data_model::Journal;
use rand::Rng;

use crate::answer::{Asked, ask};
use crate::console::Console;
use crate::delta::compute_delta;
use crate::events::ScoreEvent;
use crate::scheduler::{PrefixSums, Scheduler, WeightIndex};
use crate::term::{Day, TermStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every term reached the target score.
    Completed,
    /// Input ran out first. Everything answered so far is in the journal.
    Interrupted,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O failed")]
    Console(#[from] io::Error),

    #[error("could not record the answer")]
    Journal(#[from] ledger::Error),
}

/// An adaptive review over one term set and its journal.
pub struct ReviewSession<I = PrefixSums> {
    terms: TermStore,
    scheduler: Scheduler<I>,
    journal: Journal<ScoreEvent>,
}

impl<I: WeightIndex> ReviewSession<I> {
    /// Replays the journal at `journal_path` over `terms`, then opens it for appending.
    /// The journal is created if it doesn't exist yet.
    pub fn start(
        mut terms: TermStore,
        journal_path: impl AsRef<Path>,
        target_count: u64,
    ) -> Result<Self, ledger::Error> {
        let journal_path = journal_path.as_ref();
        ledger::data_model::replay(journal_path, &mut terms)?;
        let journal = Journal::open(journal_path, terms.fingerprint())?;
        let scheduler = Scheduler::new(&terms, target_count);

        log::info!(
            "Starting review of {} terms towards {}, total weight {}",
            terms.len(),
            scheduler.target_count(),
            scheduler.total_weight()
        );

        Ok(Self {
            terms,
            scheduler,
            journal,
        })
    }

    pub fn terms(&self) -> &TermStore {
        &self.terms
    }

    pub fn scheduler(&self) -> &Scheduler<I> {
        &self.scheduler
    }

    /// Credits a correct first answer on the term at `index`.
    /// The event is in the journal before the scores change.
    pub fn score(&mut self, index: usize, day: Day) -> Result<ScoreEvent, ledger::Error> {
        let event = ScoreEvent {
            index,
            delta: compute_delta(&self.terms[index], day),
            day,
        };
        self.journal.append(&event)?;
        self.scheduler
            .apply_and_reweight(&mut self.terms, index, event.delta, day);
        Ok(event)
    }

    /// Asks terms until every one has reached the target or input runs out.
    /// `today` is consulted at the moment each answer is credited.
    pub fn run<C, R>(
        &mut self,
        console: &mut C,
        rng: &mut R,
        mut today: impl FnMut() -> Day,
    ) -> Result<Outcome, SessionError>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        while let Some(index) = self.scheduler.pick(rng) {
            let status = format!("total weight is {}", self.scheduler.total_weight());
            match ask(console, &self.terms[index], &status)? {
                Asked::FirstTry => {
                    let event = self.score(index, today())?;
                    log::debug!("Credited {event:?}");
                }
                Asked::Eventually => {}
                Asked::EndOfInput => {
                    log::info!(
                        "Input closed after {} credited answers, kept in {}",
                        self.journal.appended(),
                        self.journal.path().display()
                    );
                    return Ok(Outcome::Interrupted);
                }
            }
        }

        console.show("Every term has reached the target score.")?;
        Ok(Outcome::Completed)
    }
}
