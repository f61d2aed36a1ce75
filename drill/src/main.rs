use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use drill::merge::MergeError;
use drill::{Fenwick, PrefixSums, ReviewSession, TermStore, TerminalConsole, WeightIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Practice spelling: asks the terms you know least, most often.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Tab-separated item file. The journal is kept next to it, with `.log` appended.
    #[arg(short = 'p', long, default_value = "pl_vocab_write.csv")]
    path: PathBuf,

    /// Score at which a term stops being asked.
    #[arg(
        short = 't',
        long = "target",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    target_count: u64,

    /// Fold the journal into the item file and exit.
    #[arg(short, long, conflicts_with_all = ["drill", "status"])]
    merge: bool,

    /// Ask every term once in random order, without scoring.
    #[arg(short, long, conflicts_with = "status")]
    drill: bool,

    /// Print progress towards the target and exit.
    #[arg(long)]
    status: bool,

    /// Seed for picking terms. Drawn at random if not given.
    #[arg(long)]
    seed: Option<u64>,

    /// How term weights are indexed. Both pick identically.
    #[arg(long, value_enum, default_value_t = IndexKind::Linear)]
    index: IndexKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IndexKind {
    /// Cumulative array, linear update
    Linear,
    /// Binary indexed tree, logarithmic update
    Fenwick,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let journal = drill::journal_path(&args.path);

    let terms = drill::items::load_terms(&args.path)
        .with_context(|| format!("could not load {}", args.path.display()))?;
    if terms.is_empty() {
        log::warn!("{} has no terms", args.path.display());
        return Ok(());
    }

    if args.merge {
        let merged = drill::merge::merge(&args.path, &journal, terms)
            .map_err(|e| explain_merge(e, &journal))?;
        println!(
            "Merged {} into {}",
            journal.display(),
            args.path.display()
        );
        println!("{}", merged.summary(args.target_count));
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    if args.status {
        let mut terms = terms;
        ledger::data_model::replay(&journal, &mut terms).map_err(|e| explain(e, &journal))?;
        println!("{}", terms.summary(args.target_count));
        return Ok(());
    }

    if args.drill {
        let mut console = TerminalConsole::new();
        drill::shuffle::shuffled_pass(&terms, &mut console, &mut rng)?;
        return Ok(());
    }

    match args.index {
        IndexKind::Linear => review::<PrefixSums>(terms, &journal, args.target_count, &mut rng),
        IndexKind::Fenwick => review::<Fenwick>(terms, &journal, args.target_count, &mut rng),
    }
}

fn review<I: WeightIndex>(
    terms: TermStore,
    journal: &Path,
    target_count: u64,
    rng: &mut ChaCha8Rng,
) -> Result<()> {
    let mut session = ReviewSession::<I>::start(terms, journal, target_count)
        .map_err(|e| explain(e, journal))?;

    let mut console = TerminalConsole::new();
    let outcome = session.run(&mut console, rng, drill::term::today)?;
    log::info!("Session ended: {outcome:?}");
    Ok(())
}

fn explain(error: ledger::Error, journal: &Path) -> anyhow::Error {
    let hint = match &error {
        ledger::Error::Mismatch { .. } => format!(
            "{} was written for a different set of terms; merge it with the item file it belongs to, or remove it",
            journal.display()
        ),
        _ => format!("could not use journal {}", journal.display()),
    };
    anyhow::Error::new(error).context(hint)
}

fn explain_merge(error: MergeError, journal: &Path) -> anyhow::Error {
    match error {
        MergeError::Journal(error) => explain(error, journal),
        error => error.into(),
    }
}
