use std::fs::File;
use std::io::BufWriter;

use indicatif::ProgressBar;

use crate::cli::args::ScoreArgs;
use crate::core::scoring::ScoringEngine;
use crate::core::{Error, Result};

use super::{parse, resformat, style};

/// Loads the samples, scores all requested (position, sample) pairs and saves the results.
/// Must be called inside the thread pool that should run the scoring.
pub fn run(args: ScoreArgs, factory: impl Fn() -> ProgressBar) -> Result<()> {
    let store = parse::store(factory(), &args.samples, args.spec.limit_to_sites().as_ref())?;
    let engine = ScoringEngine::from_query(&args.spec);

    // Callbacks to track progress
    let pbar = factory();
    pbar.set_style(style::run::running());
    let pairs = args.queries.len() * store.len();
    pbar.set_length(pairs as u64);

    let records = engine.run(&store, &args.queries, || pbar.inc(1));

    pbar.set_style(style::run::finished());
    pbar.finish_with_message(format!("Finished with {} scored pairs out of {}", records.len(), pairs));

    let saveto = File::create(&args.saveto).map_err(|source| Error::Io { path: args.saveto.clone(), source })?;
    let mut saveto = csv::WriterBuilder::new().has_headers(false).from_writer(BufWriter::new(saveto));
    resformat::scores(&mut saveto, args.spec.position_name(), &records)?;
    Ok(())
}
