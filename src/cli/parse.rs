use std::collections::HashSet;
use std::path::PathBuf;

use clap::ArgMatches;
use indicatif::ProgressBar;
use itertools::Itertools;

use crate::core::io::sites;
use crate::core::{Position, Result, SampleStore, DEFAULT_POSITION_NAME};

use super::args;

pub fn threads(pbar: ProgressBar, matches: &ArgMatches) -> usize {
    pbar.set_message("Parsing number of threads allowed to launch...");
    let result = matches.value_of(args::core::THREADS).and_then(|x| x.parse().ok()).unwrap_or(1);
    pbar.finish_with_message(format!("Using thread pool with at most {} threads", result));
    result
}

pub fn samples(pbar: ProgressBar, matches: &ArgMatches) -> Vec<PathBuf> {
    pbar.set_message("Parsing paths to the input files...");
    let result: Vec<PathBuf> =
        matches.values_of(args::core::INPUT).map(|x| x.map(PathBuf::from).collect()).unwrap_or_default();
    if let [single] = result.as_slice() {
        pbar.finish_with_message(format!("Input file path: {}", single.display()))
    } else {
        let paths = result.iter().map(|x| x.display()).join(" ");
        pbar.finish_with_message(format!("Input files ({} samples): {}", result.len(), paths));
    }
    result
}

pub fn queries(pbar: ProgressBar, matches: &ArgMatches) -> Result<Vec<Position>> {
    pbar.set_message("Parsing query sites...");
    let result = sites::parse(matches.value_of(args::core::QUERY_SITES).unwrap_or_default())?;
    pbar.finish_with_message(format!(
        "Will score {} query sites ({} unique)",
        result.len(),
        result.iter().unique().count()
    ));
    Ok(result)
}

pub fn limit(pbar: ProgressBar, matches: &ArgMatches) -> Result<Option<HashSet<Position>>> {
    pbar.set_message("Parsing sites of interest...");
    let result = matches.value_of(args::sites::LIMIT_SITES).map(sites::parse_set).transpose()?;
    match &result {
        None => pbar.finish_with_message("Sites of interest are not provided: background from positions within ±2"),
        Some(x) if x.is_empty() => pbar.finish_with_message("Sites of interest list is empty and will be ignored"),
        Some(x) => pbar.finish_with_message(format!(
            "Samples are limited to {} sites of interest: background from ±2 adjacent sites",
            x.len()
        )),
    };
    Ok(result)
}

pub fn exclude(pbar: ProgressBar, matches: &ArgMatches) -> Result<Option<HashSet<Position>>> {
    pbar.set_message("Parsing positions excluded from the background...");
    let result = matches.value_of(args::sites::EXCLUDE_SCORE).map(sites::parse_set).transpose()?;
    match &result {
        Some(x) if !x.is_empty() => {
            pbar.finish_with_message(format!("{} positions are excluded from the background", x.len()))
        }
        _ => pbar.finish_with_message("All positions contribute to the background"),
    };
    Ok(result)
}

pub fn column_name(pbar: ProgressBar, matches: &ArgMatches) -> String {
    pbar.set_message("Parsing the position column name...");
    let result = matches.value_of(args::sites::COLUMN_NAME).unwrap_or(DEFAULT_POSITION_NAME).to_owned();
    pbar.finish_with_message(format!("Position column name: {}", result));
    result
}

pub fn saveto(pbar: ProgressBar, matches: &ArgMatches) -> PathBuf {
    pbar.set_message("Parsing output path...");
    let result: PathBuf = matches.value_of(args::core::SAVETO).unwrap_or_default().into();
    pbar.finish_with_message(format!("Result will be saved to {}", result.display()));
    result
}

pub fn store(pbar: ProgressBar, samples: &[PathBuf], sites: Option<&HashSet<Position>>) -> Result<SampleStore> {
    pbar.set_message("Loading sample tracks...");
    let result = SampleStore::load(samples, sites, |x| {
        pbar.set_message(format!("Loaded {} with {} rows", x.name(), x.len()));
    })?;
    pbar.finish_with_message(format!("Loaded {} sample tracks with {} rows in total", result.len(), result.rows()));
    Ok(result)
}
