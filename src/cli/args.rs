use std::path::PathBuf;

use clap::{Arg, ArgMatches};
use indicatif::ProgressBar;

use crate::core::{Position, QuerySpec, Result};

use super::{parse, validate};

pub mod core {
    use super::*;

    pub const INPUT: &str = "samples";
    pub const QUERY_SITES: &str = "query-sites";
    pub const SAVETO: &str = "output";
    pub const THREADS: &str = "threads";

    pub const SECTION_NAME: &str = "Core";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(INPUT)
                .value_name("SAMPLES")
                .required(true)
                .takes_value(true)
                .multiple_values(true)
                .validator(validate::path)
                .long_help("Path to the input bedgraph file(s), plain or gzip-compressed. Positions are read from the second column and counts from the fourth one. Each file is a separate sample named after its file name."),
            Arg::new(QUERY_SITES)
                .long(QUERY_SITES)
                .required(true)
                .takes_value(true)
                .validator(validate::path)
                .long_help("File with positions to score, one integer per line. Every position is scored in every sample."),
            Arg::new(SAVETO)
                .short('o')
                .long(SAVETO)
                .required(true)
                .takes_value(true)
                .validator(validate::writable)
                .long_help("Path to the output csv file."),
            Arg::new(THREADS)
                .short('t')
                .long(THREADS)
                .takes_value(true)
                .validator(validate::numeric(1, usize::MAX))
                .default_value("1")
                .long_help("Maximum number of threads to spawn at once."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub mod sites {
    use super::*;

    pub const LIMIT_SITES: &str = "limit-sites";
    pub const EXCLUDE_SCORE: &str = "exclude-score";
    pub const COLUMN_NAME: &str = "column-name";

    pub const SECTION_NAME: &str = "Sites";

    pub fn args<'a>() -> Vec<Arg<'a>> {
        let args = vec![
            Arg::new(LIMIT_SITES)
                .long(LIMIT_SITES)
                .takes_value(true)
                .validator(validate::path)
                .long_help("File with sites of interest, one integer per line (e.g. all T positions of the rDNA). Samples are restricted to these sites and the background is estimated from the two preceding and the two following sites of the list, regardless of the actual distance between them. Without this option, the background is estimated from positions within ±2 of the scored one."),
            Arg::new(EXCLUDE_SCORE)
                .long(EXCLUDE_SCORE)
                .takes_value(true)
                .validator(validate::path)
                .long_help("File with positions that must not contribute to the background estimation, one integer per line. These positions are still scored if requested."),
            Arg::new(COLUMN_NAME)
                .long(COLUMN_NAME)
                .takes_value(true)
                .validator(validate::label)
                .default_value(crate::core::DEFAULT_POSITION_NAME)
                .long_help("Name of the position column in the output table."),
        ];
        args.into_iter().map(|x| x.help_heading(Some(SECTION_NAME))).collect()
    }
}

pub fn all<'a>() -> Vec<Arg<'a>> {
    core::args().into_iter().chain(sites::args().into_iter()).collect()
}

pub struct ScoreArgs {
    pub threads: usize,
    pub samples: Vec<PathBuf>,
    pub queries: Vec<Position>,
    pub spec: QuerySpec,
    pub saveto: PathBuf,
}

impl ScoreArgs {
    pub fn new(args: &ArgMatches, factory: impl Fn() -> ProgressBar) -> Result<Self> {
        let spec = QuerySpec::new(
            parse::column_name(factory(), args),
            parse::limit(factory(), args)?,
            parse::exclude(factory(), args)?,
        );
        Ok(Self {
            threads: parse::threads(factory(), args),
            samples: parse::samples(factory(), args),
            queries: parse::queries(factory(), args)?,
            spec,
            saveto: parse::saveto(factory(), args),
        })
    }
}
