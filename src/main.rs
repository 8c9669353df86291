use clap::{crate_description, crate_name, crate_version, App};
use indicatif::ProgressBar;
use rayon::ThreadPoolBuilder;

use modscore::cli;

fn main() {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .max_term_width(120)
        .args(cli::args::all())
        .get_matches();

    let factory = || ProgressBar::new_spinner().with_style(cli::style::parse::with_progress());

    let result = cli::ScoreArgs::new(&matches, factory).and_then(|args| {
        ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .expect("Failed to initialize global thread pool");
        cli::run(args, factory)
    });

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
