pub use args::ScoreArgs;
pub use run::run;

pub mod args;
mod parse;
pub mod resformat;
mod run;
pub mod style;
mod validate;
