pub use engine::ScoringEngine;
pub use outcome::{Outcome, ScoreRecord, SkipReason};
pub use window::{ByIndex, ByValue, Neighbor, NeighborSelector, Windowing, WEIGHTS};

mod engine;
mod outcome;
pub mod window;
