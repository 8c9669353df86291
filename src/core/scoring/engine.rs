use std::collections::HashSet;

use itertools::Itertools;
use rayon::prelude::*;

use crate::core::{Position, QuerySpec, SampleStore, SampleTrack};

use super::{NeighborSelector, Outcome, ScoreRecord, SkipReason, Windowing};

pub struct ScoringEngine<S: NeighborSelector> {
    selector: S,
    exclude: HashSet<Position>,
}

impl ScoringEngine<Windowing> {
    pub fn from_query(spec: &QuerySpec) -> Self {
        Self::new(Windowing::for_query(spec), spec.remove_from_score().clone())
    }
}

impl<S: NeighborSelector> ScoringEngine<S> {
    /// Excluded positions never contribute to the background, but can still be scored themselves.
    pub fn new(selector: S, exclude: Option<HashSet<Position>>) -> Self {
        Self { selector, exclude: exclude.unwrap_or_default() }
    }

    pub fn score(&self, track: &SampleTrack, position: Position) -> Outcome {
        let row = match track.matches(position) {
            [] => return Outcome::Skipped(SkipReason::NoMatch),
            [row] => *row,
            _ => return Outcome::Skipped(SkipReason::Ambiguous),
        };
        let window = match self.selector.select(track, row) {
            Some(window) => window,
            None => return Outcome::Skipped(SkipReason::NoMatch),
        };

        let (mut weighted, mut total) = (0f64, 0f64);
        for neighbor in window.iter().filter(|x| !self.exclude.contains(&x.position)) {
            weighted += neighbor.counts * neighbor.weight;
            total += neighbor.weight;
        }
        if total == 0f64 {
            return Outcome::Skipped(SkipReason::DegenerateWindow);
        }

        let background = weighted / total;
        let counts = track.rows()[row].counts;
        let (score_b, score_c) = ((counts - background).abs() / (counts + 1f64), 1f64 - counts / background);
        // Zero background yields -inf for covered sites and 0/0 for empty ones
        if score_b.is_nan() || score_c.is_nan() {
            return Outcome::Skipped(SkipReason::UndefinedScore);
        }

        Outcome::Found(ScoreRecord { file_name: track.name().clone(), position, score_b, score_c })
    }

    /// Scores every (position, sample) pair. Records follow the positions-outer, samples-inner order;
    /// skipped pairs are dropped. `onscored` is called once per pair.
    pub fn run(&self, store: &SampleStore, positions: &[Position], onscored: impl Fn() + Sync) -> Vec<ScoreRecord>
    where
        S: Sync,
    {
        let pairs = positions.iter().cartesian_product(store.tracks().iter()).collect_vec();
        pairs
            .into_par_iter()
            .filter_map(|(position, track)| {
                let result = self.score(track, *position).found();
                onscored();
                result
            })
            .collect()
    }
}
