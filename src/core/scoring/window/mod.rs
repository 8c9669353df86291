use derive_more::Constructor;
#[cfg(test)]
use mockall::automock;

pub use by_index::ByIndex;
pub use by_value::ByValue;

use crate::core::{Position, QuerySpec, SampleTrack};

mod by_index;
mod by_value;

/// Background weights for offsets -2..=2 around the scored position.
pub const WEIGHTS: [f64; 5] = [0.9, 1.0, 0.0, 1.0, 0.9];
pub const HALF_WIDTH: usize = 2;

#[derive(Constructor, Clone, Copy, PartialEq, Debug)]
pub struct Neighbor {
    pub position: Position,
    pub counts: f64,
    pub weight: f64,
}

#[cfg_attr(test, automock)]
pub trait NeighborSelector {
    /// Weighted window around `row`, the only track row located at the scored position.
    /// The scored row itself is part of the window with a zero weight.
    fn select(&self, track: &SampleTrack, row: usize) -> Option<Vec<Neighbor>>;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Windowing {
    ByIndex(ByIndex),
    ByValue(ByValue),
}

impl Windowing {
    /// Tracks restricted to a sparse site list are scanned by row adjacency, all others by position distance.
    pub fn for_query(spec: &QuerySpec) -> Self {
        if spec.is_limited() {
            Windowing::ByIndex(ByIndex)
        } else {
            Windowing::ByValue(ByValue)
        }
    }
}

impl NeighborSelector for Windowing {
    #[inline]
    fn select(&self, track: &SampleTrack, row: usize) -> Option<Vec<Neighbor>> {
        match self {
            Windowing::ByIndex(x) => x.select(track, row),
            Windowing::ByValue(x) => x.select(track, row),
        }
    }
}
