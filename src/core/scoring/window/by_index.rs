use std::cmp::min;

use crate::core::SampleTrack;

use super::{Neighbor, NeighborSelector, HALF_WIDTH, WEIGHTS};

/// Neighbors are the adjacent rows, whatever their positions are.
/// Meant for tracks restricted to a sparse site list, where row adjacency stands for site adjacency.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct ByIndex;

impl NeighborSelector for ByIndex {
    fn select(&self, track: &SampleTrack, row: usize) -> Option<Vec<Neighbor>> {
        let rows = track.rows();
        debug_assert!(row < rows.len());

        let (start, end) = (row.saturating_sub(HALF_WIDTH), min(row + HALF_WIDTH + 1, rows.len()));
        // Weights are clipped together with the window: leading ones near the track start, trailing ones near its end
        let wstart = HALF_WIDTH - min(row, HALF_WIDTH);
        let wend = wstart + (end - start);

        let window = rows[start..end]
            .iter()
            .zip(&WEIGHTS[wstart..wend])
            .map(|(x, weight)| Neighbor::new(x.position, x.counts, *weight))
            .collect();
        Some(window)
    }
}
