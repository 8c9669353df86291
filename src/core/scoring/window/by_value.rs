use crate::core::{Position, SampleTrack};

use super::{Neighbor, NeighborSelector, HALF_WIDTH, WEIGHTS};

/// Neighbors are all rows within two positions of the scored one, weighted by the actual distance.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct ByValue;

impl NeighborSelector for ByValue {
    fn select(&self, track: &SampleTrack, row: usize) -> Option<Vec<Neighbor>> {
        let rows = track.rows();
        let position = rows[row].position;

        let span = HALF_WIDTH as Position;
        let window: Vec<Neighbor> = track
            .within(position.saturating_sub(span)..=position.saturating_add(span))
            .into_iter()
            .map(|ind| {
                let x = rows[ind];
                let distance = (position - x.position).unsigned_abs() as usize;
                Neighbor::new(x.position, x.counts, WEIGHTS[HALF_WIDTH + distance])
            })
            .collect();

        if !window.iter().any(|x| x.position == position) {
            return None;
        }
        Some(window)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::TrackRow;

    use super::*;

    fn track(positions: &[Position]) -> SampleTrack {
        let rows = positions.iter().map(|pos| TrackRow::new(*pos, *pos as f64 * 10.0)).collect();
        SampleTrack::new("x", rows, None)
    }

    fn weights(track: &SampleTrack, row: usize) -> Vec<(Position, f64)> {
        ByValue.select(track, row).unwrap().into_iter().map(|x| (x.position, x.weight)).collect()
    }

    #[test]
    fn symmetric() {
        let dummy = track(&[8, 9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(weights(&dummy, 4), vec![(10, 0.9), (11, 1.0), (12, 0.0), (13, 1.0), (14, 0.9)]);

        let counts: Vec<f64> = ByValue.select(&dummy, 4).unwrap().iter().map(|x| x.counts).collect();
        assert_eq!(counts, vec![100.0, 110.0, 120.0, 130.0, 140.0]);
    }

    #[test]
    fn gaps() {
        let dummy = track(&[1, 10, 12, 13, 30]);
        assert_eq!(weights(&dummy, 2), vec![(10, 0.9), (12, 0.0), (13, 1.0)]);
        assert_eq!(weights(&dummy, 0), vec![(1, 0.0)]);
        assert_eq!(weights(&dummy, 4), vec![(30, 0.0)]);

        let dummy = track(&[10, 14]);
        assert_eq!(weights(&dummy, 0), vec![(10, 0.0)]);
    }

    #[test]
    fn track_edges() {
        let dummy = track(&[0, 1, 2, 3]);
        assert_eq!(weights(&dummy, 0), vec![(0, 0.0), (1, 1.0), (2, 0.9)]);
        assert_eq!(weights(&dummy, 3), vec![(1, 0.9), (2, 1.0), (3, 0.0)]);

        let dummy = track(&[Position::MAX - 1, Position::MAX]);
        assert_eq!(weights(&dummy, 1), vec![(Position::MAX - 1, 1.0), (Position::MAX, 0.0)]);
    }

    #[test]
    fn duplicated_neighbors() {
        let rows = vec![TrackRow::new(4, 1.0), TrackRow::new(5, 2.0), TrackRow::new(6, 3.0), TrackRow::new(4, 4.0)];
        let dummy = SampleTrack::new("x", rows, None);
        assert_eq!(weights(&dummy, 1), vec![(4, 1.0), (5, 0.0), (6, 1.0), (4, 1.0)]);
    }

    #[test]
    fn unsorted() {
        let dummy = track(&[12, 10, 11, 14, 13]);
        assert_eq!(weights(&dummy, 0), vec![(12, 0.0), (10, 0.9), (11, 1.0), (14, 0.9), (13, 1.0)]);
    }
}
