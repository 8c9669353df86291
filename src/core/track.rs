use std::collections::{BTreeMap, HashSet};
use std::ops::RangeInclusive;

use derive_getters::Getters;
use derive_more::Constructor;
use itertools::Itertools;

pub type Position = i64;

#[derive(Constructor, Clone, Copy, PartialEq, Debug)]
pub struct TrackRow {
    pub position: Position,
    pub counts: f64,
}

/// Counts of a single sample, keyed by the file name it was loaded from.
///
/// Rows keep their input order. When the track is restricted to a set of sites the remaining rows are
/// packed contiguously, so row indices no longer reflect gaps between positions.
#[derive(Clone, Debug, Getters)]
pub struct SampleTrack {
    name: String,
    rows: Vec<TrackRow>,
    #[getter(skip)]
    index: BTreeMap<Position, Vec<usize>>,
}

impl SampleTrack {
    pub fn new(name: impl Into<String>, mut rows: Vec<TrackRow>, sites: Option<&HashSet<Position>>) -> Self {
        if let Some(sites) = sites {
            rows.retain(|x| sites.contains(&x.position));
        }

        let mut index: BTreeMap<Position, Vec<usize>> = BTreeMap::new();
        for (ind, row) in rows.iter().enumerate() {
            index.entry(row.position).or_default().push(ind);
        }
        Self { name: name.into(), rows, index }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of all rows located exactly at the given position.
    #[inline]
    pub fn matches(&self, position: Position) -> &[usize] {
        self.index.get(&position).map(|x| x.as_slice()).unwrap_or(&[])
    }

    /// Indices of all rows with positions inside the range, in row order.
    pub fn within(&self, range: RangeInclusive<Position>) -> Vec<usize> {
        self.index.range(range).flat_map(|(_, rows)| rows.iter().copied()).sorted_unstable().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[(Position, f64)]) -> Vec<TrackRow> {
        data.iter().map(|(pos, cnt)| TrackRow::new(*pos, *cnt)).collect()
    }

    #[test]
    fn unrestricted() {
        let track = SampleTrack::new("sample.bedgraph", rows(&[(1, 0.0), (2, 1.0), (5, 2.0)]), None);
        assert_eq!(track.name(), "sample.bedgraph");
        assert_eq!(track.len(), 3);
        assert_eq!(track.matches(2), &[1]);
        assert_eq!(track.matches(5), &[2]);
        assert!(track.matches(3).is_empty());
    }

    #[test]
    fn restricted_to_sites() {
        let sites: HashSet<Position> = [5, 50, 100, 1000].into_iter().collect();
        let data = rows(&[(1, 1.0), (5, 2.0), (7, 3.0), (50, 4.0), (100, 5.0), (101, 6.0)]);
        let track = SampleTrack::new("x", data, Some(&sites));

        assert_eq!(track.rows(), &rows(&[(5, 2.0), (50, 4.0), (100, 5.0)]));
        assert_eq!(track.matches(5), &[0]);
        assert_eq!(track.matches(50), &[1]);
        assert_eq!(track.matches(100), &[2]);
        assert!(track.matches(7).is_empty());
        assert!(track.matches(1000).is_empty());
    }

    #[test]
    fn empty() {
        let sites: HashSet<Position> = [1, 2].into_iter().collect();
        let track = SampleTrack::new("x", rows(&[(3, 1.0)]), Some(&sites));
        assert!(track.is_empty());
        assert!(track.matches(3).is_empty());
        assert!(track.within(0..=10).is_empty());
    }

    #[test]
    fn duplicates() {
        let track = SampleTrack::new("x", rows(&[(1, 1.0), (2, 2.0), (2, 3.0), (3, 4.0)]), None);
        assert_eq!(track.matches(2), &[1, 2]);
        assert_eq!(track.within(2..=3), vec![1, 2, 3]);
    }

    #[test]
    fn within_keeps_row_order() {
        let track = SampleTrack::new("x", rows(&[(12, 0.0), (10, 1.0), (11, 2.0), (14, 3.0), (20, 4.0)]), None);
        assert_eq!(track.within(10..=14), vec![0, 1, 2, 3]);
        assert_eq!(track.within(11..=12), vec![0, 2]);
        assert_eq!(track.within(15..=19), Vec::<usize>::new());
    }
}
