use std::collections::HashSet;
use std::path::Path;

use derive_getters::Getters;

use super::io::bedgraph;
use super::{Position, Result, SampleTrack};

/// Sample tracks in input order, one per unique file name.
#[derive(Clone, Debug, Default, Getters)]
pub struct SampleStore {
    tracks: Vec<SampleTrack>,
}

impl SampleStore {
    /// A track with an already seen name replaces the previous one in place.
    pub fn new(tracks: impl IntoIterator<Item = SampleTrack>) -> Self {
        let mut result: Vec<SampleTrack> = Vec::new();
        for track in tracks {
            match result.iter_mut().find(|x| x.name() == track.name()) {
                Some(previous) => *previous = track,
                None => result.push(track),
            }
        }
        Self { tracks: result }
    }

    pub fn load(
        files: &[impl AsRef<Path>],
        sites: Option<&HashSet<Position>>,
        mut onloaded: impl FnMut(&SampleTrack),
    ) -> Result<Self> {
        let mut tracks = Vec::with_capacity(files.len());
        for file in files {
            let file = file.as_ref();
            let name = file.file_name().map(|x| x.to_string_lossy().into_owned()).unwrap_or_default();
            let track = SampleTrack::new(name, bedgraph::parse(file)?, sites);
            onloaded(&track);
            tracks.push(track);
        }
        Ok(Self::new(tracks))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Total number of rows across all tracks.
    pub fn rows(&self) -> usize {
        self.tracks.iter().map(|x| x.len()).sum()
    }
}
