use std::collections::HashSet;

use derive_getters::Getters;

use super::Position;

pub const DEFAULT_POSITION_NAME: &str = "Position";

/// Run-wide scoring options.
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct QuerySpec {
    position_name: String,
    limit_to_sites: Option<HashSet<Position>>,
    remove_from_score: Option<HashSet<Position>>,
}

impl QuerySpec {
    /// Empty site sets are treated exactly like missing ones.
    pub fn new(
        position_name: impl Into<String>,
        limit_to_sites: Option<HashSet<Position>>,
        remove_from_score: Option<HashSet<Position>>,
    ) -> Self {
        Self {
            position_name: position_name.into(),
            limit_to_sites: limit_to_sites.filter(|x| !x.is_empty()),
            remove_from_score: remove_from_score.filter(|x| !x.is_empty()),
        }
    }

    #[inline]
    pub fn is_limited(&self) -> bool {
        self.limit_to_sites.is_some()
    }
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION_NAME, None, None)
    }
}
