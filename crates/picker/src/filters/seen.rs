//! Filter to remove movies the session has already been shown.
//!
//! This is always the first filter in the pipeline: a seen title must never
//! come back until the session is reset.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use session::SessionState;

/// Removes candidates whose title is in the session's seen set.
///
/// ## Algorithm
/// Uses the HashSet behind `SessionState::is_seen` for O(1) lookups.
pub struct SeenFilter;

impl Filter for SeenFilter {
    fn name(&self) -> &str {
        "SeenFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, session: &SessionState) -> Result<Vec<Movie>> {
        let filtered: Vec<Movie> = candidates
            .into_iter()
            .filter(|movie| !session.is_seen(&movie.title))
            .collect();
        Ok(filtered)
    }
}
