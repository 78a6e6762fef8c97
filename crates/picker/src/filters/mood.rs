//! Filter to keep only movies matching a mood keyword.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use session::SessionState;

/// Keeps candidates whose mood field contains the keyword.
///
/// The match is a case-insensitive substring test against the record's
/// free-text mood field, so a record with mood "Dark Comedy" matches the
/// keyword "comedy".
pub struct MoodFilter {
    /// Keyword lowered once at construction
    keyword: String,
}

impl MoodFilter {
    /// Create a new MoodFilter.
    ///
    /// # Arguments
    /// * `keyword` - The mood word to look for (any case)
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
        }
    }
}

impl Filter for MoodFilter {
    fn name(&self) -> &str {
        "MoodFilter"
    }

    fn apply(&self, candidates: Vec<Movie>, _session: &SessionState) -> Result<Vec<Movie>> {
        let filtered: Vec<Movie> = candidates
            .into_iter()
            .filter(|movie| movie.mood.to_lowercase().contains(&self.keyword))
            .collect();
        Ok(filtered)
    }
}
