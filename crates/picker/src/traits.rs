//! Core traits for the suggestion pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use anyhow::Result;
use catalog::Movie;
use session::SessionState;

/// Core trait for filtering suggestion candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across request handlers
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec
/// - This allows for efficient transformations without unnecessary cloning
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `session` - Session state with the titles already shown
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - The filtered candidates
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Movie>, session: &SessionState) -> Result<Vec<Movie>>;
}
