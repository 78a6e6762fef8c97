//! Per-session viewing state.

use catalog::Movie;
use std::collections::HashSet;

/// Tracks what one session has already been shown.
///
/// `history` is append-only and chronological; `seen_titles` is derived from
/// it for O(1) membership checks. [`SessionState::record`] is the single
/// mutation entry point, which keeps the invariant that a title is in the
/// seen set exactly when it appears in history.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    history: Vec<Movie>,
    seen_titles: HashSet<String>,
}

impl SessionState {
    /// Creates a new, empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movie as shown: appends to history and marks the title seen
    pub fn record(&mut self, movie: Movie) {
        self.seen_titles.insert(movie.title.clone());
        self.history.push(movie);
    }

    /// Whether a title has been shown in this session
    pub fn is_seen(&self, title: &str) -> bool {
        self.seen_titles.contains(title)
    }

    /// Every movie shown so far, oldest first
    pub fn history(&self) -> &[Movie] {
        &self.history
    }

    /// Number of distinct titles shown
    pub fn seen_count(&self) -> usize {
        self.seen_titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Clear history and seen titles in one step
    pub fn reset(&mut self) {
        self.history.clear();
        self.seen_titles.clear();
    }
}
