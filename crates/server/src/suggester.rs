//! # Suggester
//!
//! This module coordinates one suggestion request:
//! 1. Gather candidates for the requested mode
//! 2. Apply filters (seen exclusion, then the mood criterion if any)
//! 3. Pick one candidate uniformly at random
//! 4. Record the pick in the session — exactly once per success

use std::sync::Arc;

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use catalog::{Catalog, Language, Movie};
use picker::filters::{MoodFilter, SeenFilter};
use picker::{FilterPipeline, choose_uniform};
use session::SessionState;

/// How a suggestion request scopes and filters the catalog.
///
/// Serialized form doubles as the HTTP request body, e.g.
/// `{"mode": "mood", "keyword": "comedy"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SuggestMode {
    /// Unseen movies from one language shelf
    Language { language: Language },
    /// Unseen movies from all language shelves whose mood matches the
    /// keyword (case-insensitive substring)
    Mood { keyword: String },
    /// Any unseen movie from the language shelves
    Random,
    /// Unseen movies from the trending shelf
    Trending,
}

impl SuggestMode {
    /// Short label used in logs and headers
    pub fn label(&self) -> &'static str {
        match self {
            SuggestMode::Language { .. } => "language",
            SuggestMode::Mood { .. } => "mood",
            SuggestMode::Random => "random",
            SuggestMode::Trending => "trending",
        }
    }

    /// User-facing notice for the empty-result outcome
    pub fn empty_notice(&self) -> String {
        match self {
            SuggestMode::Language { language } => {
                format!("No new movies left in {language}.")
            }
            SuggestMode::Mood { keyword } => format!("No movies found for mood: {keyword}."),
            SuggestMode::Random => "No movies left. Reset to start over.".to_string(),
            SuggestMode::Trending => "No trending movies left.".to_string(),
        }
    }
}

/// Coordinates suggestion requests over a shared catalog.
#[derive(Clone)]
pub struct Suggester {
    catalog: Arc<Catalog>,
}

impl Suggester {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Main entry point: suggest one unseen movie for the session.
    ///
    /// Returns `Ok(None)` when no unseen candidate matches the mode — the
    /// non-fatal "nothing to show" outcome. The session is left untouched
    /// in that case.
    pub fn suggest(&self, session: &mut SessionState, mode: &SuggestMode) -> Result<Option<Movie>> {
        self.suggest_with_rng(session, mode, &mut rand::rng())
    }

    /// Like [`Suggester::suggest`], with the RNG supplied by the caller.
    ///
    /// Tests drive this with a seeded `StdRng` to pin the draw.
    pub fn suggest_with_rng<R: Rng + ?Sized>(
        &self,
        session: &mut SessionState,
        mode: &SuggestMode,
        rng: &mut R,
    ) -> Result<Option<Movie>> {
        let candidates = self.candidates(mode);
        debug!(
            "{} candidates for {} mode before filtering",
            candidates.len(),
            mode.label()
        );

        let remaining = self.pipeline_for(mode).apply(candidates, session)?;
        debug!("{} candidates remain after filtering", remaining.len());

        match choose_uniform(&remaining, rng) {
            Some(movie) => {
                let movie = movie.clone();
                // The single record call keeps history and seen titles in sync
                session.record(movie.clone());
                info!("suggested '{}' ({} mode)", movie.title, mode.label());
                Ok(Some(movie))
            }
            None => {
                info!("no unseen candidates for {} mode", mode.label());
                Ok(None)
            }
        }
    }

    /// Candidate records for a mode, cloned out of the shared catalog.
    ///
    /// Mood and random draw from all language shelves; the trending shelf
    /// only backs the trending mode.
    fn candidates(&self, mode: &SuggestMode) -> Vec<Movie> {
        match mode {
            SuggestMode::Language { language } => self.catalog.language(*language).to_vec(),
            SuggestMode::Mood { .. } | SuggestMode::Random => {
                self.catalog.all_languages().cloned().collect()
            }
            SuggestMode::Trending => self.catalog.trending().to_vec(),
        }
    }

    /// Seen exclusion always runs first; the mood criterion is appended
    /// when the mode carries one.
    fn pipeline_for(&self, mode: &SuggestMode) -> FilterPipeline {
        let pipeline = FilterPipeline::new().add_filter(SeenFilter);
        match mode {
            SuggestMode::Mood { keyword } => pipeline.add_filter(MoodFilter::new(keyword.clone())),
            _ => pipeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn movie(title: &str, mood: &str) -> Movie {
        Movie {
            title: title.to_string(),
            director: "Someone".to_string(),
            rating: "7.0".to_string(),
            mood: mood.to_string(),
            summary: format!("{title} summary."),
        }
    }

    /// Create a minimal test catalog spanning every shelf
    fn build_test_catalog() -> Arc<Catalog> {
        let mut catalog = Catalog::new();
        catalog.insert_movie(Language::English, movie("Inception", "Sci-Fi Thriller"));
        catalog.insert_movie(Language::English, movie("The Hangover", "Dark Comedy"));
        catalog.insert_movie(Language::Hindi, movie("3 Idiots", "Comedy Drama"));
        catalog.insert_movie(Language::Malayalam, movie("Drishyam", "Thriller"));
        catalog.insert_movie(Language::Tamil, movie("Soorarai Pottru", "Drama"));
        catalog.insert_trending(movie("Dune Part Two", "Sci-Fi Adventure"));
        Arc::new(catalog)
    }

    fn build_test_suggester() -> Suggester {
        Suggester::new(build_test_catalog())
    }

    // ============================================================================
    // Unit Tests: mode scoping
    // ============================================================================

    #[test]
    fn test_language_mode_draws_only_from_that_shelf() {
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mode = SuggestMode::Language {
            language: Language::Tamil,
        };

        let pick = suggester
            .suggest_with_rng(&mut session, &mode, &mut rng)
            .unwrap()
            .expect("Tamil shelf has an unseen movie");
        assert_eq!(pick.title, "Soorarai Pottru");

        // The only Tamil title is now seen
        let next = suggester
            .suggest_with_rng(&mut session, &mode, &mut rng)
            .unwrap();
        assert!(next.is_none());
    }

    #[test]
    fn test_trending_mode_draws_only_from_trending() {
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(2);

        let pick = suggester
            .suggest_with_rng(&mut session, &SuggestMode::Trending, &mut rng)
            .unwrap()
            .expect("trending shelf has an unseen movie");
        assert_eq!(pick.title, "Dune Part Two");

        assert!(
            suggester
                .suggest_with_rng(&mut session, &SuggestMode::Trending, &mut rng)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_random_mode_never_draws_trending() {
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(3);

        // Drain random mode completely: five language titles, never the
        // trending one
        for _ in 0..5 {
            let pick = suggester
                .suggest_with_rng(&mut session, &SuggestMode::Random, &mut rng)
                .unwrap()
                .expect("language shelves not drained yet");
            assert_ne!(pick.title, "Dune Part Two");
        }
        assert!(
            suggester
                .suggest_with_rng(&mut session, &SuggestMode::Random, &mut rng)
                .unwrap()
                .is_none()
        );
        assert_eq!(session.history().len(), 5);
    }

    // ============================================================================
    // Unit Tests: mood criterion
    // ============================================================================

    #[test]
    fn test_mood_match_is_case_insensitive_substring() {
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(4);
        let mode = SuggestMode::Mood {
            keyword: "comedy".to_string(),
        };

        // "Dark Comedy" and "Comedy Drama" both match "comedy"
        let first = suggester
            .suggest_with_rng(&mut session, &mode, &mut rng)
            .unwrap()
            .unwrap();
        let second = suggester
            .suggest_with_rng(&mut session, &mode, &mut rng)
            .unwrap()
            .unwrap();

        let mut titles = vec![first.title, second.title];
        titles.sort();
        assert_eq!(titles, vec!["3 Idiots", "The Hangover"]);

        // Both comedies seen: empty result, session unchanged afterwards
        assert!(
            suggester
                .suggest_with_rng(&mut session, &mode, &mut rng)
                .unwrap()
                .is_none()
        );
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_sci_fi_example_round_trip() {
        // One Sci-Fi match: suggesting twice without reset yields
        // "no candidates" the second time
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(5);
        let mode = SuggestMode::Mood {
            keyword: "Sci-Fi".to_string(),
        };

        let pick = suggester
            .suggest_with_rng(&mut session, &mode, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(pick.title, "Inception");

        assert!(
            suggester
                .suggest_with_rng(&mut session, &mode, &mut rng)
                .unwrap()
                .is_none()
        );

        // After reset the same title is eligible again
        session.reset();
        let pick = suggester
            .suggest_with_rng(&mut session, &mode, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(pick.title, "Inception");
    }

    // ============================================================================
    // Unit Tests: session bookkeeping
    // ============================================================================

    #[test]
    fn test_success_records_exactly_once() {
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(6);

        let pick = suggester
            .suggest_with_rng(&mut session, &SuggestMode::Random, &mut rng)
            .unwrap()
            .unwrap();

        assert!(session.is_seen(&pick.title));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().last().unwrap(), &pick);
        assert_eq!(session.seen_count(), 1);
    }

    #[test]
    fn test_empty_result_leaves_session_untouched() {
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mode = SuggestMode::Mood {
            keyword: "western".to_string(),
        };

        let outcome = suggester
            .suggest_with_rng(&mut session, &mode, &mut rng)
            .unwrap();
        assert!(outcome.is_none());
        assert!(session.is_empty());
        assert_eq!(session.seen_count(), 0);
    }

    #[test]
    fn test_seen_title_never_suggested_twice() {
        let suggester = build_test_suggester();
        let mut session = SessionState::new();
        let mut rng = StdRng::seed_from_u64(8);

        let mut titles = Vec::new();
        while let Some(pick) = suggester
            .suggest_with_rng(&mut session, &SuggestMode::Random, &mut rng)
            .unwrap()
        {
            titles.push(pick.title);
        }

        let mut deduped = titles.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), titles.len(), "a title repeated before reset");
    }

    // ============================================================================
    // Unit Tests: wire format
    // ============================================================================

    #[test]
    fn test_mode_deserializes_from_api_bodies() {
        let mode: SuggestMode =
            serde_json::from_str(r#"{"mode": "language", "language": "english"}"#).unwrap();
        assert_eq!(
            mode,
            SuggestMode::Language {
                language: Language::English
            }
        );

        let mode: SuggestMode =
            serde_json::from_str(r#"{"mode": "mood", "keyword": "comedy"}"#).unwrap();
        assert_eq!(
            mode,
            SuggestMode::Mood {
                keyword: "comedy".to_string()
            }
        );

        let mode: SuggestMode = serde_json::from_str(r#"{"mode": "random"}"#).unwrap();
        assert_eq!(mode, SuggestMode::Random);

        let mode: SuggestMode = serde_json::from_str(r#"{"mode": "trending"}"#).unwrap();
        assert_eq!(mode, SuggestMode::Trending);
    }

    #[test]
    fn test_empty_notices_name_the_criterion() {
        let mode = SuggestMode::Language {
            language: Language::Hindi,
        };
        assert_eq!(mode.empty_notice(), "No new movies left in hindi.");

        let mode = SuggestMode::Mood {
            keyword: "horror".to_string(),
        };
        assert_eq!(mode.empty_notice(), "No movies found for mood: horror.");
    }
}
