//! Core domain types for the movie catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Movie
// =============================================================================

/// A single movie record parsed from one line of a shelf file.
///
/// All fields are kept as the free text found in the source file; records
/// are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique key within a shelf file
    pub title: String,
    pub director: String,
    /// Rating as written in the file (e.g. "8.8"); never interpreted numerically
    pub rating: String,
    /// Free-text mood description, may contain several mood words
    /// (e.g. "Sci-Fi Thriller")
    pub mood: String,
    pub summary: String,
}

// =============================================================================
// Language
// =============================================================================

/// The fixed set of catalog languages.
///
/// Each language is backed by one `<language>.txt` shelf file. The trending
/// shelf is backed by its own file and is not a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Malayalam,
    Tamil,
}

impl Language {
    /// All languages, in shelf order. [`Catalog::all_languages`] concatenates
    /// shelves in this order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Malayalam,
        Language::Tamil,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Malayalam => "malayalam",
            Language::Tamil => "tamil",
        }
    }

    /// Name of the shelf file backing this language
    pub fn file_name(&self) -> &'static str {
        match self {
            Language::English => "english.txt",
            Language::Hindi => "hindi.txt",
            Language::Malayalam => "malayalam.txt",
            Language::Tamil => "tamil.txt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "hindi" => Ok(Language::Hindi),
            "malayalam" => Ok(Language::Malayalam),
            "tamil" => Ok(Language::Tamil),
            _ => Err(CatalogError::UnknownLanguage(s.to_string())),
        }
    }
}

// =============================================================================
// Catalog - The In-Memory Movie Store
// =============================================================================

/// In-memory movie catalog: one shelf per language plus the trending shelf.
///
/// Shelves preserve file order. The catalog is built once at startup (see
/// [`Catalog::load_from_dir`]) and read-only afterwards; the mutators exist
/// for tests and synthetic catalogs.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) shelves: HashMap<Language, Vec<Movie>>,
    pub(crate) trending: Vec<Movie>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            shelves: HashMap::new(),
            trending: Vec::new(),
        }
    }

    /// Records for one language shelf, in file order.
    ///
    /// Returns an empty slice for a shelf with no records.
    pub fn language(&self, language: Language) -> &[Movie] {
        self.shelves
            .get(&language)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All language shelves concatenated in [`Language::ALL`] order.
    ///
    /// The trending shelf is not included.
    pub fn all_languages(&self) -> impl Iterator<Item = &Movie> {
        Language::ALL
            .iter()
            .flat_map(|&language| self.language(language))
    }

    /// Records in the trending shelf, in file order
    pub fn trending(&self) -> &[Movie] {
        &self.trending
    }

    // Mutators - used by tests and synthetic catalogs

    /// Append a record to a language shelf
    pub fn insert_movie(&mut self, language: Language, movie: Movie) {
        self.shelves.entry(language).or_default().push(movie);
    }

    /// Append a record to the trending shelf
    pub fn insert_trending(&mut self, movie: Movie) {
        self.trending.push(movie);
    }

    /// Get counts for logging/validation: (language titles, trending titles)
    pub fn counts(&self) -> (usize, usize) {
        let titles = self.shelves.values().map(|v| v.len()).sum();
        (titles, self.trending.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str_is_case_insensitive() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("TAMIL".parse::<Language>().unwrap(), Language::Tamil);
        assert_eq!("malayalam".parse::<Language>().unwrap(), Language::Malayalam);
    }

    #[test]
    fn test_language_from_str_rejects_unknown() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLanguage(s) if s == "klingon"));
    }

    #[test]
    fn test_language_file_names() {
        assert_eq!(Language::English.file_name(), "english.txt");
        assert_eq!(Language::Hindi.file_name(), "hindi.txt");
    }

    #[test]
    fn test_all_languages_order_excludes_trending() {
        let mut catalog = Catalog::new();
        let movie = |title: &str| Movie {
            title: title.to_string(),
            director: String::new(),
            rating: String::new(),
            mood: String::new(),
            summary: String::new(),
        };

        catalog.insert_movie(Language::Tamil, movie("t1"));
        catalog.insert_movie(Language::English, movie("e1"));
        catalog.insert_movie(Language::English, movie("e2"));
        catalog.insert_trending(movie("trend"));

        let titles: Vec<&str> = catalog.all_languages().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["e1", "e2", "t1"]);
    }
}
