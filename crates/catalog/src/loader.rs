//! Catalog loading and the startup file contract.
//!
//! The required file set is fixed: one shelf file per language plus
//! `trending.txt`, all in a single data directory. The presence check runs
//! once, before anything is parsed, and reports every missing file at the
//! same time so a misconfigured deployment can be fixed in one pass.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Catalog, Language, Movie};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// File backing the trending shelf
pub const TRENDING_FILE: &str = "trending.txt";

impl Catalog {
    /// Names of every file the loader requires, in shelf order
    pub fn required_files() -> Vec<&'static str> {
        Language::ALL
            .iter()
            .map(|language| language.file_name())
            .chain([TRENDING_FILE])
            .collect()
    }

    /// Load the full catalog from a data directory.
    ///
    /// Steps:
    /// 1. Check the whole required file set; fail fast naming every
    ///    missing file
    /// 2. Parse the language shelves in parallel
    /// 3. Parse the trending shelf
    ///
    /// Nothing is parsed unless the whole set is present.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        let missing: Vec<String> = Self::required_files()
            .into_iter()
            .filter(|name| !data_dir.join(name).exists())
            .map(|name| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CatalogError::MissingFiles {
                dir: data_dir.display().to_string(),
                files: missing,
            });
        }

        // Parse the language shelves in parallel
        let shelves: HashMap<Language, Vec<Movie>> = Language::ALL
            .par_iter()
            .map(|&language| {
                let movies = parser::parse_movie_file(&data_dir.join(language.file_name()))?;
                Ok((language, movies))
            })
            .collect::<Result<_>>()?;

        let trending = parser::parse_movie_file(&data_dir.join(TRENDING_FILE))?;

        let catalog = Self { shelves, trending };
        let (titles, trending_titles) = catalog.counts();
        info!(
            "loaded catalog from {}: {} titles across {} languages, {} trending",
            data_dir.display(),
            titles,
            Language::ALL.len(),
            trending_titles
        );

        Ok(catalog)
    }
}
