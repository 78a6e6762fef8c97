//! Parser for shelf files.
//!
//! Format: one record per line, five `|`-separated fields:
//!
//! ```text
//! title|director|rating|mood|summary
//! ```
//!
//! Fields are trimmed of surrounding whitespace. A line that does not yield
//! exactly five fields is skipped without error.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use std::fs;
use std::path::Path;

/// Number of `|`-separated fields in a well-formed record line
pub const FIELD_COUNT: usize = 5;

/// Field delimiter within a record line
pub const DELIMITER: char = '|';

/// Parse a whole shelf file into movie records, preserving file order.
///
/// Malformed lines (wrong field count, blank lines) are dropped silently;
/// only a failed read is an error.
pub fn parse_movie_file(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content.lines().filter_map(parse_line).collect())
}

/// Parse a single line into a record, or `None` if the line is malformed
pub fn parse_line(line: &str) -> Option<Movie> {
    let fields: Vec<&str> = line.trim().split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    Some(Movie {
        title: fields[0].to_string(),
        director: fields[1].to_string(),
        rating: fields[2].to_string(),
        mood: fields[3].to_string(),
        summary: fields[4].to_string(),
    })
}
