//! # Picker Crate
//!
//! Filtering and random selection for movie suggestions.
//!
//! This crate provides:
//! - Filter trait and implementations (seen exclusion, mood criterion)
//! - FilterPipeline for composing filters
//! - choose for uniform random selection from the filtered set
//!
//! ## Architecture
//! A suggestion request processes candidates in stages:
//! 1. Filters remove unwanted candidates (already shown, wrong mood)
//! 2. One survivor is picked uniformly at random
//! 3. The caller records the pick in the session
//!
//! ## Example Usage
//! ```ignore
//! use picker::{FilterPipeline, choose_uniform};
//! use picker::filters::{MoodFilter, SeenFilter};
//!
//! // Build the filter pipeline
//! let pipeline = FilterPipeline::new()
//!     .add_filter(SeenFilter)
//!     .add_filter(MoodFilter::new("comedy"));
//!
//! // Apply filters, then pick
//! let remaining = pipeline.apply(candidates, &session)?;
//! let pick = choose_uniform(&remaining, &mut rand::rng());
//! ```

pub mod choose;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use choose::choose_uniform;
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
