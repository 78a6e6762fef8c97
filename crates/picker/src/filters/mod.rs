//! Filter implementations for the suggestion pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod mood;
pub mod seen;

// Re-export for convenience
pub use mood::MoodFilter;
pub use seen::SeenFilter;
