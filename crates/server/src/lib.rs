//! Server crate for the Film Aura suggestion service.
//!
//! This crate contains the suggester that coordinates catalog, filters, and
//! session state, plus the axum HTTP surface around it.

pub mod service;
pub mod suggester;

pub use service::{AppState, SuggestResponse, create_app};
pub use suggester::{SuggestMode, Suggester};
