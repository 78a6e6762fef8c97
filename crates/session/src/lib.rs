//! # Session Crate
//!
//! Per-session viewing state for the suggestion service.
//!
//! ## Components
//!
//! - **state**: [`SessionState`] — the append-only history of shown movies
//!   and the derived seen-title set
//! - **store**: [`SessionStore`] — in-memory map of session id to state
//!
//! State lives only for the duration of a session: created empty, cleared on
//! reset, discarded when the session ends. Nothing is persisted.

pub mod state;
pub mod store;

pub use state::SessionState;
pub use store::SessionStore;
