//! Log View Pipeline
//!
//! Holds the parsed record sequence for the selected source, applies the
//! active level filter, and maps a scroll position to the minimal window of
//! records a renderer must materialize. Everything here is a pure, synchronous
//! transformation recomputed per event; nothing is persisted.

mod store;
mod view_model;
mod view_state;
mod window;

pub use store::RecordStore;
pub use view_model::{escape_html, LogListViewModel, RenderRow};
pub use view_state::{Geometry, LoadState, LogViewState, Placeholder};
pub use window::{compute_range, ViewWindow};
