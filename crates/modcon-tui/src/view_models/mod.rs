//! View Models
//!
//! Pre-computed presentation data, so views only place text and styles.

mod logs_view_model;

pub use logs_view_model::{LogRowViewModel, LogsViewModel};
