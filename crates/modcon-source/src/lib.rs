//! Log Source Boundary
//!
//! Everything upstream of the parser: discovering which log files a module
//! exposes, fetching their tail as an opaque text blob, and truncating them.
//! The viewer core never learns whether text came from a direct file read, a
//! shelled-out `tail`, or a mock — implementations are injected behind the
//! [`LogSource`] trait.
//!
//! A fetch failure is an explicit [`SourceError`], never an empty string, so
//! callers can tell "empty log" from "fetch failed".

mod command_source;
mod dir_source;
mod mock_source;
mod source;

pub use command_source::CommandLogSource;
pub use dir_source::DirLogSource;
pub use mock_source::MockLogSource;
pub use source::{LogSource, SourceError};
