//! Source Readers
//!
//! Loads the upstream pipelines' JSON artifacts defensively: a missing,
//! unreadable, or wrong-shaped artifact is "no data", never an error, and a
//! wrong-typed row is skipped without losing the rest of the file.

pub mod fs;
pub mod mem;
pub mod parse;

pub use fs::FsSources;
pub use mem::MemSources;
