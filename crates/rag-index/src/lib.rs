//! RAG Index
//!
//! Folds the upstream pipelines' per-asset signals (sentiment averages,
//! monetary flow, keyword mentions, social counts) into one ranked
//! "which asset looks promising" index, and explains the ranking for a
//! single asset. Rebuilds replace the whole index atomically; readers
//! always see a complete snapshot.

pub mod builder;
pub mod normalize;
pub mod scorer;
pub mod store;

pub use builder::ProfileBuilder;
pub use normalize::zscores;
pub use scorer::score_profiles;
pub use store::{IndexStore, RagIndex};

#[cfg(test)]
mod tests;
