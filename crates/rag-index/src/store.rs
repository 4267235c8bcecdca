//! Index Store & Query API
//!
//! Holds the most recent build behind an `Arc` snapshot. A rebuild
//! computes the new index fully off to the side and then swaps the
//! reference, so readers never observe a partially-updated index.

use crate::builder::ProfileBuilder;
use crate::scorer::score_profiles;
use chrono::{DateTime, Utc};
use rag_core::{
    canonical_symbol, AssetExplanation, AssetVocabulary, BuildSummary, FeatureWeights,
    RagResult, RankedAsset, SourceReader,
};
use std::cmp::Ordering;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// One completed build: assets sorted by descending score, ties broken by
/// ascending symbol so the ordering is reproducible.
#[derive(Debug, Clone)]
pub struct RagIndex {
    entries: Vec<RankedAsset>,
    built_at: DateTime<Utc>,
}

impl RagIndex {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            built_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Up to `k` entries, highest score first. `k` larger than the index
    /// returns everything; `k` of zero is treated as 1.
    pub fn top(&self, k: usize) -> Vec<RankedAsset> {
        self.entries.iter().take(k.max(1)).cloned().collect()
    }

    pub fn get(&self, symbol: &str) -> Option<&RankedAsset> {
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    /// Explain one asset. The identifier is canonicalized and looked up
    /// exactly; on a miss, a substring match against indexed keys (either
    /// containment direction) is tried, taking the shortest matching key,
    /// then lexicographic. `None` means no match at all.
    pub fn explain(&self, query: &str) -> Option<AssetExplanation> {
        let wanted = canonical_symbol(query);
        if wanted.is_empty() {
            return None;
        }
        let entry = self.get(&wanted).or_else(|| {
            let mut candidates: Vec<&RankedAsset> = self
                .entries
                .iter()
                .filter(|e| wanted.contains(&e.symbol) || e.symbol.contains(&wanted))
                .collect();
            candidates.sort_by(|a, b| {
                a.symbol
                    .len()
                    .cmp(&b.symbol.len())
                    .then_with(|| a.symbol.cmp(&b.symbol))
            });
            candidates.into_iter().next()
        })?;

        let why = entry
            .profile
            .breakdown
            .map(|b| {
                b.entries()
                    .iter()
                    .filter(|(_, value)| *value != 0.0)
                    .map(|(name, value)| format!("{name}={value:+.2}"))
                    .collect()
            })
            .unwrap_or_default();

        Some(AssetExplanation {
            symbol: entry.symbol.clone(),
            score: entry.profile.score.unwrap_or(0.0),
            why,
            sources: entry.profile.sources.iter().map(|s| s.to_string()).collect(),
            profile: entry.profile.clone(),
        })
    }
}

/// Owns the current index and the rebuild pipeline.
///
/// Queries clone the snapshot `Arc` and read lock-free from there;
/// concurrent rebuilds serialize on the write lock. The store never
/// rebuilds on its own — a caller finding the index empty triggers the
/// first build.
pub struct IndexStore {
    builder: ProfileBuilder,
    default_weights: FeatureWeights,
    current: RwLock<Arc<RagIndex>>,
}

impl Default for IndexStore {
    fn default() -> Self {
        Self::new(AssetVocabulary::default(), FeatureWeights::default())
    }
}

impl IndexStore {
    pub fn new(vocab: AssetVocabulary, default_weights: FeatureWeights) -> Self {
        Self {
            builder: ProfileBuilder::new(vocab),
            default_weights,
            current: RwLock::new(Arc::new(RagIndex::empty())),
        }
    }

    /// Recompute the index from the current source artifacts and swap it
    /// in. `weights` of `None` uses the store's defaults; `Some` replaces
    /// the full set for this build only.
    pub fn rebuild(
        &self,
        sources: &dyn SourceReader,
        weights: Option<FeatureWeights>,
    ) -> RagResult<BuildSummary> {
        let weights = weights.unwrap_or(self.default_weights);
        weights.validate()?;

        let mut profiles = self.builder.build(sources);
        score_profiles(&mut profiles, &weights);

        let mut entries: Vec<RankedAsset> = profiles
            .into_iter()
            .map(|(symbol, profile)| RankedAsset { symbol, profile })
            .collect();
        entries.sort_by(|a, b| {
            let sa = a.profile.score.unwrap_or(0.0);
            let sb = b.profile.score.unwrap_or(0.0);
            sb.partial_cmp(&sa)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        let index = Arc::new(RagIndex {
            entries,
            built_at: Utc::now(),
        });
        let summary = BuildSummary {
            assets_indexed: index.len(),
            built_at: index.built_at(),
        };
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = index;

        if summary.assets_indexed == 0 {
            debug!("index rebuilt with no usable sources");
        } else {
            info!(assets = summary.assets_indexed, "index rebuilt");
        }
        Ok(summary)
    }

    /// Immutable snapshot of the last completed build.
    pub fn snapshot(&self) -> Arc<RagIndex> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn top(&self, k: usize) -> Vec<RankedAsset> {
        self.snapshot().top(k)
    }

    /// Explain a free-form identifier. A query naming a registered asset
    /// ("Bitcoin", "$btc") resolves to its canonical ticker before the
    /// index lookup; anything else is looked up as given.
    pub fn explain(&self, query: &str) -> Option<AssetExplanation> {
        let resolved = self
            .builder
            .vocab()
            .canonical_for_keyword(query)
            .unwrap_or(query)
            .to_string();
        self.snapshot().explain(&resolved)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.snapshot().built_at()
    }
}
