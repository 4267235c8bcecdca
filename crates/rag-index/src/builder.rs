//! Profile Builder
//!
//! Merges every available source into one `AssetProfile` per canonical
//! symbol. Each source is independent: an absent source simply contributes
//! nothing, and a build with zero usable sources yields an empty map.

use rag_core::{
    canonical_symbol, AssetProfile, AssetVocabulary, Provenance, SourceReader,
};
use std::collections::BTreeMap;
use tracing::debug;

pub struct ProfileBuilder {
    vocab: AssetVocabulary,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new(AssetVocabulary::default())
    }
}

impl ProfileBuilder {
    pub fn new(vocab: AssetVocabulary) -> Self {
        Self { vocab }
    }

    pub fn vocab(&self) -> &AssetVocabulary {
        &self.vocab
    }

    /// Fold all sources into per-asset profiles. Sources are applied in a
    /// fixed order so repeated builds over the same artifacts are identical.
    pub fn build(&self, sources: &dyn SourceReader) -> BTreeMap<String, AssetProfile> {
        let mut profiles: BTreeMap<String, AssetProfile> = BTreeMap::new();

        if let Some(flow) = sources.flow() {
            for (asset, value) in &flow.aggregated_flows {
                let profile = profiles.entry(canonical_symbol(asset)).or_default();
                profile.flow += value;
                profile.sources.insert(Provenance::CoinFlow);
            }
        } else {
            debug!("flow source absent");
        }

        if let Some(focus) = sources.focus_sentiment() {
            for (asset, sentiment) in &focus.average_sentiment {
                let profile = profiles.entry(canonical_symbol(asset)).or_default();
                // Upstream already averaged per asset: last write wins.
                profile.focus_sentiment = Some(*sentiment);
                profile.sources.insert(Provenance::FocusSentiment);
            }
        } else {
            debug!("focus sentiment source absent");
        }

        if let Some(mentions) = sources.mentions() {
            for counts in mentions.coin_keywords_filtered.values() {
                for (keyword, count) in counts {
                    let Some(symbol) = self.vocab.canonical_for_keyword(keyword) else {
                        continue;
                    };
                    let profile = profiles.entry(symbol.to_string()).or_default();
                    profile.mentions += count;
                    profile.sources.insert(Provenance::CoinFinder);
                }
            }
        } else {
            debug!("mentions source absent");
        }

        if let Some(rows) = sources.general_sentiment() {
            self.fold_labeled(
                &mut profiles,
                &rows,
                Provenance::GeneralSentiment,
                |p, mean| p.general_sentiment = Some(mean),
            );
        } else {
            debug!("general sentiment source absent");
        }

        if let Some(rows) = sources.news_sentiment() {
            self.fold_labeled(&mut profiles, &rows, Provenance::NewsSentiment, |p, mean| {
                p.news_sentiment = Some(mean)
            });
        } else {
            debug!("news sentiment source absent");
        }

        if let Some(rows) = sources.social_cache() {
            for row in &rows {
                let symbol = canonical_symbol(&row.query);
                if symbol.is_empty() {
                    continue;
                }
                let profile = profiles.entry(symbol).or_default();
                profile.social_positive += row.positive;
                profile.social_negative += row.negative;
                profile.sources.insert(Provenance::SocialSentiment);
            }
        } else {
            debug!("social cache absent");
        }

        for profile in profiles.values_mut() {
            let total = profile.social_positive + profile.social_negative;
            if total > 0 {
                profile.social_sentiment = Some(
                    (profile.social_positive as f64 - profile.social_negative as f64)
                        / total as f64,
                );
            }
        }

        profiles
    }

    /// Scan labeled texts for asset tags and write each asset's mean label
    /// score through `set`. Assets with no matching record keep an absent
    /// value; a mean of exactly zero is still a present observation.
    fn fold_labeled(
        &self,
        profiles: &mut BTreeMap<String, AssetProfile>,
        rows: &[rag_core::LabeledText],
        provenance: Provenance,
        set: impl Fn(&mut AssetProfile, f64),
    ) {
        let mut per_asset: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for row in rows {
            for symbol in self.vocab.matches_in_text(&row.text) {
                per_asset.entry(symbol).or_default().push(row.label.score());
            }
        }
        for (symbol, scores) in per_asset {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            let profile = profiles.entry(symbol.to_string()).or_default();
            set(profile, mean);
            profile.sources.insert(provenance);
        }
    }
}
