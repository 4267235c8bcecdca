//! Composite scoring.
//!
//! Combines normalized flow/mentions with the bounded sentiment features
//! into one weighted score per asset. The breakdown keeps each feature's
//! pre-weight value so explanations show the signal, not the weighting.

use crate::normalize::zscores;
use rag_core::{AssetProfile, FeatureWeights, ScoreBreakdown};
use std::collections::BTreeMap;

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Score every profile in place. Absent features contribute exactly zero.
///
/// All assets participate in the flow/mentions populations, with raw value
/// 0 where the source never saw them.
pub fn score_profiles(profiles: &mut BTreeMap<String, AssetProfile>, weights: &FeatureWeights) {
    let flow_raw: BTreeMap<String, f64> = profiles
        .iter()
        .map(|(k, p)| (k.clone(), p.flow))
        .collect();
    let mentions_raw: BTreeMap<String, f64> = profiles
        .iter()
        .map(|(k, p)| (k.clone(), p.mentions))
        .collect();
    let flow_z = zscores(&flow_raw);
    let mentions_z = zscores(&mentions_raw);

    for (symbol, profile) in profiles.iter_mut() {
        let breakdown = ScoreBreakdown {
            news_sent: profile.news_sentiment.unwrap_or(0.0),
            general_sent: profile.general_sentiment.unwrap_or(0.0),
            focus_sent: profile.focus_sentiment.unwrap_or(0.0),
            flow_z: flow_z.get(symbol).copied().unwrap_or(0.0),
            mentions_z: mentions_z.get(symbol).copied().unwrap_or(0.0),
            social_sent: profile.social_sentiment.unwrap_or(0.0),
        };
        let score = weights.news_sent * breakdown.news_sent
            + weights.general_sent * breakdown.general_sent
            + weights.focus_sent * breakdown.focus_sent
            + weights.flow * breakdown.flow_z
            + weights.mentions * breakdown.mentions_z
            + weights.social_sent * breakdown.social_sent;
        profile.score = Some(round4(score));
        profile.breakdown = Some(breakdown);
    }
}
