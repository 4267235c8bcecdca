use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Net monetary flow per asset, already aggregated by the flow pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub aggregated_flows: BTreeMap<String, f64>,
}

/// Per-asset average compound sentiment from the focus pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FocusSnapshot {
    pub average_sentiment: BTreeMap<String, f64>,
}

/// Keyword counts per source document id, from the coin-finder pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentionsSnapshot {
    pub coin_keywords_filtered: BTreeMap<String, BTreeMap<String, f64>>,
}

/// Sentiment label emitted by the classification pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Unknown labels score as neutral, matching the classifier contract.
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("POSITIVE") {
            SentimentLabel::Positive
        } else if label.eq_ignore_ascii_case("NEGATIVE") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            SentimentLabel::Positive => 1.0,
            SentimentLabel::Negative => -1.0,
            SentimentLabel::Neutral => 0.0,
        }
    }
}

/// One labeled text record from the general or news sentiment pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledText {
    pub text: String,
    pub label: SentimentLabel,
}

/// One row of the optional social sentiment cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialCounts {
    pub query: String,
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
}

/// Which upstream artifact contributed to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    CoinFlow,
    FocusSentiment,
    CoinFinder,
    GeneralSentiment,
    NewsSentiment,
    SocialSentiment,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::CoinFlow => "coin_flow",
            Provenance::FocusSentiment => "focus_sentiment",
            Provenance::CoinFinder => "coin_finder",
            Provenance::GeneralSentiment => "general_sentiment",
            Provenance::NewsSentiment => "news_sentiment",
            Provenance::SocialSentiment => "social_sentiment",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-weight feature values retained for explainability.
///
/// Field order is the explanation order, so `entries` keeps `why` lists
/// stable across rebuilds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub news_sent: f64,
    pub general_sent: f64,
    pub focus_sent: f64,
    pub flow_z: f64,
    pub mentions_z: f64,
    pub social_sent: f64,
}

impl ScoreBreakdown {
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("news_sent", self.news_sent),
            ("general_sent", self.general_sent),
            ("focus_sent", self.focus_sent),
            ("flow_z", self.flow_z),
            ("mentions_z", self.mentions_z),
            ("social_sent", self.social_sent),
        ]
    }
}

/// Merged feature profile for one asset.
///
/// `flow` and `mentions` accumulate across every contributing source row;
/// the sentiment fields stay `None` until a source actually observes the
/// asset, so "no data" is distinguishable from "neutral".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetProfile {
    pub news_sentiment: Option<f64>,
    pub general_sentiment: Option<f64>,
    pub focus_sentiment: Option<f64>,
    pub flow: f64,
    pub mentions: f64,
    pub social_positive: u64,
    pub social_negative: u64,
    /// (positive - negative) / (positive + negative), absent when no counts.
    pub social_sentiment: Option<f64>,
    pub sources: BTreeSet<Provenance>,
    pub score: Option<f64>,
    pub breakdown: Option<ScoreBreakdown>,
}

/// One ranked index entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedAsset {
    pub symbol: String,
    pub profile: AssetProfile,
}

/// Result of one index rebuild.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BuildSummary {
    pub assets_indexed: usize,
    pub built_at: DateTime<Utc>,
}

/// Why an asset ranks where it does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetExplanation {
    /// Canonical symbol the query resolved to.
    pub symbol: String,
    pub score: f64,
    /// Non-zero pre-weight features, formatted as `name=+0.00`.
    pub why: Vec<String>,
    pub sources: Vec<String>,
    pub profile: AssetProfile,
}
