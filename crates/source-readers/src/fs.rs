use crate::parse;
use rag_core::{
    FlowSnapshot, FocusSnapshot, LabeledText, MentionsSnapshot, SocialCounts, SourceReader,
};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Artifact file names as written by the upstream pipelines.
pub const NEWS_SENTIMENT_FILE: &str = "sentiment_output_for_news.json";
pub const GENERAL_SENTIMENT_FILE: &str = "sentiment_output_general.json";
pub const FOCUS_SENTIMENT_FILE: &str = "sentiment_output_for_coin_finder.json";
pub const COIN_FLOW_FILE: &str = "Analysis_output_for_coin_flow.json";
pub const COIN_FINDER_FILE: &str = "coin_keywords_extracted.json";
pub const SOCIAL_CACHE_FILE: &str = "twitter_sentiment_cache.json";

/// Reads the pipeline artifacts from a shared data directory.
///
/// Artifacts are re-read on every call; the pipelines may rewrite them at
/// any time and the reader holds no cache of its own.
#[derive(Debug, Clone)]
pub struct FsSources {
    data_dir: PathBuf,
}

impl FsSources {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn load(&self, file: &str) -> Option<Value> {
        let path = self.data_dir.join(file);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %path.display(), %err, "source artifact unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => Some(doc),
            Err(err) => {
                debug!(path = %path.display(), %err, "source artifact is not valid JSON");
                None
            }
        }
    }
}

impl SourceReader for FsSources {
    fn flow(&self) -> Option<FlowSnapshot> {
        self.load(COIN_FLOW_FILE).as_ref().and_then(parse::parse_flow)
    }

    fn focus_sentiment(&self) -> Option<FocusSnapshot> {
        self.load(FOCUS_SENTIMENT_FILE)
            .as_ref()
            .and_then(parse::parse_focus)
    }

    fn mentions(&self) -> Option<MentionsSnapshot> {
        self.load(COIN_FINDER_FILE)
            .as_ref()
            .and_then(parse::parse_mentions)
    }

    fn general_sentiment(&self) -> Option<Vec<LabeledText>> {
        self.load(GENERAL_SENTIMENT_FILE)
            .as_ref()
            .and_then(|doc| parse::parse_labeled(doc, "sentiment"))
    }

    fn news_sentiment(&self) -> Option<Vec<LabeledText>> {
        self.load(NEWS_SENTIMENT_FILE)
            .as_ref()
            .and_then(|doc| parse::parse_labeled(doc, "dominant_sentiment"))
    }

    fn social_cache(&self) -> Option<Vec<SocialCounts>> {
        self.load(SOCIAL_CACHE_FILE)
            .as_ref()
            .and_then(parse::parse_social)
    }
}
