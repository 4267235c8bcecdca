//! Per-artifact parsers.
//!
//! Each parser validates the top-level shape it expects (mapping vs list)
//! and returns `None` when the document does not match. Inside a document,
//! rows of unexpected type are skipped individually.

use rag_core::{
    FlowSnapshot, FocusSnapshot, LabeledText, MentionsSnapshot, SentimentLabel, SocialCounts,
};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// `{"aggregated_flows": {asset: number}}`
pub fn parse_flow(doc: &Value) -> Option<FlowSnapshot> {
    let agg = doc.get("aggregated_flows")?.as_object()?;
    let mut aggregated_flows = BTreeMap::new();
    for (asset, value) in agg {
        match value.as_f64() {
            Some(v) => {
                aggregated_flows.insert(asset.clone(), v);
            }
            None => debug!(%asset, "skipping non-numeric flow entry"),
        }
    }
    Some(FlowSnapshot { aggregated_flows })
}

/// `{"average_sentiment": {asset: number}}`
pub fn parse_focus(doc: &Value) -> Option<FocusSnapshot> {
    let avg = doc.get("average_sentiment")?.as_object()?;
    let mut average_sentiment = BTreeMap::new();
    for (asset, value) in avg {
        match value.as_f64() {
            Some(v) => {
                average_sentiment.insert(asset.clone(), v);
            }
            None => debug!(%asset, "skipping non-numeric focus sentiment entry"),
        }
    }
    Some(FocusSnapshot { average_sentiment })
}

/// `{"coin_keywords_filtered": {id: {keyword: count}}}`
pub fn parse_mentions(doc: &Value) -> Option<MentionsSnapshot> {
    let filtered = doc.get("coin_keywords_filtered")?.as_object()?;
    let mut coin_keywords_filtered = BTreeMap::new();
    for (id, counts) in filtered {
        let Some(counts) = counts.as_object() else {
            debug!(%id, "skipping non-mapping keyword-count entry");
            continue;
        };
        let mut by_keyword = BTreeMap::new();
        for (keyword, count) in counts {
            match count.as_f64() {
                Some(c) => {
                    by_keyword.insert(keyword.clone(), c);
                }
                None => debug!(%id, %keyword, "skipping non-numeric keyword count"),
            }
        }
        coin_keywords_filtered.insert(id.clone(), by_keyword);
    }
    Some(MentionsSnapshot {
        coin_keywords_filtered,
    })
}

/// List of `{text, <label_field>}`. The general pipeline labels under
/// `sentiment`, the news pipeline under `dominant_sentiment`.
pub fn parse_labeled(doc: &Value, label_field: &str) -> Option<Vec<LabeledText>> {
    let rows = doc.as_array()?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(text) = row.get("text").and_then(Value::as_str) else {
            debug!("skipping labeled row without text");
            continue;
        };
        // Missing label means the classifier stayed silent: neutral.
        let label = row
            .get(label_field)
            .and_then(Value::as_str)
            .map(SentimentLabel::parse)
            .unwrap_or(SentimentLabel::Neutral);
        out.push(LabeledText {
            text: text.to_string(),
            label,
        });
    }
    Some(out)
}

/// List of `{query, positive, negative}`.
pub fn parse_social(doc: &Value) -> Option<Vec<SocialCounts>> {
    let rows = doc.as_array()?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(query) = row.get("query").and_then(Value::as_str) else {
            debug!("skipping social row without query");
            continue;
        };
        if query.trim().is_empty() {
            continue;
        }
        out.push(SocialCounts {
            query: query.to_string(),
            positive: row.get("positive").and_then(Value::as_u64).unwrap_or(0),
            negative: row.get("negative").and_then(Value::as_u64).unwrap_or(0),
        });
    }
    Some(out)
}
