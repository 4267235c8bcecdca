//! End-to-end scenarios against in-memory sources.

use crate::store::IndexStore;
use rag_core::{
    FeatureWeights, FlowSnapshot, FocusSnapshot, LabeledText, SentimentLabel, SocialCounts,
};
use source_readers::MemSources;

fn flow_of(entries: &[(&str, f64)]) -> FlowSnapshot {
    FlowSnapshot {
        aggregated_flows: entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
    }
}

fn focus_of(entries: &[(&str, f64)]) -> FocusSnapshot {
    FocusSnapshot {
        average_sentiment: entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
    }
}

fn labeled(text: &str, label: SentimentLabel) -> LabeledText {
    LabeledText {
        text: text.to_string(),
        label,
    }
}

/// Flow + focus for BTC, flow only for ETH.
fn btc_eth_sources() -> MemSources {
    MemSources::new()
        .with_flow(flow_of(&[("BTC", 1000.0), ("ETH", -500.0)]))
        .with_focus_sentiment(focus_of(&[("BTC", 0.5)]))
}

#[test]
fn flow_and_focus_scenario() {
    let store = IndexStore::default();
    let summary = store.rebuild(&btc_eth_sources(), None).unwrap();
    assert_eq!(summary.assets_indexed, 2);

    let top = store.top(10);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].symbol, "BTC");
    assert_eq!(top[1].symbol, "ETH");
    assert!(top[0].profile.score.unwrap() > top[1].profile.score.unwrap());

    let btc = store.explain("BTC").unwrap();
    assert!(btc.why.contains(&"focus_sent=+0.50".to_string()));
    assert!(btc.why.iter().any(|w| w.starts_with("flow_z=+")));
    assert_eq!(btc.sources, vec!["coin_flow", "focus_sentiment"]);

    let eth = store.explain("eth").unwrap();
    assert!(eth.why.iter().any(|w| w.starts_with("flow_z=-")));

    assert!(store.explain("DOGE").is_none());
}

#[test]
fn explain_resolves_names_and_tickers() {
    let store = IndexStore::default();
    store.rebuild(&btc_eth_sources(), None).unwrap();

    assert_eq!(store.explain("Bitcoin").unwrap().symbol, "BTC");
    assert_eq!(store.explain("$btc").unwrap().symbol, "BTC");
    assert_eq!(store.explain(" btc ").unwrap().symbol, "BTC");
    assert!(store.explain("").is_none());
}

#[test]
fn explain_substring_fallback_is_deterministic() {
    // Flow keys land in the index verbatim (canonicalized), so unknown
    // spellings can coexist; the fallback must always pick the same one.
    let store = IndexStore::default();
    let sources = MemSources::new().with_flow(flow_of(&[
        ("SOL", 2.0),
        ("SOLO", 1.0),
        ("SOLANA", 3.0),
    ]));
    store.rebuild(&sources, None).unwrap();

    // "SOLAN" matches SOL (contained) and SOLANA (contains): shortest wins.
    assert_eq!(store.explain("SOLAN").unwrap().symbol, "SOL");

    let store = IndexStore::default();
    let sources = MemSources::new().with_flow(flow_of(&[("ABD", 1.0), ("ABC", 2.0)]));
    store.rebuild(&sources, None).unwrap();
    // Same length: lexicographic.
    assert_eq!(store.explain("AB").unwrap().symbol, "ABC");
}

#[test]
fn mixed_sentiment_averages_to_present_zero() {
    let store = IndexStore::default();
    let sources = MemSources::new().with_general_sentiment(vec![
        labeled("bitcoin to the moon", SentimentLabel::Positive),
        labeled("bitcoin crashing", SentimentLabel::Negative),
    ]);
    store.rebuild(&sources, None).unwrap();

    let btc = store.explain("BTC").unwrap();
    // The mean of +1 and -1 is observed as 0.0, contributes a zero term to
    // the score, and is excluded from the why list.
    assert_eq!(btc.profile.general_sentiment, Some(0.0));
    assert_eq!(btc.profile.breakdown.unwrap().general_sent, 0.0);
    assert!(!btc.why.iter().any(|w| w.starts_with("general_sent")));
    assert_eq!(btc.sources, vec!["general_sentiment"]);
}

#[test]
fn rebuild_with_no_sources_succeeds_empty() {
    let store = IndexStore::default();
    let summary = store.rebuild(&MemSources::new(), None).unwrap();
    assert_eq!(summary.assets_indexed, 0);
    assert!(store.is_empty());
    assert!(store.top(10).is_empty());
    assert!(store.explain("BTC").is_none());
}

#[test]
fn rebuilds_are_deterministic() {
    let sources = MemSources::new()
        .with_flow(flow_of(&[("BTC", 1000.0), ("ETH", -500.0), ("SOL", 200.0)]))
        .with_focus_sentiment(focus_of(&[("BTC", 0.5), ("SOL", -0.2)]))
        .with_general_sentiment(vec![
            labeled("$sol breakout", SentimentLabel::Positive),
            labeled("Ethereum fees", SentimentLabel::Negative),
        ])
        .with_social_cache(vec![SocialCounts {
            query: "btc".to_string(),
            positive: 9,
            negative: 3,
        }]);

    let store_a = IndexStore::default();
    let store_b = IndexStore::default();
    store_a.rebuild(&sources, None).unwrap();
    store_b.rebuild(&sources, None).unwrap();

    let top_a = store_a.top(50);
    let top_b = store_b.top(50);
    assert_eq!(top_a.len(), top_b.len());
    for (a, b) in top_a.iter().zip(&top_b) {
        assert_eq!(a.symbol, b.symbol);
        assert_eq!(a.profile.score, b.profile.score);
        assert_eq!(a.profile.breakdown, b.profile.breakdown);
    }
}

#[test]
fn top_is_ordered_and_tolerates_oversized_k() {
    let store = IndexStore::default();
    let sources = MemSources::new().with_flow(flow_of(&[
        ("BTC", 1000.0),
        ("ETH", -500.0),
        ("SOL", 200.0),
        ("ADA", 0.0),
    ]));
    store.rebuild(&sources, None).unwrap();

    let top = store.top(100);
    assert_eq!(top.len(), 4);
    for pair in top.windows(2) {
        assert!(pair[0].profile.score.unwrap() >= pair[1].profile.score.unwrap());
    }
    // k of zero still returns the leader rather than nothing.
    assert_eq!(store.top(0).len(), 1);
    assert_eq!(store.top(2).len(), 2);
}

#[test]
fn equal_scores_rank_by_symbol() {
    let store = IndexStore::default();
    let sources = MemSources::new().with_flow(flow_of(&[("XVG", 5.0), ("ADA", 5.0)]));
    store.rebuild(&sources, None).unwrap();
    let top = store.top(10);
    assert_eq!(top[0].symbol, "ADA");
    assert_eq!(top[1].symbol, "XVG");
}

#[test]
fn weight_override_applies_to_one_build_only() {
    let zero_flow = FeatureWeights {
        news_sent: 0.0,
        general_sent: 0.0,
        focus_sent: 1.0,
        flow: 0.0,
        mentions: 0.0,
        social_sent: 0.0,
    };

    let store = IndexStore::default();
    store.rebuild(&btc_eth_sources(), Some(zero_flow)).unwrap();
    // Flow weighted to zero: ETH's deficit no longer hurts it.
    assert_eq!(store.explain("ETH").unwrap().score, 0.0);

    store.rebuild(&btc_eth_sources(), None).unwrap();
    assert!(store.explain("ETH").unwrap().score < 0.0);
}

#[test]
fn invalid_weights_leave_index_untouched() {
    let store = IndexStore::default();
    store.rebuild(&btc_eth_sources(), None).unwrap();
    let before = store.built_at();

    let bad = FeatureWeights {
        flow: f64::NAN,
        ..FeatureWeights::default()
    };
    assert!(store.rebuild(&btc_eth_sources(), Some(bad)).is_err());
    assert_eq!(store.built_at(), before);
    assert_eq!(store.len(), 2);
}

#[test]
fn snapshots_survive_a_rebuild() {
    let store = IndexStore::default();
    store.rebuild(&btc_eth_sources(), None).unwrap();
    let snapshot = store.snapshot();

    store
        .rebuild(&MemSources::new().with_flow(flow_of(&[("LTC", 1.0)])), None)
        .unwrap();

    // The old snapshot is immutable and complete; the store serves the new one.
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.get("BTC").is_some());
    assert_eq!(store.len(), 1);
    assert!(store.explain("LTC").is_some());
}
