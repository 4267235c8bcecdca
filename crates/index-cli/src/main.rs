//! index-cli: build the asset ranking index from pipeline artifacts and
//! print the result.
//!
//! Usage:
//!   cargo run -p index-cli -- --top 10
//!   cargo run -p index-cli -- --explain Bitcoin
//!   cargo run -p index-cli -- --data-dir ./test-data --weights weights.json
//!
//! The data directory defaults to `RAG_DATA_DIR` (or `./data`). Weights and
//! vocabulary files are JSON documents deserializing to `FeatureWeights`
//! and `AssetVocabulary`.

use anyhow::{bail, Context};
use rag_core::{AssetVocabulary, FeatureWeights};
use rag_index::IndexStore;
use source_readers::FsSources;
use tracing::info;

struct Args {
    data_dir: Option<String>,
    weights: Option<String>,
    vocab: Option<String>,
    top: usize,
    explain: Vec<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        data_dir: None,
        weights: None,
        vocab: None,
        top: 10,
        explain: Vec::new(),
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .with_context(|| format!("{name} requires a value"))
        };
        match arg.as_str() {
            "--data-dir" => args.data_dir = Some(value("--data-dir")?),
            "--weights" => args.weights = Some(value("--weights")?),
            "--vocab" => args.vocab = Some(value("--vocab")?),
            "--top" => {
                args.top = value("--top")?
                    .parse()
                    .context("--top expects a number")?
            }
            "--explain" => args.explain.push(value("--explain")?),
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args()?;

    let data_dir = args
        .data_dir
        .or_else(|| std::env::var("RAG_DATA_DIR").ok())
        .unwrap_or_else(|| "./data".to_string());

    let vocab = match &args.vocab {
        Some(path) => {
            let vocab: AssetVocabulary = load_json(path)?;
            vocab.validate()?;
            vocab
        }
        None => AssetVocabulary::default(),
    };
    let weights = match &args.weights {
        Some(path) => load_json::<FeatureWeights>(path)?,
        None => FeatureWeights::default(),
    };

    info!(%data_dir, "building index");
    let store = IndexStore::new(vocab, weights);
    let summary = store.rebuild(&FsSources::new(&data_dir), None)?;
    info!(
        assets = summary.assets_indexed,
        built_at = %summary.built_at,
        "build complete"
    );

    println!("top {} of {} assets:", args.top, summary.assets_indexed);
    for (rank, entry) in store.top(args.top).iter().enumerate() {
        println!(
            "{:>3}. {:<8} {:+.4}  [{}]",
            rank + 1,
            entry.symbol,
            entry.profile.score.unwrap_or(0.0),
            entry
                .profile
                .sources
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    for query in &args.explain {
        match store.explain(query) {
            Some(explanation) => {
                println!(
                    "{}: score {:+.4}  {}",
                    explanation.symbol,
                    explanation.score,
                    if explanation.why.is_empty() {
                        "no strong signals".to_string()
                    } else {
                        explanation.why.join(", ")
                    }
                );
            }
            None => println!("{query}: not found"),
        }
    }

    Ok(())
}
