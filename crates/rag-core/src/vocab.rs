//! Injectable asset vocabulary.
//!
//! The mentions and text-sentiment features only recognize pre-registered
//! assets; novel tickers are invisible until added here. Keeping the
//! vocabulary as data (serde-loadable, with a built-in default) instead of
//! compiled-in literals lets deployments extend it without a rebuild.

use crate::error::{RagError, RagResult};
use serde::{Deserialize, Serialize};

/// Canonical map-key form of an asset identifier.
pub fn canonical_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// One recognizable asset: canonical ticker plus the spellings that
/// upstream text may use for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDef {
    pub symbol: String,
    /// Full name, e.g. "Bitcoin". Used for both keyword and text matching.
    #[serde(default)]
    pub name: Option<String>,
    /// Extra spellings beyond symbol and name.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl AssetDef {
    fn new(symbol: &str, name: Option<&str>) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.map(str::to_string),
            aliases: Vec::new(),
        }
    }

    /// Case-insensitive exact match against symbol, name, or alias.
    /// A leading `$` on the keyword is ignored.
    fn matches_keyword(&self, keyword: &str) -> bool {
        let kw = keyword.trim().trim_start_matches('$');
        if kw.is_empty() {
            return false;
        }
        kw.eq_ignore_ascii_case(&self.symbol)
            || self.name.as_deref().is_some_and(|n| kw.eq_ignore_ascii_case(n))
            || self.aliases.iter().any(|a| kw.eq_ignore_ascii_case(a))
    }

    /// Lowercased substrings that tag this asset in free text: `$ticker`
    /// plus name and aliases. The bare ticker is deliberately excluded
    /// ("SOL" would hit "solution").
    fn text_tags(&self) -> Vec<String> {
        let mut tags = vec![format!("${}", self.symbol.to_lowercase())];
        if let Some(name) = &self.name {
            tags.push(name.to_lowercase());
        }
        tags.extend(self.aliases.iter().map(|a| a.to_lowercase()));
        tags
    }
}

/// The set of assets the build can attribute text and keywords to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetVocabulary {
    pub assets: Vec<AssetDef>,
}

impl Default for AssetVocabulary {
    fn default() -> Self {
        let mut xrp = AssetDef::new("XRP", None);
        xrp.aliases.push("xrp".to_string());
        Self {
            assets: vec![
                AssetDef::new("BTC", Some("Bitcoin")),
                AssetDef::new("ETH", Some("Ethereum")),
                xrp,
                AssetDef::new("SOL", Some("Solana")),
                AssetDef::new("ADA", Some("Cardano")),
                AssetDef::new("BNB", Some("Binance")),
                AssetDef::new("CRO", Some("Cronos")),
                AssetDef::new("LTC", Some("Litecoin")),
                AssetDef::new("ONDO", Some("Ondo")),
                AssetDef::new("PI", Some("Picoin")),
                AssetDef::new("XVG", None),
            ],
        }
    }
}

impl AssetVocabulary {
    /// Canonical ticker for an extracted keyword, or `None` if the keyword
    /// names no registered asset.
    pub fn canonical_for_keyword(&self, keyword: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|a| a.matches_keyword(keyword))
            .map(|a| a.symbol.as_str())
    }

    /// Canonical tickers of every asset tagged in `text`, each at most once.
    pub fn matches_in_text(&self, text: &str) -> Vec<&str> {
        let haystack = text.to_lowercase();
        self.assets
            .iter()
            .filter(|a| a.text_tags().iter().any(|tag| haystack.contains(tag.as_str())))
            .map(|a| a.symbol.as_str())
            .collect()
    }

    pub fn validate(&self) -> RagResult<()> {
        for asset in &self.assets {
            if asset.symbol.trim().is_empty() {
                return Err(RagError::InvalidVocabulary(
                    "asset with empty symbol".to_string(),
                ));
            }
            if asset.symbol != canonical_symbol(&asset.symbol) {
                return Err(RagError::InvalidVocabulary(format!(
                    "symbol {:?} is not canonical uppercase",
                    asset.symbol
                )));
            }
        }
        Ok(())
    }
}
