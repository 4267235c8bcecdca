use crate::error::{RagError, RagResult};
use serde::{Deserialize, Serialize};

/// Feature weights for the composite score.
///
/// A caller overriding the defaults supplies the whole set; there is no
/// partial override. Weights need not sum to 1, but every field must be a
/// finite number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub news_sent: f64,
    pub general_sent: f64,
    pub focus_sent: f64,
    pub flow: f64,
    pub mentions: f64,
    pub social_sent: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            news_sent: 0.25,
            general_sent: 0.15,
            focus_sent: 0.20,
            flow: 0.25,
            mentions: 0.10,
            social_sent: 0.05,
        }
    }
}

impl FeatureWeights {
    pub fn validate(&self) -> RagResult<()> {
        let fields = [
            ("news_sent", self.news_sent),
            ("general_sent", self.general_sent),
            ("focus_sent", self.focus_sent),
            ("flow", self.flow),
            ("mentions", self.mentions),
            ("social_sent", self.social_sent),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(RagError::InvalidWeights(format!(
                    "{name} is not finite: {value}"
                )));
            }
        }
        Ok(())
    }
}
