use serde::{Deserialize, Serialize};

/// Scale applied to the winning pack score when deriving confidence.
pub const DEFAULT_CONFIDENCE_NORMALIZER: f64 = 80.0;

/// Tuning knobs for the recommendation scorer.
///
/// The normalizer is a design constant rather than the highest score a pack
/// can reach; with the standard rules no pack gets past 40, so confidence
/// stays below 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub confidence_normalizer: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence_normalizer: DEFAULT_CONFIDENCE_NORMALIZER,
        }
    }
}
