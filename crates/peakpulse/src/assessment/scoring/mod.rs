mod config;
mod rules;

pub use config::{ScoringConfig, DEFAULT_CONFIDENCE_NORMALIZER};

use super::catalog::QuestionCatalog;
use super::domain::RecommendationPack;
use super::profile::ProfileStore;
use rules::{ProfileView, STANDARD_RULES};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the standard rule set to a profile snapshot.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: ScoringConfig,
    catalog: QuestionCatalog,
}

impl RecommendationEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_catalog(config, QuestionCatalog::standard())
    }

    pub fn with_catalog(config: ScoringConfig, catalog: QuestionCatalog) -> Self {
        Self { config, catalog }
    }

    pub fn score(&self, profile: &ProfileStore) -> RecommendationResult {
        let view = ProfileView::new(profile, &self.catalog);
        let mut totals = [0u16; RecommendationPack::COUNT];
        let mut contributions = Vec::new();

        for rule in STANDARD_RULES {
            if rule.applies(&view) {
                totals[rule.pack.index()] += rule.points;
                contributions.push(RuleContribution {
                    rule: rule.id,
                    pack: rule.pack,
                    points: rule.points,
                    rationale: rule.rationale,
                });
            }
        }

        let pack_scores: Vec<PackScore> = RecommendationPack::ordered()
            .into_iter()
            .map(|pack| PackScore {
                pack,
                score: totals[pack.index()],
            })
            .collect();

        // Strict comparison keeps the earliest declared pack on ties.
        let mut best = pack_scores[0];
        for candidate in &pack_scores[1..] {
            if candidate.score > best.score {
                best = *candidate;
            }
        }

        RecommendationResult {
            pack: best.pack,
            score: best.score,
            confidence: confidence(best.score, self.config.confidence_normalizer),
            pack_scores,
            contributions,
        }
    }
}

fn confidence(score: u16, normalizer: f64) -> f64 {
    if normalizer <= 0.0 || !normalizer.is_finite() {
        return 0.0;
    }
    (f64::from(score) / normalizer).clamp(0.0, 1.0)
}

/// Total accumulated by one pack during a scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackScore {
    pub pack: RecommendationPack,
    pub score: u16,
}

/// A rule that fired, kept so callers can explain the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub pack: RecommendationPack,
    pub points: u16,
    pub rationale: &'static str,
}

/// Winning pack and the confidence derived from its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub pack: RecommendationPack,
    pub score: u16,
    pub confidence: f64,
    pub pack_scores: Vec<PackScore>,
    pub contributions: Vec<RuleContribution>,
}

impl RecommendationResult {
    pub fn pack_name(&self) -> &'static str {
        self.pack.label()
    }

    /// Confidence rounded to a whole percentage, 0–100.
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }

    pub fn score_for(&self, pack: RecommendationPack) -> u16 {
        self.pack_scores[pack.index()].score
    }
}
