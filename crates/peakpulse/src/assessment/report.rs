use super::catalog::{Question, QuestionCatalog, TOTAL_QUESTIONS};
use super::domain::{RecommendationPack, Section, SessionId};
use super::profile::ProfileStore;
use super::scoring::{PackScore, RecommendationResult, RuleContribution};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const RECOMMENDATION_RATIONALE: &str =
    "Based on training volume, recovery markers, nutrition gaps, and stated goals.";

pub const DISCLAIMER: &str = "Non-medical nutritional guidance only. \
     Consult a qualified healthcare professional before use.";

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub pack: RecommendationPack,
    pub pack_name: &'static str,
    pub score: u16,
    pub confidence: f64,
    pub confidence_percent: u8,
    pub pack_scores: Vec<PackScore>,
    pub contributions: Vec<RuleContribution>,
    pub rationale: &'static str,
    pub disclaimer: &'static str,
}

impl From<&RecommendationResult> for RecommendationView {
    fn from(result: &RecommendationResult) -> Self {
        Self {
            pack: result.pack,
            pack_name: result.pack_name(),
            score: result.score,
            confidence: result.confidence,
            confidence_percent: result.confidence_percent(),
            pack_scores: result.pack_scores.clone(),
            contributions: result.contributions.clone(),
            rationale: RECOMMENDATION_RATIONALE,
            disclaimer: DISCLAIMER,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionProgressEntry {
    pub section: Section,
    pub section_number: u8,
    pub section_label: &'static str,
    pub present: usize,
    pub answered: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub session_id: SessionId,
    pub started_at: DateTime<Utc>,
    pub total_questions: usize,
    pub present: usize,
    pub answered: usize,
    pub completion_ratio: f64,
    pub completion_percent: u8,
    pub answered_ratio: f64,
    pub sections: Vec<SectionProgressEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_recommendation: Option<RecommendationView>,
}

impl ProgressView {
    pub(crate) fn build(
        session_id: SessionId,
        started_at: DateTime<Utc>,
        profile: &ProfileStore,
        catalog: &QuestionCatalog,
        last_result: Option<&RecommendationResult>,
    ) -> Self {
        let completion_ratio = profile.completion_ratio();
        let sections = Section::ordered()
            .into_iter()
            .map(|section| {
                let questions = catalog.questions_for_section(section);
                let present = questions
                    .iter()
                    .filter(|question| profile.contains(question.key))
                    .count();
                let answered = questions
                    .iter()
                    .filter(|question| {
                        profile
                            .value(question.key)
                            .map(|value| *value != question.default_value())
                            .unwrap_or(false)
                    })
                    .count();
                SectionProgressEntry {
                    section,
                    section_number: section.number(),
                    section_label: section.label(),
                    present,
                    answered,
                    total: questions.len(),
                }
            })
            .collect();

        Self {
            session_id,
            started_at,
            total_questions: TOTAL_QUESTIONS,
            present: profile.len(),
            answered: profile.answered_count(catalog),
            completion_ratio,
            // Truncated, matching the progress caption.
            completion_percent: (completion_ratio * 100.0).floor() as u8,
            answered_ratio: profile.answered_ratio(catalog),
            sections,
            last_recommendation: last_result.map(RecommendationView::from),
        }
    }
}

/// Catalog grouped by section for clients that render the form.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSectionView {
    pub section: Section,
    pub section_number: u8,
    pub section_label: &'static str,
    pub questions: Vec<Question>,
}

pub fn catalog_sections(catalog: &QuestionCatalog) -> Vec<CatalogSectionView> {
    Section::ordered()
        .into_iter()
        .map(|section| CatalogSectionView {
            section,
            section_number: section.number(),
            section_label: section.label(),
            questions: catalog
                .questions_for_section(section)
                .into_iter()
                .cloned()
                .collect(),
        })
        .collect()
}
