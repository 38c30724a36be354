//! Questionnaire capture and pack recommendation.
//!
//! Answers flow from the capture layer into a session-owned [`ProfileStore`];
//! the [`RecommendationEngine`] scores a snapshot of that store on demand.

pub mod capture;
pub mod catalog;
pub mod domain;
pub mod import;
mod profile;
pub mod report;
pub mod repository;
pub mod router;
mod scoring;
pub mod service;
mod session;

#[cfg(test)]
mod tests;

pub use capture::{AnswerInput, CaptureError};
pub use catalog::{Question, QuestionCatalog, QuestionKind, TOTAL_QUESTIONS};
pub use domain::{AnswerValue, RecommendationPack, Section, SessionId};
pub use import::{AnswerImportError, AnswerImporter};
pub use profile::ProfileStore;
pub use report::{ProgressView, RecommendationView, DISCLAIMER, RECOMMENDATION_RATIONALE};
pub use repository::{RepositoryError, SessionRepository};
pub use router::assessment_router;
pub use scoring::{
    PackScore, RecommendationEngine, RecommendationResult, RuleContribution, ScoringConfig,
    DEFAULT_CONFIDENCE_NORMALIZER,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::AssessmentSession;
