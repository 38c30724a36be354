use super::capture::{self, AnswerInput, CaptureError};
use super::catalog::QuestionCatalog;
use super::domain::{AnswerValue, SessionId};
use super::profile::ProfileStore;
use super::report::ProgressView;
use super::scoring::{RecommendationEngine, RecommendationResult};
use chrono::{DateTime, Utc};

/// Session-scoped assessment context. Owns the profile exclusively; dropping
/// the session discards every answer.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    profile: ProfileStore,
    last_result: Option<RecommendationResult>,
}

impl AssessmentSession {
    pub fn new(id: SessionId) -> Self {
        Self::with_profile(id, ProfileStore::new())
    }

    pub fn with_profile(id: SessionId, profile: ProfileStore) -> Self {
        Self {
            id,
            started_at: Utc::now(),
            profile,
            last_result: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    /// Result of the most recent analysis, kept until the next one.
    pub fn last_result(&self) -> Option<&RecommendationResult> {
        self.last_result.as_ref()
    }

    pub fn render_defaults(&mut self, catalog: &QuestionCatalog) {
        capture::render_defaults(&mut self.profile, catalog);
    }

    pub fn record(
        &mut self,
        catalog: &QuestionCatalog,
        key: &str,
        input: AnswerInput,
    ) -> Result<AnswerValue, CaptureError> {
        capture::capture(&mut self.profile, catalog, key, input)
    }

    pub fn analyze(&mut self, engine: &RecommendationEngine) -> &RecommendationResult {
        self.last_result.insert(engine.score(&self.profile))
    }

    pub fn progress(&self, catalog: &QuestionCatalog) -> ProgressView {
        ProgressView::build(
            self.id.clone(),
            self.started_at,
            &self.profile,
            catalog,
            self.last_result.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::RecommendationPack;
    use crate::assessment::scoring::ScoringConfig;

    #[test]
    fn analyze_replaces_previous_result() {
        let catalog = QuestionCatalog::standard();
        let engine = RecommendationEngine::new(ScoringConfig::default());
        let mut session = AssessmentSession::new(SessionId("pp-test".into()));

        assert!(session.last_result().is_none());
        assert_eq!(session.analyze(&engine).pack, RecommendationPack::Endurance);

        session
            .record(&catalog, "sport", AnswerInput::Text("Strength".into()))
            .expect("sport recorded");
        session.analyze(&engine);

        let result = session.last_result().expect("result kept");
        assert_eq!(result.pack, RecommendationPack::Strength);
        assert_eq!(result.confidence_percent(), 50);
    }

    #[test]
    fn progress_reports_rendered_and_answered_separately() {
        let catalog = QuestionCatalog::standard();
        let mut session = AssessmentSession::new(SessionId("pp-progress".into()));
        session.render_defaults(&catalog);
        session
            .record(&catalog, "hrv", AnswerInput::Number(35.0))
            .expect("hrv recorded");

        let progress = session.progress(&catalog);
        assert_eq!(progress.completion_percent, 100);
        assert_eq!(progress.present, 95);
        assert_eq!(progress.answered, 1);

        let training = progress
            .sections
            .iter()
            .find(|entry| entry.section_number == 4)
            .expect("training section");
        assert_eq!(training.answered, 1);
        assert_eq!(training.total, 20);
    }
}
