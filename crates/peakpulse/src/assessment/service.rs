use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::capture::{AnswerInput, CaptureError};
use super::catalog::QuestionCatalog;
use super::domain::{AnswerValue, SessionId};
use super::report::ProgressView;
use super::repository::{RepositoryError, SessionRepository};
use super::scoring::{RecommendationEngine, RecommendationResult, ScoringConfig};
use super::session::AssessmentSession;

/// Service composing the question catalog, session storage and scorer.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    catalog: Arc<QuestionCatalog>,
    engine: Arc<RecommendationEngine>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("pp-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Self {
        let catalog = QuestionCatalog::standard();
        let engine = RecommendationEngine::with_catalog(config, catalog.clone());

        Self {
            repository,
            catalog: Arc::new(catalog),
            engine: Arc::new(engine),
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Open a new session. With `render_defaults` every question starts out
    /// holding its widget default, as a freshly displayed form would.
    pub fn start(&self, render_defaults: bool) -> Result<AssessmentSession, AssessmentServiceError> {
        let mut session = AssessmentSession::new(next_session_id());
        if render_defaults {
            session.render_defaults(&self.catalog);
        }

        let stored = self.repository.insert(session)?;
        info!(session = %stored.id(), render_defaults, "assessment session started");
        Ok(stored)
    }

    /// Capture one answer into the stored session.
    pub fn answer(
        &self,
        session_id: &SessionId,
        key: &str,
        input: AnswerInput,
    ) -> Result<AnswerValue, AssessmentServiceError> {
        let value = self
            .repository
            .modify(session_id, |session| session.record(&self.catalog, key, input))??;

        debug!(session = %session_id, key, %value, "answer captured");
        Ok(value)
    }

    /// Score the session's current answers. The result is kept on the session
    /// until the next analysis.
    pub fn analyze(
        &self,
        session_id: &SessionId,
    ) -> Result<RecommendationResult, AssessmentServiceError> {
        let result = self
            .repository
            .modify(session_id, |session| session.analyze(&self.engine).clone())?;

        info!(
            session = %session_id,
            pack = result.pack_name(),
            score = result.score,
            confidence = result.confidence_percent(),
            "recommendation computed"
        );
        Ok(result)
    }

    pub fn progress(&self, session_id: &SessionId) -> Result<ProgressView, AssessmentServiceError> {
        let session = self.load(session_id)?;
        Ok(session.progress(&self.catalog))
    }

    /// End a session, discarding its answers.
    pub fn finish(&self, session_id: &SessionId) -> Result<(), AssessmentServiceError> {
        self.repository.remove(session_id)?;
        info!(session = %session_id, "assessment session finished");
        Ok(())
    }

    fn load(&self, session_id: &SessionId) -> Result<AssessmentSession, AssessmentServiceError> {
        let session = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(session)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
