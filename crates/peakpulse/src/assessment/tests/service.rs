use super::common::*;
use crate::assessment::capture::{AnswerInput, CaptureError};
use crate::assessment::domain::{AnswerValue, RecommendationPack, SessionId};
use crate::assessment::repository::{RepositoryError, SessionRepository};
use crate::assessment::scoring::ScoringConfig;
use crate::assessment::{AssessmentService, AssessmentServiceError};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn start_renders_defaults_when_requested() {
    let (service, repository) = build_service();

    let session = service.start(true).expect("session starts");

    let stored = repository
        .fetch(session.id())
        .expect("fetch succeeds")
        .expect("session stored");
    assert_eq!(stored.profile().len(), 95);
    assert_eq!(stored.profile().completion_ratio(), 1.0);
}

#[test]
fn start_without_defaults_begins_empty() {
    let (service, _) = build_service();

    let session = service.start(false).expect("session starts");
    let progress = service.progress(session.id()).expect("progress view");

    assert_eq!(progress.present, 0);
    assert_eq!(progress.completion_percent, 0);
}

#[test]
fn answers_overwrite_and_feed_analysis() {
    let (service, repository) = build_service();
    let session = service.start(true).expect("session starts");
    let id = session.id().clone();

    service
        .answer(&id, "sport", AnswerInput::Text("Running".into()))
        .expect("sport answered");
    service
        .answer(&id, "sport", AnswerInput::Text("Strength".into()))
        .expect("sport re-answered");
    service
        .answer(&id, "experience", AnswerInput::Text("Advanced".into()))
        .expect("experience answered");

    let result = service.analyze(&id).expect("analysis succeeds");
    assert_eq!(result.pack, RecommendationPack::Strength);
    assert_eq!(result.confidence_percent(), 50);

    let stored = repository
        .fetch(&id)
        .expect("fetch succeeds")
        .expect("session stored");
    assert_eq!(
        stored.profile().value("sport"),
        Some(&AnswerValue::text("Strength"))
    );
    assert_eq!(
        stored.last_result().map(|result| result.pack),
        Some(RecommendationPack::Strength)
    );
}

#[test]
fn answer_propagates_capture_errors() {
    let (service, _) = build_service();
    let session = service.start(false).expect("session starts");

    match service.answer(session.id(), "sport", AnswerInput::Text("Rowing".into())) {
        Err(AssessmentServiceError::Capture(CaptureError::InvalidOption { key, value })) => {
            assert_eq!(key, "sport");
            assert_eq!(value, "Rowing");
        }
        other => panic!("expected invalid option, got {other:?}"),
    }
}

#[test]
fn unknown_sessions_are_not_found() {
    let (service, _) = build_service();
    let missing = SessionId("pp-missing".to_string());

    assert!(matches!(
        service.analyze(&missing),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound))
    ));
    assert!(matches!(
        service.finish(&missing),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn finish_discards_session() {
    let (service, repository) = build_service();
    let session = service.start(true).expect("session starts");

    service.finish(session.id()).expect("finish succeeds");

    assert!(repository.fetch(session.id()).expect("fetch").is_none());
}

#[test]
fn repository_failures_surface_from_start() {
    let service = AssessmentService::new(Arc::new(UnavailableRepository), ScoringConfig::default());

    assert!(matches!(
        service.start(true),
        Err(AssessmentServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn overlapping_answers_and_analysis_keep_every_answer() {
    let (service, repository) = build_service();
    let service = Arc::new(service);
    let keys = ["allergies", "medications", "supplements", "sensitivities", "sport2"];

    for _ in 0..25 {
        let session = service.start(true).expect("session starts");
        let barrier = Arc::new(Barrier::new(keys.len() + 1));

        let mut handles: Vec<_> = keys
            .into_iter()
            .map(|key| {
                let service = Arc::clone(&service);
                let barrier = Arc::clone(&barrier);
                let id = session.id().clone();
                thread::spawn(move || {
                    barrier.wait();
                    service
                        .answer(&id, key, AnswerInput::Text("changed".into()))
                        .expect("answer accepted");
                })
            })
            .collect();
        handles.push({
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            let id = session.id().clone();
            thread::spawn(move || {
                barrier.wait();
                service.analyze(&id).expect("analysis succeeds");
            })
        });
        for handle in handles {
            handle.join().expect("worker thread");
        }

        let stored = repository
            .fetch(session.id())
            .expect("fetch succeeds")
            .expect("session stored");
        for key in keys {
            assert_eq!(
                stored.profile().value(key),
                Some(&AnswerValue::text("changed")),
                "answer for {key} lost"
            );
        }
        assert!(stored.last_result().is_some());
    }
}

#[test]
fn answering_a_finished_session_is_not_found() {
    let (service, _) = build_service();
    let session = service.start(false).expect("session starts");
    service.finish(session.id()).expect("finish succeeds");

    assert!(matches!(
        service.answer(session.id(), "sport", AnswerInput::Text("Running".into())),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound))
    ));
}
