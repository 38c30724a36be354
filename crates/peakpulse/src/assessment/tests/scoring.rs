use super::common::*;
use crate::assessment::capture::render_defaults;
use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{AnswerValue, RecommendationPack};
use crate::assessment::profile::ProfileStore;
use crate::assessment::scoring::{RecommendationEngine, ScoringConfig};

#[test]
fn empty_profile_defaults_to_first_declared_pack() {
    let engine = scoring_engine();

    let result = engine.score(&ProfileStore::new());

    assert_eq!(result.pack, RecommendationPack::Endurance);
    assert_eq!(result.pack_name(), "Endurance Pack");
    assert_eq!(result.score, 0);
    assert_eq!(result.confidence_percent(), 0);
    assert!(result.contributions.is_empty());
}

#[test]
fn strength_sport_wins_strength_pack() {
    let engine = scoring_engine();
    let profile = profile(&[("sport", AnswerValue::text("Strength"))]);

    let result = engine.score(&profile);

    assert_eq!(result.pack, RecommendationPack::Strength);
    assert_eq!(result.score, 40);
    assert_eq!(result.confidence, 0.5);
    assert_eq!(result.confidence_percent(), 50);
}

#[test]
fn high_volume_runner_wins_endurance_pack() {
    let engine = scoring_engine();
    let profile = profile(&[
        ("sport", AnswerValue::text("Running")),
        ("volume", AnswerValue::Float(50.0)),
    ]);

    let result = engine.score(&profile);

    assert_eq!(result.pack, RecommendationPack::Endurance);
    assert_eq!(result.score, 40);
    assert_eq!(result.confidence_percent(), 50);
}

#[test]
fn short_sleep_wins_recovery_pack() {
    let engine = scoring_engine();
    let profile = profile(&[("sleep_hours", AnswerValue::Float(5.0))]);

    let result = engine.score(&profile);

    assert_eq!(result.pack, RecommendationPack::Recovery);
    assert_eq!(result.score, 35);
    assert!((result.confidence - 0.4375).abs() < f64::EPSILON);
    assert_eq!(result.confidence_percent(), 44);
}

#[test]
fn diabetes_wins_metabolic_pack() {
    let engine = scoring_engine();
    let profile = profile(&[(
        "conditions",
        AnswerValue::choices(["Diabetes", "Hypertension"]),
    )]);

    let result = engine.score(&profile);

    assert_eq!(result.pack, RecommendationPack::Metabolic);
    assert_eq!(result.score, 40);
}

#[test]
fn packs_accumulate_independently() {
    let engine = scoring_engine();
    let profile = profile(&[
        ("sport", AnswerValue::text("Cycling")),
        ("volume", AnswerValue::Float(40.0)),
        ("experience", AnswerValue::text("Beginner")),
        ("hrv", AnswerValue::Integer(32)),
    ]);

    let result = engine.score(&profile);

    assert_eq!(result.pack, RecommendationPack::Endurance);
    assert_eq!(result.score_for(RecommendationPack::Endurance), 40);
    assert_eq!(result.score_for(RecommendationPack::Recovery), 35);
    assert_eq!(result.score_for(RecommendationPack::Beginner), 30);
    assert_eq!(result.score_for(RecommendationPack::Strength), 0);
    assert_eq!(result.contributions.len(), 3);
}

#[test]
fn ties_resolve_by_declaration_order() {
    let engine = scoring_engine();
    let profile = profile(&[
        ("sport", AnswerValue::text("Strength")),
        ("conditions", AnswerValue::choices(["Diabetes"])),
    ]);

    let result = engine.score(&profile);

    assert_eq!(result.score_for(RecommendationPack::Strength), 40);
    assert_eq!(result.score_for(RecommendationPack::Metabolic), 40);
    assert_eq!(result.pack, RecommendationPack::Strength);
}

#[test]
fn scoring_is_idempotent() {
    let engine = scoring_engine();
    let profile = profile(&[
        ("sport", AnswerValue::text("Running")),
        ("volume", AnswerValue::Float(31.0)),
        ("sleep_hours", AnswerValue::Float(5.5)),
    ]);

    let first = engine.score(&profile);
    let second = engine.score(&profile);

    assert_eq!(first, second);
}

#[test]
fn rendered_defaults_alone_fire_only_the_beginner_rule() {
    let engine = scoring_engine();
    let catalog = QuestionCatalog::standard();
    let mut profile = ProfileStore::new();
    render_defaults(&mut profile, &catalog);

    let result = engine.score(&profile);

    // Widget defaults: Running at volume 30 (not above 30) and Beginner.
    assert_eq!(result.pack, RecommendationPack::Beginner);
    assert_eq!(result.score, 30);
    assert_eq!(result.confidence_percent(), 38);
}

#[test]
fn confidence_is_capped_by_normalizer() {
    let engine = RecommendationEngine::new(ScoringConfig {
        confidence_normalizer: 20.0,
    });
    let profile = profile(&[("sport", AnswerValue::text("Strength"))]);

    let result = engine.score(&profile);

    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.confidence_percent(), 100);
}

#[test]
fn non_positive_normalizer_yields_zero_confidence() {
    let engine = RecommendationEngine::new(ScoringConfig {
        confidence_normalizer: 0.0,
    });
    let profile = profile(&[("sport", AnswerValue::text("Strength"))]);

    let result = engine.score(&profile);

    assert_eq!(result.pack, RecommendationPack::Strength);
    assert_eq!(result.confidence, 0.0);
}
