use crate::infra::{parse_section, InMemorySessionRepository};
use clap::Args;
use peakpulse::assessment::{
    AnswerImporter, AnswerInput, AssessmentService, ProgressView, QuestionCatalog, QuestionKind,
    RecommendationEngine, RecommendationResult, RecommendationView, Section, DISCLAIMER,
};
use peakpulse::config::AppConfig;
use peakpulse::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Only print one section (1-8 or a name such as "training")
    #[arg(long, value_parser = parse_section)]
    pub(crate) section: Option<Section>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// CSV export with `key,value` rows; separate multi-select options with `;`
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the recommendation as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Start sessions empty instead of pre-filling every field with its default
    #[arg(long)]
    pub(crate) skip_defaults: bool,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::standard();
    let sections: Vec<Section> = match args.section {
        Some(section) => vec![section],
        None => Section::ordered().to_vec(),
    };

    for section in sections {
        println!("Section {} – {}", section.number(), section.label());
        for question in catalog.questions_for_section(section) {
            println!(
                "  Q{:<3} {:<20} {} [{}]",
                question.number,
                question.key,
                question.prompt,
                describe_kind(&question.kind)
            );
        }
        println!();
    }

    Ok(())
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = QuestionCatalog::standard();
    let profile = AnswerImporter::from_path(&args.answers, &catalog)?;
    let engine = RecommendationEngine::new(config.scoring);
    let result = engine.score(&profile);

    if args.json {
        let view = RecommendationView::from(&result);
        let rendered = serde_json::to_string_pretty(&view)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("PeakPulse analysis of {}", args.answers.display());
    println!(
        "Answers loaded: {} of {} ({}% progress)",
        profile.len(),
        catalog.len(),
        (profile.completion_ratio() * 100.0).floor() as u8
    );
    render_result(&result);
    Ok(())
}

/// Sample athletes, each as a list of answers typed into the form.
fn demo_personas() -> Vec<(&'static str, Vec<(&'static str, AnswerInput)>)> {
    vec![
        (
            "High-volume runner",
            vec![
                ("sport", AnswerInput::Text("Running".into())),
                ("volume", AnswerInput::Number(55.0)),
                ("experience", AnswerInput::Text("Advanced".into())),
            ],
        ),
        (
            "Strength athlete with diabetes",
            vec![
                ("sport", AnswerInput::Text("Strength".into())),
                ("experience", AnswerInput::Text("Intermediate".into())),
                ("conditions", AnswerInput::List(vec!["Diabetes".into()])),
            ],
        ),
        (
            "Under-recovered beginner cyclist",
            vec![
                ("sport", AnswerInput::Text("Cycling".into())),
                ("volume", AnswerInput::Number(20.0)),
                ("sleep_hours", AnswerInput::Number(5.5)),
                ("hrv", AnswerInput::Number(34.0)),
            ],
        ),
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::new(
        Arc::new(InMemorySessionRepository::default()),
        config.scoring,
    );

    println!("PeakPulse assessment demo");
    for (persona, answers) in demo_personas() {
        let session = service.start(!args.skip_defaults)?;
        let id = session.id().clone();

        for (key, input) in answers {
            service.answer(&id, key, input)?;
        }

        let result = service.analyze(&id)?;
        let progress = service.progress(&id)?;

        println!("\n{persona} (session {id})");
        render_progress(&progress);
        render_result(&result);

        service.finish(&id)?;
    }

    Ok(())
}

fn render_progress(progress: &ProgressView) {
    println!(
        "Progress: {}% of {} questions ({} changed from defaults)",
        progress.completion_percent, progress.total_questions, progress.answered
    );
}

fn render_result(result: &RecommendationResult) {
    println!("Recommended: {}", result.pack_name());
    println!("Confidence: {}%", result.confidence_percent());

    if result.contributions.is_empty() {
        println!("Why this pack: no scoring rule matched; first pack shown by default");
    } else {
        println!("Why this pack");
        for contribution in &result.contributions {
            println!(
                "- {} +{} ({})",
                contribution.pack.label(),
                contribution.points,
                contribution.rationale
            );
        }
    }

    println!("Disclaimer: {DISCLAIMER}");
}

fn describe_kind(kind: &QuestionKind) -> String {
    match kind {
        QuestionKind::Integer { min, max, default } => {
            format!("{min}–{max}, default {default}")
        }
        QuestionKind::Float { min, max, default } => {
            format!("{min:.1}–{max:.1}, default {default:.1}")
        }
        QuestionKind::Choice { options } => options.join(" / "),
        QuestionKind::YesNo => "Yes / No".to_string(),
        QuestionKind::Text => "free text".to_string(),
        QuestionKind::MultiChoice { options } => format!("any of: {}", options.join(", ")),
    }
}
