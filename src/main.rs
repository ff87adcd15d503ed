use std::io::Read;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use gymcore::{
    config::AppConfig,
    fitness::{BodyMetrics, FitnessProfile, ProfileInput},
    logging,
    recommendation::{
        build_request, prompt::recommendation_prompt, RecommendationContext,
        RecommendationRequest, RecommendationResponse,
    },
    report,
};

/// Document read from the file given as the first argument, or stdin.
#[derive(Debug, Deserialize)]
struct PipelineInput {
    profile: ProfileInput,
    #[serde(default)]
    context: RecommendationContext,
    #[serde(default)]
    request_type: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    response: Option<RecommendationResponse>,
}

#[derive(Debug, Serialize)]
struct PipelineOutput {
    metrics: BodyMetrics,
    request: RecommendationRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<String>,
}

fn read_input() -> anyhow::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("read {path}")),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    logging::init(&config.log)?;

    let input: PipelineInput =
        serde_json::from_str(&read_input()?).context("parse pipeline input")?;
    input.profile.validate()?;

    let profile = FitnessProfile::new(Uuid::new_v4(), input.profile, OffsetDateTime::now_utc());
    let metrics = profile.metrics().copied().unwrap_or_default();
    tracing::info!(
        bmi = metrics.bmi,
        bmr = metrics.bmr,
        tdee = metrics.tdee,
        target_calories = metrics.target_calories,
        "metrics computed"
    );

    let request = build_request(profile.input(), &input.context, config.sessions_per_week);
    tracing::debug!(sex = %request.sex, activity_level = request.activity_level, "request normalized");

    let prompt = input
        .request_type
        .as_deref()
        .map(|kind| recommendation_prompt(&profile, kind, input.question.as_deref()));

    let output = PipelineOutput {
        metrics,
        request,
        prompt,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    if let Some(response) = &input.response {
        let plan = report::assemble(response, &input.context.location);
        tracing::info!(sections = plan.sections.len(), "plan report assembled");
        println!();
        print!("{plan}");
    }

    Ok(())
}
