use tracing::{debug, instrument};
use uuid::Uuid;

use super::dto::{RecommendationContext, RecommendationRequest, Sex};
use super::prompt::{recommendation_prompt, NO_PROFILE_MESSAGE};
use crate::errors::AppResult;
use crate::fitness::{ActivityLevel, Gender, ProfileInput};
use crate::storage::FitnessStore;

/// Ordinal scale used by the recommendation service.
const ACTIVITY_ORDINALS: [(ActivityLevel, u8); 5] = [
    (ActivityLevel::Sedentary, 1),
    (ActivityLevel::Light, 2),
    (ActivityLevel::Moderate, 3),
    (ActivityLevel::Active, 4),
    (ActivityLevel::VeryActive, 5),
];
/// Unknown levels are treated as lightly active.
const DEFAULT_ACTIVITY_ORDINAL: u8 = 2;

pub fn normalize_sex(gender: &str) -> Sex {
    match Gender::from_label(gender) {
        Some(Gender::Male) => Sex::Male,
        Some(Gender::Female) => Sex::Female,
        _ => Sex::Other,
    }
}

pub fn activity_ordinal(level: &str) -> u8 {
    ActivityLevel::from_label(level)
        .and_then(|level| {
            ACTIVITY_ORDINALS
                .iter()
                .find(|(l, _)| *l == level)
                .map(|(_, n)| *n)
        })
        .unwrap_or(DEFAULT_ACTIVITY_ORDINAL)
}

/// Maps a profile plus page context onto the service's vocabulary.
/// `sessions_per_week` is a fixed default, not derived from the profile.
pub fn build_request(
    profile: &ProfileInput,
    ctx: &RecommendationContext,
    sessions_per_week: u8,
) -> RecommendationRequest {
    RecommendationRequest {
        age: profile.age,
        sex: normalize_sex(&profile.gender),
        height_cm: profile.height,
        weight_kg: profile.weight,
        goal: profile.goal.clone(),
        sessions_per_week,
        budget: ctx.budget.clone(),
        location: ctx.location.clone(),
        health_conditions: ctx.health_conditions.clone(),
        activity_level: activity_ordinal(&profile.activity_level),
    }
}

/// Personalized prompt for the user's stored profile. Users without a
/// profile get the setup hint instead; the remote service is never asked.
#[instrument(skip(store, question))]
pub async fn advice_prompt(
    store: &dyn FitnessStore,
    user_id: Uuid,
    kind_label: &str,
    question: Option<&str>,
) -> AppResult<String> {
    match store.find_profile(user_id).await? {
        Some(profile) => Ok(recommendation_prompt(&profile, kind_label, question)),
        None => {
            debug!(%user_id, "no fitness profile yet");
            Ok(NO_PROFILE_MESSAGE.to_string())
        }
    }
}
