use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::activity::{recent_activities, Activity, ActivitySummary, NewActivity};
use super::dto::{FitnessProfile, ProfileInput};
use crate::errors::AppResult;
use crate::storage::FitnessStore;

#[derive(Debug, Clone, Serialize)]
pub struct FitnessDashboard {
    pub profile: Option<FitnessProfile>,
    pub recent_activities: Vec<Activity>,
    pub summary: ActivitySummary,
}

/// Validates, computes metrics and stores the profile. A resubmission
/// replaces the previous profile entirely, keeping only its id and
/// creation time.
#[instrument(skip(store, input))]
pub async fn submit_profile(
    store: &dyn FitnessStore,
    user_id: Uuid,
    input: ProfileInput,
    now: OffsetDateTime,
) -> AppResult<FitnessProfile> {
    input.validate()?;

    let mut profile = FitnessProfile::new(user_id, input, now);
    if let Some(existing) = store.find_profile(user_id).await? {
        profile.id = existing.id;
        profile.created_at = existing.created_at;
        debug!(profile_id = %profile.id, "replacing existing profile");
    }
    store.put_profile(profile.clone()).await?;

    if let Some(m) = profile.metrics() {
        info!(%user_id, bmi = m.bmi, target_calories = m.target_calories, "fitness profile saved");
    }
    Ok(profile)
}

#[instrument(skip(store, body))]
pub async fn add_activity(
    store: &dyn FitnessStore,
    user_id: Uuid,
    body: NewActivity,
    now: OffsetDateTime,
) -> AppResult<Activity> {
    let activity = body.into_activity(user_id, now)?;
    store.insert_activity(activity.clone()).await?;
    info!(%user_id, activity_id = %activity.id, "activity added");
    Ok(activity)
}

/// Summary covers the whole log; only the newest `limit` entries are listed.
#[instrument(skip(store))]
pub async fn dashboard(
    store: &dyn FitnessStore,
    user_id: Uuid,
    limit: usize,
) -> AppResult<FitnessDashboard> {
    let profile = store.find_profile(user_id).await?;
    let activities = store.activities_for(user_id).await?;
    let summary = ActivitySummary::from_activities(&activities);
    Ok(FitnessDashboard {
        profile,
        recent_activities: recent_activities(activities, limit),
        summary,
    })
}
