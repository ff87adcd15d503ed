use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::metrics::BodyMetrics;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Case-insensitive; `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        [Self::Male, Self::Female, Self::Other]
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(label))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(label))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    GainWeight,
    Maintain,
    BuildMuscle,
}

impl Goal {
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        [Self::LoseWeight, Self::GainWeight, Self::Maintain, Self::BuildMuscle]
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(label))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainWeight => "gain_weight",
            Self::Maintain => "maintain",
            Self::BuildMuscle => "build_muscle",
        }
    }
}

/// Raw profile fields as submitted by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub age: i32,
    #[serde(default)]
    pub gender: String,
    pub height: f64, // cm
    pub weight: f64, // kg
    #[serde(default)]
    pub activity_level: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
}

impl ProfileInput {
    pub fn validate(&self) -> AppResult<()> {
        if self.age <= 0 || self.height <= 0.0 || self.weight <= 0.0 {
            return Err(AppError::validation(
                "age, height, and weight must be positive",
            ));
        }
        Ok(())
    }
}

/// A user's fitness profile. Inputs are only reachable through setters so the
/// derived metrics can never go stale: every mutation clears them until
/// [`FitnessProfile::recompute`] runs again. Stored metrics are ignored when
/// loading; they are recomputed from the inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredProfile")]
pub struct FitnessProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(flatten)]
    input: ProfileInput,
    metrics: Option<BodyMetrics>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Persisted shape of a profile; any `metrics` key in the document is dropped.
#[derive(Deserialize)]
struct StoredProfile {
    id: Uuid,
    user_id: Uuid,
    age: i32,
    #[serde(default)]
    gender: String,
    height: f64,
    weight: f64,
    #[serde(default)]
    activity_level: String,
    #[serde(default)]
    goal: String,
    #[serde(default)]
    target_weight: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<StoredProfile> for FitnessProfile {
    fn from(stored: StoredProfile) -> Self {
        let mut profile = Self {
            id: stored.id,
            user_id: stored.user_id,
            input: ProfileInput {
                age: stored.age,
                gender: stored.gender,
                height: stored.height,
                weight: stored.weight,
                activity_level: stored.activity_level,
                goal: stored.goal,
                target_weight: stored.target_weight,
            },
            metrics: None,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        };
        profile.recompute();
        profile
    }
}

impl FitnessProfile {
    /// Builds a profile with metrics already computed.
    pub fn new(user_id: Uuid, input: ProfileInput, now: OffsetDateTime) -> Self {
        let mut profile = Self {
            id: Uuid::new_v4(),
            user_id,
            input,
            metrics: None,
            created_at: now,
            updated_at: now,
        };
        profile.recompute();
        profile
    }

    pub fn input(&self) -> &ProfileInput {
        &self.input
    }

    pub fn metrics(&self) -> Option<&BodyMetrics> {
        self.metrics.as_ref()
    }

    pub fn recompute(&mut self) -> &BodyMetrics {
        self.metrics.insert(BodyMetrics::compute(&self.input))
    }

    fn touch(&mut self) {
        self.metrics = None;
    }

    pub fn set_age(&mut self, age: i32) {
        self.input.age = age;
        self.touch();
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.input.gender = gender.into();
        self.touch();
    }

    pub fn set_height(&mut self, height_cm: f64) {
        self.input.height = height_cm;
        self.touch();
    }

    pub fn set_weight(&mut self, weight_kg: f64) {
        self.input.weight = weight_kg;
        self.touch();
    }

    pub fn set_activity_level(&mut self, level: impl Into<String>) {
        self.input.activity_level = level.into();
        self.touch();
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.input.goal = goal.into();
        self.touch();
    }
}
