//! BMI → BMR → TDEE → target calories.
//!
//! Every step degrades to a default instead of failing: non-positive inputs
//! leave the value at zero and unknown categories use the sedentary
//! multiplier or the maintenance offset.

use serde::{Deserialize, Serialize};

use super::dto::{ActivityLevel, Gender, Goal, ProfileInput};

/// Physical activity factors (McArdle et al.).
const ACTIVITY_MULTIPLIERS: [(ActivityLevel, f64); 5] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::Light, 1.375),
    (ActivityLevel::Moderate, 1.55),
    (ActivityLevel::Active, 1.725),
    (ActivityLevel::VeryActive, 1.9),
];
const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;

/// Daily calorie adjustment per goal; goals not listed keep TDEE.
const GOAL_OFFSETS: [(Goal, f64); 3] = [
    (Goal::LoseWeight, -500.0),
    (Goal::GainWeight, 500.0),
    (Goal::BuildMuscle, 300.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub bmi: f64,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: i64,
}

impl BodyMetrics {
    pub fn compute(input: &ProfileInput) -> Self {
        let bmi = bmi(input.height, input.weight);
        let bmr = bmr(input.age, input.height, input.weight, &input.gender);
        let tdee = tdee(bmr, &input.activity_level);
        let target_calories = target_calories(tdee, &input.goal);
        Self {
            bmi,
            bmr,
            tdee,
            target_calories,
        }
    }
}

pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Mifflin-St Jeor. Anything not recognized as male uses the female constant.
pub fn bmr(age: i32, height_cm: f64, weight_kg: f64, gender: &str) -> f64 {
    if age <= 0 || height_cm <= 0.0 || weight_kg <= 0.0 {
        return 0.0;
    }
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match Gender::from_label(gender) {
        Some(Gender::Male) => base + 5.0,
        _ => base - 161.0,
    }
}

pub fn activity_multiplier(level: &str) -> f64 {
    ActivityLevel::from_label(level)
        .and_then(|level| {
            ACTIVITY_MULTIPLIERS
                .iter()
                .find(|(l, _)| *l == level)
                .map(|(_, m)| *m)
        })
        .unwrap_or(DEFAULT_ACTIVITY_MULTIPLIER)
}

pub fn tdee(bmr: f64, activity_level: &str) -> f64 {
    bmr * activity_multiplier(activity_level)
}

pub fn goal_offset(goal: &str) -> f64 {
    Goal::from_label(goal)
        .and_then(|goal| GOAL_OFFSETS.iter().find(|(g, _)| *g == goal).map(|(_, o)| *o))
        .unwrap_or(0.0)
}

/// Truncated toward zero, matching whole-calorie display.
pub fn target_calories(tdee: f64, goal: &str) -> i64 {
    (tdee + goal_offset(goal)) as i64
}
