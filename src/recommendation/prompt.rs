//! Prompt text sent to the text-generation service. Only the wording lives
//! here; transport is handled by the caller.

use std::fmt::Write;

use crate::fitness::FitnessProfile;

pub const FITNESS_CHAT_PREAMBLE: &str = "You are a helpful fitness assistant. Only answer questions related to fitness, exercise, nutrition, and health. If a question is not about fitness, politely say you can only answer fitness-related questions.";

pub const NO_PROFILE_MESSAGE: &str = "Please create your fitness profile first to get personalized recommendations. Go to the profile section above and fill in your age, gender, height, weight, activity level, and fitness goals.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Workout,
    Nutrition,
    General,
    Comprehensive,
}

impl RequestKind {
    /// Unknown kinds ask for comprehensive advice.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "workout" => Self::Workout,
            "nutrition" => Self::Nutrition,
            "general" => Self::General,
            _ => Self::Comprehensive,
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Self::Workout => "Provide a detailed workout plan including exercises, sets, reps, and progression. Consider the user's goal and activity level.",
            Self::Nutrition => "Provide detailed nutrition advice including meal planning, macro distribution, and food recommendations to support their goal.",
            Self::General => "Provide general fitness and health advice tailored to their profile and goals.",
            Self::Comprehensive => "Provide comprehensive fitness and health recommendations.",
        }
    }
}

pub fn chat_prompt(question: &str) -> String {
    format!("{FITNESS_CHAT_PREAMBLE}\n\n{question}")
}

/// Personalized prompt built from the profile and its derived metrics.
/// A profile whose metrics were invalidated reports them as zero.
pub fn recommendation_prompt(
    profile: &FitnessProfile,
    kind_label: &str,
    question: Option<&str>,
) -> String {
    let input = profile.input();
    let metrics = profile.metrics().copied().unwrap_or_default();
    let kind = RequestKind::from_label(kind_label);

    let mut prompt = String::from(
        "You are a professional fitness trainer and nutritionist. Based on the following user profile, provide personalized recommendations:\n\nUser Profile:\n",
    );
    let _ = writeln!(prompt, "- Age: {} years", input.age);
    let _ = writeln!(prompt, "- Gender: {}", input.gender);
    let _ = writeln!(prompt, "- Height: {:.1} cm", input.height);
    let _ = writeln!(prompt, "- Weight: {:.1} kg", input.weight);
    let _ = writeln!(prompt, "- BMI: {:.1}", metrics.bmi);
    let _ = writeln!(prompt, "- Activity Level: {}", input.activity_level);
    let _ = writeln!(prompt, "- Goal: {}", input.goal);
    let _ = writeln!(prompt, "- Target Calories: {} per day", metrics.target_calories);
    let _ = writeln!(prompt, "- BMR: {:.1} calories", metrics.bmr);
    let _ = writeln!(prompt, "- TDEE: {:.1} calories", metrics.tdee);
    let _ = write!(prompt, "\nRequest Type: {kind_label}\n\n");

    if let Some(q) = question.filter(|q| !q.trim().is_empty()) {
        let _ = write!(prompt, "Specific Question: {q}\n\n");
    }
    prompt.push_str(kind.instruction());
    prompt.push_str("\n\nKeep recommendations practical, safe, and achievable. Include specific actionable steps.");
    prompt
}
