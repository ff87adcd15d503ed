mod dto;
pub mod prompt;
pub mod services;

pub use dto::{
    DietPlan, Exercise, Quantity, RecommendationContext, RecommendationRequest,
    RecommendationResponse, Sex, UserSummary, WorkoutDay,
};
pub use services::{advice_prompt, build_request};
