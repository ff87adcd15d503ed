pub mod activity;
mod dto;
pub mod metrics;
pub mod services;

pub use activity::{Activity, ActivitySummary, ActivityType, Intensity, NewActivity};
pub use dto::{ActivityLevel, FitnessProfile, Gender, Goal, ProfileInput};
pub use metrics::BodyMetrics;
