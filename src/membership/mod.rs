mod plans;
mod repo_types;
pub mod services;

pub use plans::default_plans;
pub use repo_types::{Member, MembershipPlan, MembershipStatus};
pub use services::{
    days_until_expiry, effective_status, is_active_member, select_plan, MembershipSummary,
    PlanSelection,
};
