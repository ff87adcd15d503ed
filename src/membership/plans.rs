use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::MembershipPlan;

fn plan(
    name: &str,
    description: &str,
    price: f64,
    features: &[&str],
    now: OffsetDateTime,
) -> MembershipPlan {
    MembershipPlan {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        duration: 1,
        features: features.iter().map(|f| f.to_string()).collect(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// The three tiers seeded into an empty catalogue. Prices are in tenge.
pub fn default_plans(now: OffsetDateTime) -> Vec<MembershipPlan> {
    vec![
        plan(
            "Basic",
            "Access to gym equipment and basic facilities",
            13499.0,
            &[
                "Access to gym equipment",
                "Locker room access",
                "Basic fitness assessment",
                "Mobile app access",
            ],
            now,
        ),
        plan(
            "Premium",
            "All Basic features plus group classes and extended hours",
            22499.0,
            &[
                "All Basic features",
                "Unlimited group classes",
                "Extended gym hours",
                "Guest pass (2 per month)",
                "Nutrition consultation",
                "Progress tracking",
            ],
            now,
        ),
        plan(
            "VIP",
            "Premium features plus personal training and exclusive amenities",
            35999.0,
            &[
                "All Premium features",
                "2 personal training sessions per month",
                "Priority class booking",
                "VIP locker access",
                "Unlimited guest passes",
                "Towel service",
                "Massage therapy discount",
                "Exclusive VIP area access",
            ],
            now,
        ),
    ]
}
