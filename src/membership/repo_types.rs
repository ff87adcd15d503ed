use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Reference data for a purchasable tier. Not edited in place; plans are
/// replaced wholesale when the catalogue is reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: u32, // months
    pub features: Vec<String>,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Expired,
    Suspended,
    Cancelled,
}

/// Member record with the membership fields owned by the user entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub member_id: String,
    pub plan_id: Option<Uuid>,
    pub status: Option<MembershipStatus>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expiry: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub join_date: Option<OffsetDateTime>,
    pub total_visits: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Member {
    /// A freshly registered member with no plan.
    pub fn new(name: impl Into<String>, email: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            member_id: super::services::generate_member_id(now),
            plan_id: None,
            status: None,
            expiry: None,
            join_date: None,
            total_visits: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
