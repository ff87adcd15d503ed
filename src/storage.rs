use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::fitness::{Activity, FitnessProfile};
use crate::membership::{Member, MembershipPlan};

/// Persistence for plans and member membership fields. Implementations are
/// expected to apply each call atomically; per-member read-modify-write is
/// serialized by the caller.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn active_plans(&self) -> anyhow::Result<Vec<MembershipPlan>>;
    async fn find_plan(&self, id: Uuid) -> anyhow::Result<Option<MembershipPlan>>;
    async fn insert_plans(&self, plans: Vec<MembershipPlan>) -> anyhow::Result<()>;
    /// Deletes every plan, then inserts `plans`.
    async fn replace_plans(&self, plans: Vec<MembershipPlan>) -> anyhow::Result<()>;
    async fn find_member(&self, id: Uuid) -> anyhow::Result<Option<Member>>;
    async fn save_member(&self, member: Member) -> anyhow::Result<()>;
}

#[async_trait]
pub trait FitnessStore: Send + Sync {
    async fn find_profile(&self, user_id: Uuid) -> anyhow::Result<Option<FitnessProfile>>;
    /// Stores the profile as the user's only one, replacing any previous.
    async fn put_profile(&self, profile: FitnessProfile) -> anyhow::Result<()>;
    async fn insert_activity(&self, activity: Activity) -> anyhow::Result<()>;
    async fn activities_for(&self, user_id: Uuid) -> anyhow::Result<Vec<Activity>>;
}

/// Process-local store; the fake behind the service tests.
#[derive(Default)]
pub struct MemoryStore {
    plans: RwLock<Vec<MembershipPlan>>,
    members: RwLock<HashMap<Uuid, Member>>,
    profiles: RwLock<HashMap<Uuid, FitnessProfile>>,
    activities: RwLock<Vec<Activity>>,
}

#[async_trait]
impl MembershipStore for MemoryStore {
    async fn active_plans(&self) -> anyhow::Result<Vec<MembershipPlan>> {
        let plans = self.plans.read().await;
        Ok(plans.iter().filter(|p| p.is_active).cloned().collect())
    }

    async fn find_plan(&self, id: Uuid) -> anyhow::Result<Option<MembershipPlan>> {
        let plans = self.plans.read().await;
        Ok(plans.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_plans(&self, plans: Vec<MembershipPlan>) -> anyhow::Result<()> {
        self.plans.write().await.extend(plans);
        Ok(())
    }

    async fn replace_plans(&self, plans: Vec<MembershipPlan>) -> anyhow::Result<()> {
        *self.plans.write().await = plans;
        Ok(())
    }

    async fn find_member(&self, id: Uuid) -> anyhow::Result<Option<Member>> {
        Ok(self.members.read().await.get(&id).cloned())
    }

    async fn save_member(&self, member: Member) -> anyhow::Result<()> {
        self.members.write().await.insert(member.id, member);
        Ok(())
    }
}

#[async_trait]
impl FitnessStore for MemoryStore {
    async fn find_profile(&self, user_id: Uuid) -> anyhow::Result<Option<FitnessProfile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn put_profile(&self, profile: FitnessProfile) -> anyhow::Result<()> {
        self.profiles.write().await.insert(profile.user_id, profile);
        Ok(())
    }

    async fn insert_activity(&self, activity: Activity) -> anyhow::Result<()> {
        self.activities.write().await.push(activity);
        Ok(())
    }

    async fn activities_for(&self, user_id: Uuid) -> anyhow::Result<Vec<Activity>> {
        let activities = self.activities.read().await;
        Ok(activities
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }
}
