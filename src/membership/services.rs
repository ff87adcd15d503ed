use serde::Serialize;
use time::{Date, Duration, Month, OffsetDateTime};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::plans::default_plans;
use super::repo_types::{Member, MembershipPlan, MembershipStatus};
use crate::errors::{AppError, AppResult};
use crate::storage::MembershipStore;

/// Calendar month arithmetic. A day that does not exist in the target month
/// rolls over into the next one, so Jan 31 + 1 month is Mar 3 (Mar 2 in a
/// leap year). Offsets past the supported calendar are an error.
pub fn add_months(at: OffsetDateTime, months: u32) -> AppResult<OffsetDateTime> {
    let out_of_range = || AppError::validation("month offset out of range");

    let zero_based = (u32::from(u8::from(at.month())) - 1)
        .checked_add(months)
        .ok_or_else(out_of_range)?;
    let years = i32::try_from(zero_based / 12).map_err(|_| out_of_range())?;
    let year = at.year().checked_add(years).ok_or_else(out_of_range)?;
    let month = Month::try_from((zero_based % 12 + 1) as u8)?;

    let date = Date::from_calendar_date(year, month, 1)?
        .checked_add(Duration::days(i64::from(at.day()) - 1))
        .ok_or_else(out_of_range)?;
    Ok(at.replace_date(date))
}

/// Applies a plan selection: the member becomes active with a fresh expiry
/// regardless of the previous status. The member is left untouched on error.
pub fn select_plan(
    member: &mut Member,
    plan: &MembershipPlan,
    now: OffsetDateTime,
) -> AppResult<OffsetDateTime> {
    if !plan.is_active {
        return Err(AppError::NotFound("membership plan"));
    }
    if plan.duration == 0 {
        return Err(AppError::validation("plan duration must be positive"));
    }
    let expiry = add_months(now, plan.duration)?;

    member.plan_id = Some(plan.id);
    member.status = Some(MembershipStatus::Active);
    member.expiry = Some(expiry);
    member.join_date = Some(now);
    member.updated_at = now;
    Ok(expiry)
}

pub fn is_active_member(member: &Member, now: OffsetDateTime) -> bool {
    member.status == Some(MembershipStatus::Active)
        && member.expiry.is_some_and(|expiry| now < expiry)
}

/// Whole days left, never negative; 0 when no expiry was ever set.
pub fn days_until_expiry(member: &Member, now: OffsetDateTime) -> i64 {
    member
        .expiry
        .map(|expiry| (expiry - now).whole_days().max(0))
        .unwrap_or(0)
}

/// Status for display. A stored `active` past its expiry reads as `expired`;
/// the stored value itself is only changed by a new plan selection.
pub fn effective_status(member: &Member, now: OffsetDateTime) -> Option<MembershipStatus> {
    match member.status {
        Some(MembershipStatus::Active) if !is_active_member(member, now) => {
            Some(MembershipStatus::Expired)
        }
        other => other,
    }
}

pub fn generate_member_id(now: OffsetDateTime) -> String {
    format!(
        "GYM-{}-{:06}",
        now.year(),
        now.unix_timestamp().rem_euclid(1_000_000)
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanSelection {
    pub plan_name: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MembershipSummary {
    pub member_id: String,
    pub membership_status: Option<MembershipStatus>,
    pub effective_status: Option<MembershipStatus>,
    pub membership_expiry: Option<String>,
    pub join_date: Option<String>,
    pub total_visits: u32,
    pub days_until_expiry: i64,
    pub is_active: bool,
    pub plan: Option<MembershipPlan>,
}

fn ymd(at: OffsetDateTime) -> String {
    at.date().to_string()
}

/// Active plans, seeding the default tiers when the catalogue is empty.
#[instrument(skip(store))]
pub async fn list_plans(
    store: &dyn MembershipStore,
    now: OffsetDateTime,
) -> AppResult<Vec<MembershipPlan>> {
    let plans = store.active_plans().await?;
    if !plans.is_empty() {
        return Ok(plans);
    }
    let defaults = default_plans(now);
    store.insert_plans(defaults.clone()).await?;
    info!(count = defaults.len(), "seeded default membership plans");
    Ok(defaults)
}

/// Drops the whole catalogue and reseeds the defaults.
#[instrument(skip(store))]
pub async fn reset_plans(
    store: &dyn MembershipStore,
    now: OffsetDateTime,
) -> AppResult<Vec<MembershipPlan>> {
    let defaults = default_plans(now);
    store.replace_plans(defaults.clone()).await?;
    info!(count = defaults.len(), "membership plans reset");
    Ok(defaults)
}

#[instrument(skip(store))]
pub async fn select_membership_plan(
    store: &dyn MembershipStore,
    member_id: Uuid,
    plan_id: Uuid,
    now: OffsetDateTime,
) -> AppResult<PlanSelection> {
    let Some(plan) = store.find_plan(plan_id).await?.filter(|p| p.is_active) else {
        warn!(%plan_id, "plan missing or inactive");
        return Err(AppError::NotFound("membership plan"));
    };
    let Some(mut member) = store.find_member(member_id).await? else {
        warn!(%member_id, "member not found");
        return Err(AppError::NotFound("member"));
    };

    let expiry = select_plan(&mut member, &plan, now)?;
    store.save_member(member).await?;

    info!(%member_id, plan = %plan.name, %expiry, "membership plan selected");
    Ok(PlanSelection {
        plan_name: plan.name,
        expiry_date: ymd(expiry),
    })
}

#[instrument(skip(store))]
pub async fn membership_summary(
    store: &dyn MembershipStore,
    member_id: Uuid,
    now: OffsetDateTime,
) -> AppResult<MembershipSummary> {
    let member = store
        .find_member(member_id)
        .await?
        .ok_or(AppError::NotFound("member"))?;

    let plan = match member.plan_id {
        Some(plan_id) => store.find_plan(plan_id).await?,
        None => None,
    };

    Ok(MembershipSummary {
        effective_status: effective_status(&member, now),
        membership_expiry: member.expiry.map(ymd),
        join_date: member.join_date.map(ymd),
        days_until_expiry: days_until_expiry(&member, now),
        is_active: is_active_member(&member, now),
        membership_status: member.status,
        total_visits: member.total_visits,
        member_id: member.member_id,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use time::macros::datetime;

    fn member(now: OffsetDateTime) -> Member {
        Member::new("Aru", "aru@example.com", now)
    }

    fn plan_with(duration: u32, active: bool) -> MembershipPlan {
        let mut p = default_plans(OffsetDateTime::now_utc()).remove(0);
        p.duration = duration;
        p.is_active = active;
        p
    }

    #[test]
    fn add_months_handles_year_end_and_rolls_over_short_months() {
        assert_eq!(
            add_months(datetime!(2025-11-15 10:30 UTC), 3).unwrap(),
            datetime!(2026-02-15 10:30 UTC)
        );
        assert_eq!(
            add_months(datetime!(2025-01-31 00:00 UTC), 1).unwrap(),
            datetime!(2025-03-03 00:00 UTC)
        );
        assert_eq!(
            add_months(datetime!(2024-01-31 00:00 UTC), 1).unwrap(),
            datetime!(2024-03-02 00:00 UTC)
        );
        assert_eq!(
            add_months(datetime!(2025-03-31 18:45 UTC), 1).unwrap(),
            datetime!(2025-05-01 18:45 UTC)
        );
        assert_eq!(
            add_months(datetime!(2025-06-01 00:00 UTC), 12).unwrap(),
            datetime!(2026-06-01 00:00 UTC)
        );
    }

    #[test]
    fn add_months_rejects_offsets_past_the_calendar() {
        let err = add_months(datetime!(2025-05-10 12:00 UTC), u32::MAX).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = add_months(datetime!(2025-01-10 12:00 UTC), u32::MAX).unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)));
    }

    #[test]
    fn huge_plan_duration_fails_without_touching_member() {
        let now = datetime!(2025-05-10 12:00 UTC);
        let mut m = member(now);
        let before = m.clone();
        assert!(select_plan(&mut m, &plan_with(u32::MAX, true), now).is_err());
        assert_eq!(m, before);
    }

    #[test]
    fn selection_activates_and_overrides_previous_state() {
        let now = datetime!(2025-05-10 12:00 UTC);
        for prior in [
            None,
            Some(MembershipStatus::Expired),
            Some(MembershipStatus::Suspended),
            Some(MembershipStatus::Cancelled),
            Some(MembershipStatus::Active),
        ] {
            let mut m = member(now);
            m.status = prior;
            m.expiry = Some(datetime!(2030-01-01 00:00 UTC));
            let plan = plan_with(2, true);
            let expiry = select_plan(&mut m, &plan, now).unwrap();
            assert_eq!(expiry, datetime!(2025-07-10 12:00 UTC));
            assert_eq!(m.status, Some(MembershipStatus::Active));
            assert_eq!(m.expiry, Some(expiry));
            assert_eq!(m.join_date, Some(now));
            assert_eq!(m.plan_id, Some(plan.id));
        }
    }

    #[test]
    fn inactive_plan_leaves_member_untouched() {
        let now = datetime!(2025-05-10 12:00 UTC);
        let mut m = member(now);
        let before = m.clone();
        let err = select_plan(&mut m, &plan_with(1, false), now).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(m, before);

        let err = select_plan(&mut m, &plan_with(0, true), now).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(m, before);
    }

    #[test]
    fn active_predicate_depends_on_status_and_expiry() {
        let now = datetime!(2025-05-10 12:00 UTC);
        let mut m = member(now);
        assert!(!is_active_member(&m, now));

        select_plan(&mut m, &plan_with(1, true), now).unwrap();
        let expiry = m.expiry.unwrap();
        assert!(is_active_member(&m, now));
        assert!(is_active_member(&m, expiry - Duration::seconds(1)));
        assert!(!is_active_member(&m, expiry));
        assert!(!is_active_member(&m, expiry + Duration::days(3)));

        for status in [
            MembershipStatus::Expired,
            MembershipStatus::Suspended,
            MembershipStatus::Cancelled,
        ] {
            m.status = Some(status);
            assert!(!is_active_member(&m, now));
        }
    }

    #[test]
    fn days_until_expiry_is_never_negative() {
        let now = datetime!(2025-05-10 12:00 UTC);
        let mut m = member(now);
        assert_eq!(days_until_expiry(&m, now), 0);

        m.expiry = Some(now + Duration::hours(24 * 10 + 23));
        assert_eq!(days_until_expiry(&m, now), 10);

        m.expiry = Some(now - Duration::days(4));
        assert_eq!(days_until_expiry(&m, now), 0);
    }

    #[test]
    fn lapsed_membership_reads_expired_without_mutation() {
        let now = datetime!(2025-05-10 12:00 UTC);
        let mut m = member(now);
        assert_eq!(effective_status(&m, now), None);

        select_plan(&mut m, &plan_with(1, true), now).unwrap();
        let later = now + Duration::days(45);
        assert_eq!(effective_status(&m, now), Some(MembershipStatus::Active));
        assert_eq!(effective_status(&m, later), Some(MembershipStatus::Expired));
        assert_eq!(m.status, Some(MembershipStatus::Active));

        m.status = Some(MembershipStatus::Suspended);
        assert_eq!(effective_status(&m, now), Some(MembershipStatus::Suspended));
    }

    #[test]
    fn member_id_format() {
        let now = datetime!(2025-05-10 12:00 UTC);
        let id = generate_member_id(now);
        assert_eq!(
            id,
            format!("GYM-2025-{:06}", now.unix_timestamp() % 1_000_000)
        );
        assert_eq!(id.len(), "GYM-2025-".len() + 6);
    }

    #[tokio::test]
    async fn list_plans_seeds_once() {
        let store = MemoryStore::default();
        let now = OffsetDateTime::now_utc();
        let first = list_plans(&store, now).await.unwrap();
        let second = list_plans(&store, now).await.unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(
            first.iter().map(|p| p.id).collect::<Vec<_>>(),
            second.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn reset_replaces_catalogue() {
        let store = MemoryStore::default();
        let now = OffsetDateTime::now_utc();
        let old = list_plans(&store, now).await.unwrap();
        let fresh = reset_plans(&store, now).await.unwrap();
        let listed = list_plans(&store, now).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|p| fresh.iter().any(|f| f.id == p.id)));
        assert!(listed.iter().all(|p| old.iter().all(|o| o.id != p.id)));
    }

    #[tokio::test]
    async fn select_and_summarize_through_store() {
        let store = MemoryStore::default();
        let now = datetime!(2025-05-10 12:00 UTC);
        let m = member(now);
        let member_id = m.id;
        store.save_member(m).await.unwrap();
        let plans = list_plans(&store, now).await.unwrap();

        let selection = select_membership_plan(&store, member_id, plans[1].id, now)
            .await
            .unwrap();
        assert_eq!(selection.plan_name, "Premium");
        assert_eq!(selection.expiry_date, "2025-06-10");

        let summary = membership_summary(&store, member_id, now + Duration::days(5))
            .await
            .unwrap();
        assert!(summary.is_active);
        assert_eq!(summary.days_until_expiry, 26);
        assert_eq!(summary.join_date.as_deref(), Some("2025-05-10"));
        assert_eq!(summary.plan.map(|p| p.name).as_deref(), Some("Premium"));
    }

    #[tokio::test]
    async fn selection_not_found_paths_commit_nothing() {
        let store = MemoryStore::default();
        let now = datetime!(2025-05-10 12:00 UTC);
        let m = member(now);
        let member_id = m.id;
        store.save_member(m.clone()).await.unwrap();
        let plans = list_plans(&store, now).await.unwrap();

        let err = select_membership_plan(&store, member_id, Uuid::new_v4(), now)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = select_membership_plan(&store, Uuid::new_v4(), plans[0].id, now)
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(store.find_member(member_id).await.unwrap(), Some(m));
        let err = membership_summary(&store, Uuid::new_v4(), now).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
