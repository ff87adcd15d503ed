use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Cardio,
    Strength,
    Flexibility,
    Sports,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

/// A logged workout. Never modified after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub name: String,
    pub duration: u32, // minutes
    pub calories_burned: u32,
    pub intensity: Intensity,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Request body for logging an activity.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActivity {
    pub activity_type: ActivityType,
    #[serde(default)]
    pub name: String,
    pub duration: u32,
    #[serde(default)]
    pub calories_burned: u32,
    pub intensity: Intensity,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewActivity {
    /// Validates and stamps the entry. A missing date means "now".
    pub fn into_activity(self, user_id: Uuid, now: OffsetDateTime) -> AppResult<Activity> {
        if self.duration == 0 {
            return Err(AppError::validation("duration must be positive"));
        }
        Ok(Activity {
            id: Uuid::new_v4(),
            user_id,
            activity_type: self.activity_type,
            name: self.name,
            duration: self.duration,
            calories_burned: self.calories_burned,
            intensity: self.intensity,
            date: self.date.unwrap_or(now),
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            created_at: now,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub count: usize,
    pub total_minutes: u64,
    pub total_calories: u64,
    pub minutes_by_type: BTreeMap<ActivityType, u64>,
}

impl ActivitySummary {
    pub fn from_activities<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> Self {
        activities
            .into_iter()
            .fold(Self::default(), |mut acc, a| {
                acc.count += 1;
                acc.total_minutes += u64::from(a.duration);
                acc.total_calories += u64::from(a.calories_burned);
                *acc.minutes_by_type.entry(a.activity_type).or_default() += u64::from(a.duration);
                acc
            })
    }
}

/// Newest first, at most `limit` entries.
pub fn recent_activities(mut activities: Vec<Activity>, limit: usize) -> Vec<Activity> {
    activities.sort_by(|a, b| b.date.cmp(&a.date));
    activities.truncate(limit);
    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn entry(kind: ActivityType, minutes: u32, kcal: u32, date: OffsetDateTime) -> Activity {
        NewActivity {
            activity_type: kind,
            name: "session".into(),
            duration: minutes,
            calories_burned: kcal,
            intensity: Intensity::Moderate,
            date: Some(date),
            notes: None,
        }
        .into_activity(Uuid::new_v4(), date)
        .unwrap()
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = NewActivity {
            activity_type: ActivityType::Cardio,
            name: "run".into(),
            duration: 0,
            calories_burned: 100,
            intensity: Intensity::High,
            date: None,
            notes: None,
        }
        .into_activity(Uuid::new_v4(), OffsetDateTime::now_utc())
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_date_defaults_to_now() {
        let now = datetime!(2025-03-01 08:00 UTC);
        let body: NewActivity = serde_json::from_str(
            r#"{"activity_type":"strength","name":"legs","duration":45,"intensity":"high","notes":"  "}"#,
        )
        .unwrap();
        let a = body.into_activity(Uuid::new_v4(), now).unwrap();
        assert_eq!(a.date, now);
        assert_eq!(a.calories_burned, 0);
        assert!(a.notes.is_none());
    }

    #[test]
    fn summary_totals_by_type() {
        let day = datetime!(2025-03-01 08:00 UTC);
        let log = vec![
            entry(ActivityType::Cardio, 30, 300, day),
            entry(ActivityType::Strength, 45, 250, day),
            entry(ActivityType::Cardio, 20, 180, day),
        ];
        let s = ActivitySummary::from_activities(&log);
        assert_eq!(s.count, 3);
        assert_eq!(s.total_minutes, 95);
        assert_eq!(s.total_calories, 730);
        assert_eq!(s.minutes_by_type.get(&ActivityType::Cardio), Some(&50));
        assert_eq!(s.minutes_by_type.get(&ActivityType::Flexibility), None);
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let log = vec![
            entry(ActivityType::Cardio, 10, 1, datetime!(2025-03-01 08:00 UTC)),
            entry(ActivityType::Cardio, 20, 2, datetime!(2025-03-03 08:00 UTC)),
            entry(ActivityType::Cardio, 30, 3, datetime!(2025-03-02 08:00 UTC)),
        ];
        let recent = recent_activities(log, 2);
        let minutes: Vec<u32> = recent.iter().map(|a| a.duration).collect();
        assert_eq!(minutes, vec![20, 30]);
    }
}
