use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex category expected by the recommendation service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        })
    }
}

/// Free-text fields collected next to the profile on the plan page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationContext {
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub health_conditions: String,
}

/// Normalized request body sent to the recommendation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub age: i32,
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: String,
    pub sessions_per_week: u8,
    pub budget: String,
    pub location: String,
    pub health_conditions: String,
    pub activity_level: u8, // 1..=5
}

/// A value the service may send either as a number or as text
/// ("120", 120, "8-12"). Numbers keep the exact digits received, so 2259.0
/// and 1e2 render as written. `null` reads as empty text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Text(String::new())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{n}"),
            Quantity::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, value::MapAccessDeserializer, MapAccess, Visitor};

        struct QuantityVisitor;

        impl<'de> Visitor<'de> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, a string or null")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
                Ok(Quantity::Number(v.into()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quantity, E> {
                Ok(Quantity::Number(v.into()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Quantity, E> {
                serde_json::Number::from_f64(v)
                    .map(Quantity::Number)
                    .ok_or_else(|| E::custom("non-finite number"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
                Ok(Quantity::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Quantity, E> {
                Ok(Quantity::Text(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Quantity, E> {
                Ok(Quantity::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Quantity, E> {
                Ok(Quantity::default())
            }

            // serde_json hands over numbers with their original text this way.
            fn visit_map<A>(self, map: A) -> Result<Quantity, A::Error>
            where
                A: MapAccess<'de>,
            {
                serde_json::Number::deserialize(MapAccessDeserializer::new(map)).map(Quantity::Number)
            }
        }

        deserializer.deserialize_any(QuantityVisitor)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default)]
    pub weight_kg: f64,
    #[serde(default)]
    pub bmi: f64,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub sessions_per_week: u8,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub health_conditions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub sets: Quantity,
    #[serde(default)]
    pub reps: Quantity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Zero-based day index.
    pub day: u32,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub session_minutes: u32,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    #[serde(default)]
    pub calories_per_day: Quantity,
    #[serde(default)]
    pub protein_grams: Quantity,
    #[serde(default)]
    pub carbs: Quantity,
    #[serde(default)]
    pub fat: Quantity,
    #[serde(default)]
    pub advice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_advice: Option<String>,
}

/// Structured plan returned by the recommendation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    #[serde(default)]
    pub user_summary: UserSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_setting: Option<String>,
    #[serde(default)]
    pub weekly_workouts: Vec<WorkoutDay>,
    #[serde(default)]
    pub diet: DietPlan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gym_recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_numbers_render_as_received() {
        let diet: DietPlan = serde_json::from_str(
            r#"{"caloriesPerDay":2259.0,"proteinGrams":1e2,"carbs":12345678901234567891,"fat":"60-70 g","advice":""}"#,
        )
        .unwrap();
        assert_eq!(diet.calories_per_day.to_string(), "2259.0");
        assert_eq!(diet.protein_grams.to_string(), "1e2");
        assert_eq!(diet.carbs.to_string(), "12345678901234567891");
        assert_eq!(diet.fat.to_string(), "60-70 g");
    }

    #[test]
    fn null_quantities_read_as_empty() {
        let resp: RecommendationResponse = serde_json::from_str(
            r#"{"diet":{"caloriesPerDay":1800,"proteinGrams":null,"carbs":null,"fat":null},
                "weeklyWorkouts":[{"day":0,"exercises":[{"name":"Plank","sets":3,"reps":null}]}]}"#,
        )
        .unwrap();
        assert_eq!(resp.diet.calories_per_day.to_string(), "1800");
        assert_eq!(resp.diet.carbs, Quantity::default());
        assert_eq!(resp.diet.fat.to_string(), "");
        assert_eq!(resp.weekly_workouts[0].exercises[0].reps, Quantity::default());
    }

    #[test]
    fn quantities_serialize_untagged() {
        let q: Vec<Quantity> = serde_json::from_str(r#"[12, "8-12"]"#).unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), r#"[12,"8-12"]"#);
    }
}
