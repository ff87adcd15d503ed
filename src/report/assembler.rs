use super::venues::venues_for;
use super::{PlanReport, ReportSection, SectionKind};
use crate::recommendation::{DietPlan, Exercise, RecommendationResponse, WorkoutDay};

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// The location line uses the caller's location, the same one the venue
/// section is built from.
fn header(resp: &RecommendationResponse, location: &str) -> ReportSection {
    let u = &resp.user_summary;
    let place = location.trim();

    let mut lines = vec![
        format!(
            "Profile: {} y/o {}, {} cm, {} kg, BMI {:.1}",
            u.age, u.sex, u.height_cm, u.weight_kg, u.bmi
        ),
        format!(
            "Goal: {} | Sessions/week: {} | Location: {}",
            u.goal, u.sessions_per_week, place
        ),
    ];
    if let Some(hc) = non_empty(Some(u.health_conditions.as_str())) {
        lines.push(format!("Health conditions: {hc}"));
    }
    if let Some(setting) = non_empty(resp.training_setting.as_deref()) {
        lines.push(format!("Training setting: {setting}"));
    }
    ReportSection::new(SectionKind::Header, None, lines)
}

fn exercise_line(exercises: &[Exercise]) -> String {
    exercises
        .iter()
        .map(|e| format!("{} ({} × {})", e.name, e.sets, e.reps))
        .collect::<Vec<_>>()
        .join("; ")
}

fn workouts(days: &[WorkoutDay]) -> Option<ReportSection> {
    if days.is_empty() {
        return None;
    }
    let mut lines = Vec::with_capacity(days.len() * 2);
    for d in days {
        let mut line = format!("Day {}", u64::from(d.day) + 1);
        if !d.focus.trim().is_empty() {
            line.push_str(&format!(": {}", d.focus.trim()));
        }
        if d.session_minutes > 0 {
            line.push_str(&format!(" ({} min)", d.session_minutes));
        }
        lines.push(line);
        if !d.exercises.is_empty() {
            lines.push(format!("  {}", exercise_line(&d.exercises)));
        }
    }
    Some(ReportSection::new(
        SectionKind::Workouts,
        Some("Weekly workouts"),
        lines,
    ))
}

fn diet(d: &DietPlan) -> ReportSection {
    let mut lines = vec![
        format!("Calories/day: {}", d.calories_per_day),
        format!("Protein: {} g", d.protein_grams),
        format!("Carbs: {}", d.carbs),
        format!("Fat: {}", d.fat),
        format!("Advice: {}", d.advice.trim()),
    ];
    if let Some(budget) = non_empty(d.budget_advice.as_deref()) {
        lines.push(format!("Budget advice: {budget}"));
    }
    ReportSection::new(SectionKind::Diet, Some("Diet"), lines)
}

fn advice(resp: &RecommendationResponse) -> Option<ReportSection> {
    let mut lines = Vec::new();
    if let Some(gym) = non_empty(resp.gym_recommendation.as_deref()) {
        lines.push(format!("Gym advice: {gym}"));
    }
    if let Some(notes) = non_empty(resp.notes.as_deref()) {
        lines.push(format!("Notes: {notes}"));
    }
    (!lines.is_empty()).then(|| ReportSection::new(SectionKind::Advice, None, lines))
}

fn venues(location: &str) -> Option<ReportSection> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }
    let lines: Vec<String> = match venues_for(location) {
        Some(list) if !list.is_empty() => list
            .iter()
            .flat_map(|v| {
                let mut out = vec![format!("- {}: {}", v.name, v.link)];
                if let Some(embed) = v.map_embed {
                    out.push(format!("  Map: {embed}"));
                }
                out
            })
            .collect(),
        _ => vec![format!("No venues available for {location}")],
    };
    let title = format!("Suggested venues in {location}");
    Some(ReportSection::new(SectionKind::Venues, Some(&title), lines))
}

/// Folds a structured recommendation into report sections in a fixed order:
/// header, workouts, diet, advice, venues. Absent optional parts drop out;
/// nothing here can fail.
pub fn assemble(resp: &RecommendationResponse, location: &str) -> PlanReport {
    let sections = [
        Some(header(resp, location)),
        workouts(&resp.weekly_workouts),
        Some(diet(&resp.diet)),
        advice(resp),
        venues(location),
    ];
    PlanReport {
        sections: sections.into_iter().flatten().collect(),
    }
}
