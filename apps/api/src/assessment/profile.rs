//! Normalization — turns a loosely-shaped `LegacyAssessmentAnswers` into a
//! `NormalizedProfile`. Each field goes through exactly one total lookup; this
//! step cannot fail.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::answers::{LegacyAssessmentAnswers, PreferenceInput};
use crate::assessment::buckets::{
    remote_preference, salary_range_for_bucket, work_life_balance_score, years_for_bucket,
    RemotePreference, SalaryRange, NEUTRAL_SCORE,
};

pub const DEFAULT_EDUCATION_LEVEL: &str = "not-specified";
pub const DEFAULT_SITUATION: &str = "exploring";

/// Nine Likert scores, each in 1–5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceScores {
    pub working_with_data: u8,
    pub working_with_people: u8,
    pub creative_tasks: u8,
    pub problem_solving: u8,
    pub leadership: u8,
    pub physical_hands_on_work: u8,
    pub outdoor_work: u8,
    pub mechanical_aptitude: u8,
    pub independent_work: u8,
}

impl Default for PreferenceScores {
    fn default() -> Self {
        Self {
            working_with_data: NEUTRAL_SCORE,
            working_with_people: NEUTRAL_SCORE,
            creative_tasks: NEUTRAL_SCORE,
            problem_solving: NEUTRAL_SCORE,
            leadership: NEUTRAL_SCORE,
            physical_hands_on_work: NEUTRAL_SCORE,
            outdoor_work: NEUTRAL_SCORE,
            mechanical_aptitude: NEUTRAL_SCORE,
            independent_work: NEUTRAL_SCORE,
        }
    }
}

/// The request-side profile. Built fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub user_id: String,
    pub age: Option<String>,
    pub current_role: String,
    pub current_situation: String,
    pub experience_years: f64,
    pub education_level: String,
    pub location: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub certifications: Vec<String>,
    pub preferences: PreferenceScores,
    pub interests: Vec<String>,
    pub industries: Vec<String>,
    pub career_goals: String,
    pub salary_expectations: SalaryRange,
    pub work_life_balance_importance: u8,
    pub remote_work_preference: RemotePreference,
    pub resume_text: String,
    pub linkedin_url: String,
}

/// Reads a Likert answer. Absent or unreadable (empty sequence, non-numeric
/// text) → 3; any number is rounded and clamped into 1–5 rather than replaced.
pub fn normalize_preference(input: Option<&PreferenceInput>) -> u8 {
    match input.and_then(PreferenceInput::value) {
        Some(n) => n.clamp(1, 5) as u8,
        None => NEUTRAL_SCORE,
    }
}

/// Trims entries, drops blanks, and removes case-insensitive duplicates while
/// keeping the first spelling seen.
pub fn clean_list(items: Option<&[String]>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .unwrap_or_default()
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .map(str::to_string)
        .collect()
}

fn text(value: Option<&String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn text_or(value: Option<&String>, default: &str) -> String {
    match value.map(|s| s.trim()) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

pub fn normalize_answers(answers: &LegacyAssessmentAnswers) -> NormalizedProfile {
    let user_id = match answers.user_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("anon-{}", Uuid::new_v4()),
    };

    let preferences = PreferenceScores {
        working_with_data: normalize_preference(answers.working_with_data.as_ref()),
        working_with_people: normalize_preference(answers.working_with_people.as_ref()),
        creative_tasks: normalize_preference(answers.creative_tasks.as_ref()),
        problem_solving: normalize_preference(answers.problem_solving.as_ref()),
        leadership: normalize_preference(answers.leadership.as_ref()),
        physical_hands_on_work: normalize_preference(answers.hands_on_preference()),
        outdoor_work: normalize_preference(answers.outdoor_work.as_ref()),
        mechanical_aptitude: normalize_preference(answers.mechanical_aptitude.as_ref()),
        independent_work: normalize_preference(answers.independent_work.as_ref()),
    };

    NormalizedProfile {
        user_id,
        age: answers
            .age
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string),
        current_role: text(answers.current_role.as_ref()),
        current_situation: text_or(answers.current_situation.as_ref(), DEFAULT_SITUATION),
        experience_years: years_for_bucket(answers.experience.as_deref().unwrap_or_default()),
        education_level: text_or(answers.education_level.as_ref(), DEFAULT_EDUCATION_LEVEL),
        location: text(answers.location.as_ref()),
        technical_skills: clean_list(answers.technical_skills.as_deref()),
        soft_skills: clean_list(answers.soft_skills.as_deref()),
        certifications: clean_list(answers.certifications.as_deref()),
        preferences,
        interests: clean_list(answers.interests.as_deref()),
        industries: clean_list(answers.industries.as_deref()),
        career_goals: text(answers.career_goals.as_ref()),
        salary_expectations: salary_range_for_bucket(
            answers.salary_expectations.as_deref().unwrap_or_default(),
        ),
        work_life_balance_importance: work_life_balance_score(
            answers.work_life_balance.as_deref().unwrap_or_default(),
        ),
        remote_work_preference: remote_preference(
            answers.work_environment.as_deref().unwrap_or_default(),
        ),
        resume_text: text(answers.resume_text.as_ref()),
        linkedin_url: text(answers.linkedin_profile.as_ref()),
    }
}
