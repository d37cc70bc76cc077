//! Wire contract with the recommendation backend.
//!
//! Outbound: `RecommendationRequest`, the camelCase body the backend has always
//! accepted, rebuilt from a `NormalizedProfile` (bucket labels are re-derived
//! from the normalized values).
//!
//! Inbound: `RecommendationResponse`, either a bare array of records or an
//! envelope object. Only `title`, `description` and `relevanceScore` are
//! required per record; everything else is defaulted in `normalize_response`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::buckets::{
    bucket_for_years, work_life_balance_label, SalaryBucket, SalaryRange,
};
use crate::assessment::profile::NormalizedProfile;
use crate::recommendation::analysis::{analyze_user, skill_gap};
use crate::recommendation::models::{
    BatchMetadata, CareerRecommendation, ExplorationLevel, RecommendationBatch, SkillGapAnalysis,
    Zone,
};

pub const DEFAULT_CAREER_FIELD: &str = "General";
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "Mid-level";
pub const DEFAULT_LEARNING_PATH: &str =
    "Start with an introductory course, build a small portfolio project, then look for entry-level or adjacent roles.";
pub const DEFAULT_REMOTE_OPTIONS: &str = "Varies by employer";
pub const DEFAULT_DEMAND_LEVEL: &str = "moderate";
pub const DEFAULT_GROWTH_OUTLOOK: &str = "stable";

// ────────────────────────────────────────────────────────────────────────────
// Outbound
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    pub location: String,
    pub education_level: String,
    pub certifications: Vec<String>,
    pub current_situation: String,
    pub current_role: String,
    pub experience: String,
    pub resume_text: String,
    pub linkedin_profile: String,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub working_with_data: u8,
    pub working_with_people: u8,
    pub creative_tasks: u8,
    pub problem_solving: u8,
    pub leadership: u8,
    pub physical_hands_on_work: u8,
    pub outdoor_work: u8,
    pub mechanical_aptitude: u8,
    pub independent_work: u8,
    pub interests: Vec<String>,
    pub industries: Vec<String>,
    pub work_environment: String,
    pub career_goals: String,
    pub work_life_balance: String,
    pub salary_expectations: String,
    pub exploration_level: ExplorationLevel,
}

impl RecommendationRequest {
    pub fn from_profile(profile: &NormalizedProfile, level: ExplorationLevel) -> Self {
        let p = &profile.preferences;
        Self {
            user_id: profile.user_id.clone(),
            age: profile.age.clone(),
            location: profile.location.clone(),
            education_level: profile.education_level.clone(),
            certifications: profile.certifications.clone(),
            current_situation: profile.current_situation.clone(),
            current_role: profile.current_role.clone(),
            experience: bucket_for_years(profile.experience_years).label().to_string(),
            resume_text: profile.resume_text.clone(),
            linkedin_profile: profile.linkedin_url.clone(),
            technical_skills: profile.technical_skills.clone(),
            soft_skills: profile.soft_skills.clone(),
            working_with_data: p.working_with_data,
            working_with_people: p.working_with_people,
            creative_tasks: p.creative_tasks,
            problem_solving: p.problem_solving,
            leadership: p.leadership,
            physical_hands_on_work: p.physical_hands_on_work,
            outdoor_work: p.outdoor_work,
            mechanical_aptitude: p.mechanical_aptitude,
            independent_work: p.independent_work,
            interests: profile.interests.clone(),
            industries: profile.industries.clone(),
            work_environment: profile
                .remote_work_preference
                .work_environment_label()
                .to_string(),
            career_goals: profile.career_goals.clone(),
            work_life_balance: work_life_balance_label(profile.work_life_balance_importance)
                .to_string(),
            salary_expectations: SalaryBucket::from_range(&profile.salary_expectations)
                .label()
                .to_string(),
            exploration_level: level,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Inbound
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecommendation {
    pub title: String,
    pub description: String,
    /// 0 – 100
    pub relevance_score: f64,
    #[serde(default)]
    pub match_reasons: Vec<String>,

    #[serde(default)]
    pub career_type: Option<String>,
    #[serde(default)]
    pub career_field: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    /// 0 – 100
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub required_technical_skills: Option<Vec<String>>,
    #[serde(default)]
    pub matched_skills: Option<Vec<String>>,
    #[serde(default)]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub companies: Option<Vec<String>>,
    #[serde(default)]
    pub learning_path: Option<String>,
    #[serde(default)]
    pub remote_options: Option<String>,
    #[serde(default)]
    pub work_environments: Option<Vec<String>>,
    #[serde(default)]
    pub demand_level: Option<String>,
    #[serde(default)]
    pub growth_outlook: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireUserAnalysis {
    #[serde(default)]
    pub primary_field: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMetadata {
    #[serde(default)]
    pub filters_applied: Option<Vec<String>>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub total_careers_considered: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEnvelope {
    #[serde(alias = "careers")]
    pub recommendations: Vec<WireRecommendation>,
    #[serde(default)]
    pub user_analysis: Option<WireUserAnalysis>,
    #[serde(default)]
    pub metadata: Option<WireMetadata>,
    #[serde(default)]
    pub total_careers_considered: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    List(Vec<WireRecommendation>),
    Envelope(WireEnvelope),
}

impl RecommendationResponse {
    fn into_parts(self) -> (Vec<WireRecommendation>, WireUserAnalysis, WireMetadata, Option<usize>) {
        match self {
            RecommendationResponse::List(records) => {
                (records, WireUserAnalysis::default(), WireMetadata::default(), None)
            }
            RecommendationResponse::Envelope(env) => (
                env.recommendations,
                env.user_analysis.unwrap_or_default(),
                env.metadata.unwrap_or_default(),
                env.total_careers_considered,
            ),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Converts a 0–100 wire score to 0–1. Non-finite values count as 0.
pub fn unit_score(wire: f64) -> f64 {
    if wire.is_finite() {
        (wire / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn wire_salary(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, u32::MAX as f64).round() as u32)
}

/// Missing bound mirrors the present one; both missing → 0..0 (undisclosed).
fn salary_range(min: Option<f64>, max: Option<f64>) -> SalaryRange {
    match (wire_salary(min), wire_salary(max)) {
        (Some(min), Some(max)) => SalaryRange::usd(min, max),
        (Some(v), None) | (None, Some(v)) => SalaryRange::usd(v, v),
        (None, None) => SalaryRange::usd(0, 0),
    }
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn normalize_record(
    record: WireRecommendation,
    user_skills: &[String],
    default_zone: Zone,
) -> CareerRecommendation {
    let relevance_score = unit_score(record.relevance_score);
    let confidence_score = record
        .confidence_score
        .map(unit_score)
        .unwrap_or(relevance_score);

    let required_skills = dedup(record.required_technical_skills.unwrap_or_default());

    // Backend-provided gap wins; otherwise compute against the profile.
    let gap = match (record.matched_skills, record.missing_skills) {
        (None, None) => skill_gap(&required_skills, user_skills),
        (matched, missing) => SkillGapAnalysis::from_lists(
            dedup(matched.unwrap_or_default()),
            dedup(missing.unwrap_or_default()),
        ),
    };

    CareerRecommendation {
        title: record.title.trim().to_string(),
        description: record.description,
        career_field: non_blank(record.career_field)
            .or_else(|| non_blank(record.career_type))
            .unwrap_or_else(|| DEFAULT_CAREER_FIELD.to_string()),
        experience_level: non_blank(record.experience_level)
            .unwrap_or_else(|| DEFAULT_EXPERIENCE_LEVEL.to_string()),
        salary_range: salary_range(record.salary_min, record.salary_max),
        relevance_score,
        relevance_percent: (relevance_score * 100.0).round() as u8,
        confidence_score,
        zone: record
            .zone
            .as_deref()
            .and_then(Zone::parse)
            .unwrap_or(default_zone),
        match_reasons: dedup(record.match_reasons),
        skill_gap: gap,
        required_skills,
        learning_path: non_blank(record.learning_path)
            .unwrap_or_else(|| DEFAULT_LEARNING_PATH.to_string()),
        companies: dedup(record.companies.unwrap_or_default()),
        work_environments: dedup(record.work_environments.unwrap_or_default()),
        remote_options: non_blank(record.remote_options)
            .unwrap_or_else(|| DEFAULT_REMOTE_OPTIONS.to_string()),
        demand_level: non_blank(record.demand_level)
            .unwrap_or_else(|| DEFAULT_DEMAND_LEVEL.to_string()),
        growth_outlook: non_blank(record.growth_outlook)
            .unwrap_or_else(|| DEFAULT_GROWTH_OUTLOOK.to_string()),
    }
}

/// Skills the user reported, technical first. Used for gap analysis.
pub fn profile_skills(profile: &NormalizedProfile) -> Vec<String> {
    profile
        .technical_skills
        .iter()
        .chain(profile.soft_skills.iter())
        .cloned()
        .collect()
}

/// Shapes a decoded backend response into a `RecommendationBatch`, filling
/// every optional attribute. Record order is preserved.
pub fn normalize_response(
    response: RecommendationResponse,
    profile: &NormalizedProfile,
    level: ExplorationLevel,
) -> RecommendationBatch {
    let (records, wire_analysis, wire_metadata, top_level_total) = response.into_parts();
    let user_skills = profile_skills(profile);

    let recommendations: Vec<CareerRecommendation> = records
        .into_iter()
        .map(|r| normalize_record(r, &user_skills, level.zone()))
        .collect();

    let mut user_analysis = analyze_user(profile);
    if let Some(field) = non_blank(wire_analysis.primary_field) {
        user_analysis.primary_field = field;
    }

    let timestamp = wire_metadata
        .timestamp
        .as_deref()
        .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    let total_careers_considered = top_level_total
        .or(wire_metadata.total_careers_considered)
        .unwrap_or(recommendations.len());

    RecommendationBatch {
        recommendations,
        user_analysis,
        metadata: BatchMetadata {
            exploration_level: level,
            filters_applied: dedup(wire_metadata.filters_applied.unwrap_or_default()),
            timestamp,
        },
        total_careers_considered,
    }
}
