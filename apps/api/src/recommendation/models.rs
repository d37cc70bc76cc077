use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::assessment::buckets::SalaryRange;

/// How far recommendations may stray from the user's current profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum ExplorationLevel {
    #[default]
    Safe,
    Stretch,
    Adventure,
}

impl From<i64> for ExplorationLevel {
    /// Anything outside 1–3 is treated as Safe.
    fn from(level: i64) -> Self {
        match level {
            2 => ExplorationLevel::Stretch,
            3 => ExplorationLevel::Adventure,
            _ => ExplorationLevel::Safe,
        }
    }
}

impl<'de> Deserialize<'de> for ExplorationLevel {
    /// Accepts `2`, `2.0` or `"2"`. Null, fractions and anything else read as Safe.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let level = match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|x| x.fract() == 0.0).map(|x| x as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        Ok(level.map(ExplorationLevel::from).unwrap_or_default())
    }
}

impl From<ExplorationLevel> for u8 {
    fn from(level: ExplorationLevel) -> Self {
        match level {
            ExplorationLevel::Safe => 1,
            ExplorationLevel::Stretch => 2,
            ExplorationLevel::Adventure => 3,
        }
    }
}

impl ExplorationLevel {
    pub fn zone(self) -> Zone {
        match self {
            ExplorationLevel::Safe => Zone::SafeZone,
            ExplorationLevel::Stretch => Zone::Stretch,
            ExplorationLevel::Adventure => Zone::Adventure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    SafeZone,
    Stretch,
    Adventure,
}

impl Zone {
    /// Accepts the backend's spellings (`safe`, `safe_zone`, `Safe Zone`, ...).
    pub fn parse(raw: &str) -> Option<Zone> {
        let key: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match key.as_str() {
            "safe" | "safezone" => Some(Zone::SafeZone),
            "stretch" | "stretchzone" => Some(Zone::Stretch),
            "adventure" | "adventurezone" => Some(Zone::Adventure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// 0.0 – 1.0
    pub match_score: f64,
}

impl SkillGapAnalysis {
    /// `match_score` is the matched share; 1.0 when nothing is required.
    pub fn from_lists(matched_skills: Vec<String>, missing_skills: Vec<String>) -> Self {
        let total = matched_skills.len() + missing_skills.len();
        let match_score = if total == 0 {
            1.0
        } else {
            matched_skills.len() as f64 / total as f64
        };
        Self {
            matched_skills,
            missing_skills,
            match_score,
        }
    }
}

/// One ranked career, in the shape the UI renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub title: String,
    pub description: String,
    pub career_field: String,
    pub experience_level: String,
    pub salary_range: SalaryRange,
    /// 0.0 – 1.0
    pub relevance_score: f64,
    /// `relevance_score` × 100, rounded, for display.
    pub relevance_percent: u8,
    /// 0.0 – 1.0
    pub confidence_score: f64,
    pub zone: Zone,
    pub match_reasons: Vec<String>,
    pub skill_gap: SkillGapAnalysis,
    pub required_skills: Vec<String>,
    pub learning_path: String,
    pub companies: Vec<String>,
    pub work_environments: Vec<String>,
    pub remote_options: String,
    pub demand_level: String,
    pub growth_outlook: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnalysis {
    pub primary_field: String,
    pub technical_skill_count: usize,
    pub soft_skill_count: usize,
    pub data_oriented: bool,
    pub people_oriented: bool,
    pub creative_oriented: bool,
    pub leadership_oriented: bool,
    pub hands_on_oriented: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchMetadata {
    pub exploration_level: ExplorationLevel,
    pub filters_applied: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// The full normalized response. `recommendations` keeps the backend's ranking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBatch {
    pub recommendations: Vec<CareerRecommendation>,
    pub user_analysis: UserAnalysis,
    pub metadata: BatchMetadata,
    pub total_careers_considered: usize,
}

/// Why a synthetic batch was served instead of the backend's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackReason {
    Transport { message: String },
    HttpStatus { status: u16 },
    MalformedBody { message: String },
}

/// Result of one adapter call. Both variants carry a usable batch; the tag
/// tells callers whether it came from the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Api {
        batch: RecommendationBatch,
    },
    Fallback {
        batch: RecommendationBatch,
        reason: FallbackReason,
    },
}

impl RecommendationOutcome {
    pub fn batch(&self) -> &RecommendationBatch {
        match self {
            RecommendationOutcome::Api { batch } => batch,
            RecommendationOutcome::Fallback { batch, .. } => batch,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RecommendationOutcome::Fallback { .. })
    }
}
