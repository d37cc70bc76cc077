use chrono::Utc;

use crate::assessment::buckets::SalaryRange;
use crate::assessment::profile::NormalizedProfile;
use crate::recommendation::analysis::{analyze_user, skill_gap};
use crate::recommendation::models::{
    BatchMetadata, CareerRecommendation, ExplorationLevel, RecommendationBatch,
};
use crate::recommendation::wire::profile_skills;

/// Title of the single synthetic career served when the backend is unavailable.
pub const FALLBACK_TITLE: &str = "Data Analyst (Sample)";

const FALLBACK_SKILLS: &[&str] = &["SQL", "Excel", "Data Visualization", "Statistics", "Python"];

/// Builds the offline batch: one illustrative career plus the analysis the
/// profile supports on its own. Deterministic apart from the timestamp.
pub fn fallback_batch(profile: &NormalizedProfile, level: ExplorationLevel) -> RecommendationBatch {
    let required_skills: Vec<String> = FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
    let gap = skill_gap(&required_skills, &profile_skills(profile));

    let recommendation = CareerRecommendation {
        title: FALLBACK_TITLE.to_string(),
        description: "Collects, cleans and interprets data sets to answer business questions. \
                      Shown as an example while personalised recommendations are unavailable."
            .to_string(),
        career_field: "Technology & Analytics".to_string(),
        experience_level: "Entry-level".to_string(),
        salary_range: SalaryRange::usd(55_000, 85_000),
        relevance_score: 0.5,
        relevance_percent: 50,
        confidence_score: 0.0,
        zone: level.zone(),
        match_reasons: vec![
            "Example career shown while the recommendation service is unavailable".to_string(),
        ],
        skill_gap: gap,
        required_skills,
        learning_path: "Learn SQL and spreadsheet analysis, then build a dashboard from a public data set."
            .to_string(),
        companies: vec!["Deloitte".to_string(), "Accenture".to_string(), "IBM".to_string()],
        work_environments: vec!["Office".to_string(), "Hybrid".to_string()],
        remote_options: "Hybrid and remote roles are common".to_string(),
        demand_level: "high".to_string(),
        growth_outlook: "growing".to_string(),
    };

    RecommendationBatch {
        recommendations: vec![recommendation],
        user_analysis: analyze_user(profile),
        metadata: BatchMetadata {
            exploration_level: level,
            filters_applied: vec![],
            timestamp: Utc::now(),
        },
        total_careers_considered: 1,
    }
}
