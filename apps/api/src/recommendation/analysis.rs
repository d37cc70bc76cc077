//! Profile-side analysis computed locally: the user summary attached to every
//! batch and the per-career skill gap.

use std::collections::HashSet;

use crate::assessment::profile::NormalizedProfile;
use crate::recommendation::models::{SkillGapAnalysis, UserAnalysis};

/// Raw Likert score at or above which a work-preference flag is set.
pub const ORIENTATION_THRESHOLD: u8 = 4;

/// Field label per orientation (data, people, creative, leadership, hands-on),
/// in tie-break order.
const PRIMARY_FIELDS: [&str; 5] = [
    "Technology & Analytics",
    "Healthcare & Social Services",
    "Arts, Media & Design",
    "Business & Management",
    "Skilled Trades & Engineering",
];

const GENERALIST_FIELD: &str = "General / Exploring";

pub fn analyze_user(profile: &NormalizedProfile) -> UserAnalysis {
    let p = &profile.preferences;
    let scores = [
        p.working_with_data,
        p.working_with_people,
        p.creative_tasks,
        p.leadership,
        p.physical_hands_on_work,
    ];

    UserAnalysis {
        primary_field: classify_primary_field(&scores).to_string(),
        technical_skill_count: profile.technical_skills.len(),
        soft_skill_count: profile.soft_skills.len(),
        data_oriented: p.working_with_data >= ORIENTATION_THRESHOLD,
        people_oriented: p.working_with_people >= ORIENTATION_THRESHOLD,
        creative_oriented: p.creative_tasks >= ORIENTATION_THRESHOLD,
        leadership_oriented: p.leadership >= ORIENTATION_THRESHOLD,
        hands_on_oriented: p.physical_hands_on_work >= ORIENTATION_THRESHOLD,
    }
}

/// Picks the strongest orientation. Nothing at or above the threshold means
/// the user has no clear lean yet.
fn classify_primary_field(scores: &[u8; 5]) -> &'static str {
    let mut best: Option<(usize, u8)> = None;
    for (i, &score) in scores.iter().enumerate() {
        if score < ORIENTATION_THRESHOLD {
            continue;
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    best.map(|(i, _)| PRIMARY_FIELDS[i])
        .unwrap_or(GENERALIST_FIELD)
}

/// Compares a career's required skills against what the user reported.
/// Matching is case-insensitive; both output lists are deduplicated.
pub fn skill_gap(required: &[String], user_skills: &[String]) -> SkillGapAnalysis {
    let owned: HashSet<String> = user_skills.iter().map(|s| s.trim().to_lowercase()).collect();

    let mut seen = HashSet::new();
    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in required {
        let skill = skill.trim();
        let key = skill.to_lowercase();
        if skill.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        if owned.contains(&key) {
            matched_skills.push(skill.to_string());
        } else {
            missing_skills.push(skill.to_string());
        }
    }

    SkillGapAnalysis::from_lists(matched_skills, missing_skills)
}
