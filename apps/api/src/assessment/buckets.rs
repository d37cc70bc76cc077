//! Bucket tables — the fixed label sets the questionnaire uses instead of raw numbers.
//!
//! Every lookup here is total: unknown labels resolve to a documented default,
//! never an error. Each table also has an inverse so the outbound request can
//! re-derive the label from the normalized value.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBucket {
    None,
    OneToTwo,
    ThreeToFive,
    SixToTen,
    TenToTwenty,
    TwentyPlus,
}

impl ExperienceBucket {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "0" => Some(Self::None),
            "1-2" => Some(Self::OneToTwo),
            "3-5" => Some(Self::ThreeToFive),
            "6-10" => Some(Self::SixToTen),
            "10-20" => Some(Self::TenToTwenty),
            "20+" => Some(Self::TwentyPlus),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::OneToTwo => "1-2",
            Self::ThreeToFive => "3-5",
            Self::SixToTen => "6-10",
            Self::TenToTwenty => "10-20",
            Self::TwentyPlus => "20+",
        }
    }

    pub fn years(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::OneToTwo => 1.5,
            Self::ThreeToFive => 4.0,
            Self::SixToTen => 8.0,
            Self::TenToTwenty => 15.0,
            Self::TwentyPlus => 25.0,
        }
    }
}

/// Years estimate for a legacy experience label. Unknown or missing → 0.
pub fn years_for_bucket(label: &str) -> f64 {
    ExperienceBucket::from_label(label)
        .map(ExperienceBucket::years)
        .unwrap_or(0.0)
}

/// Inverse of `years_for_bucket`. Lossy: any year count lands in the bucket
/// whose range contains it.
pub fn bucket_for_years(years: f64) -> ExperienceBucket {
    if !years.is_finite() || years < 1.0 {
        ExperienceBucket::None
    } else if years <= 2.0 {
        ExperienceBucket::OneToTwo
    } else if years <= 5.0 {
        ExperienceBucket::ThreeToFive
    } else if years <= 10.0 {
        ExperienceBucket::SixToTen
    } else if years <= 20.0 {
        ExperienceBucket::TenToTwenty
    } else {
        ExperienceBucket::TwentyPlus
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CURRENCY: &str = "USD";

/// Annual salary range. `min <= max` always holds for values built here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

impl SalaryRange {
    pub fn usd(min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryBucket {
    Under30k,
    From30kTo50k,
    From50kTo70k,
    From70kTo100k,
    From100kTo150k,
    From150kTo250k,
    Over250k,
    Flexible,
}

impl SalaryBucket {
    const ALL: [SalaryBucket; 8] = [
        Self::Under30k,
        Self::From30kTo50k,
        Self::From50kTo70k,
        Self::From70kTo100k,
        Self::From100kTo150k,
        Self::From150kTo250k,
        Self::Over250k,
        Self::Flexible,
    ];

    /// Unknown labels are treated as `flexible`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.label() == label)
            .unwrap_or(Self::Flexible)
    }

    /// Recovers the bucket from a range built by `range()`. Anything else is `flexible`.
    pub fn from_range(range: &SalaryRange) -> Self {
        Self::ALL
            .into_iter()
            .find(|b| b.bounds() == (range.min, range.max))
            .unwrap_or(Self::Flexible)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Under30k => "under-30k",
            Self::From30kTo50k => "30k-50k",
            Self::From50kTo70k => "50k-70k",
            Self::From70kTo100k => "70k-100k",
            Self::From100kTo150k => "100k-150k",
            Self::From150kTo250k => "150k-250k",
            Self::Over250k => "250k-plus",
            Self::Flexible => "flexible",
        }
    }

    fn bounds(self) -> (u32, u32) {
        match self {
            Self::Under30k => (0, 30_000),
            Self::From30kTo50k => (30_000, 50_000),
            Self::From50kTo70k => (50_000, 70_000),
            Self::From70kTo100k => (70_000, 100_000),
            Self::From100kTo150k => (100_000, 150_000),
            Self::From150kTo250k => (150_000, 250_000),
            Self::Over250k => (250_000, 500_000),
            Self::Flexible => (0, 500_000),
        }
    }

    pub fn range(self) -> SalaryRange {
        let (min, max) = self.bounds();
        SalaryRange::usd(min, max)
    }
}

pub fn salary_range_for_bucket(label: &str) -> SalaryRange {
    SalaryBucket::from_label(label).range()
}

// ────────────────────────────────────────────────────────────────────────────
// Work-life balance
// ────────────────────────────────────────────────────────────────────────────

pub const NEUTRAL_SCORE: u8 = 3;

const WORK_LIFE_BALANCE_TABLE: &[(&str, u8)] = &[
    ("not-important", 1),
    ("somewhat-important", 2),
    ("important", 3),
    ("very-important", 4),
    ("critical", 5),
];

/// Importance score 1–5 for a work-life-balance label. Unknown → 3.
pub fn work_life_balance_score(label: &str) -> u8 {
    let label = label.trim();
    WORK_LIFE_BALANCE_TABLE
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, s)| *s)
        .unwrap_or(NEUTRAL_SCORE)
}

pub fn work_life_balance_label(score: u8) -> &'static str {
    WORK_LIFE_BALANCE_TABLE
        .iter()
        .find(|(_, s)| *s == score)
        .map(|(l, _)| *l)
        .unwrap_or("important")
}

// ────────────────────────────────────────────────────────────────────────────
// Work environment
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemotePreference {
    Required,
    Preferred,
    No,
    #[default]
    Flexible,
}

impl RemotePreference {
    /// Maps the questionnaire's work-environment label. Unknown → flexible.
    pub fn from_work_environment(label: &str) -> Self {
        match label.trim() {
            "remote" => Self::Required,
            "hybrid" => Self::Preferred,
            "office" => Self::No,
            _ => Self::Flexible,
        }
    }

    pub fn work_environment_label(self) -> &'static str {
        match self {
            Self::Required => "remote",
            Self::Preferred => "hybrid",
            Self::No => "office",
            Self::Flexible => "flexible",
        }
    }
}

pub fn remote_preference(label: &str) -> RemotePreference {
    RemotePreference::from_work_environment(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_table_matches_every_bucket() {
        assert_eq!(years_for_bucket("0"), 0.0);
        assert_eq!(years_for_bucket("1-2"), 1.5);
        assert_eq!(years_for_bucket("3-5"), 4.0);
        assert_eq!(years_for_bucket("6-10"), 8.0);
        assert_eq!(years_for_bucket("10-20"), 15.0);
        assert_eq!(years_for_bucket("20+"), 25.0);
    }

    #[test]
    fn test_unknown_experience_label_is_zero_years() {
        assert_eq!(years_for_bucket(""), 0.0);
        assert_eq!(years_for_bucket("a decade"), 0.0);
        assert_eq!(years_for_bucket("5"), 0.0);
    }

    #[test]
    fn test_bucket_for_years_inverts_table_values() {
        for label in ["0", "1-2", "3-5", "6-10", "10-20", "20+"] {
            let years = years_for_bucket(label);
            assert_eq!(bucket_for_years(years).label(), label, "years={years}");
        }
    }

    #[test]
    fn test_bucket_for_years_boundaries() {
        assert_eq!(bucket_for_years(0.5), ExperienceBucket::None);
        assert_eq!(bucket_for_years(2.0), ExperienceBucket::OneToTwo);
        assert_eq!(bucket_for_years(10.0), ExperienceBucket::SixToTen);
        assert_eq!(bucket_for_years(40.0), ExperienceBucket::TwentyPlus);
        assert_eq!(bucket_for_years(f64::NAN), ExperienceBucket::None);
    }

    #[test]
    fn test_salary_table_exact() {
        let expected = [
            ("under-30k", 0, 30_000),
            ("30k-50k", 30_000, 50_000),
            ("50k-70k", 50_000, 70_000),
            ("70k-100k", 70_000, 100_000),
            ("100k-150k", 100_000, 150_000),
            ("150k-250k", 150_000, 250_000),
            ("250k-plus", 250_000, 500_000),
        ];
        for (label, min, max) in expected {
            let range = salary_range_for_bucket(label);
            assert_eq!((range.min, range.max), (min, max), "bucket {label}");
            assert!(range.min <= range.max);
            assert_eq!(range.currency, "USD");
        }
    }

    #[test]
    fn test_unknown_salary_is_flexible() {
        assert_eq!(salary_range_for_bucket("flexible"), SalaryRange::usd(0, 500_000));
        assert_eq!(salary_range_for_bucket("lots"), SalaryRange::usd(0, 500_000));
    }

    #[test]
    fn test_salary_bucket_round_trips_through_range() {
        let range = salary_range_for_bucket("70k-100k");
        assert_eq!(SalaryBucket::from_range(&range).label(), "70k-100k");
        assert_eq!(
            SalaryBucket::from_range(&SalaryRange::usd(1, 2)),
            SalaryBucket::Flexible
        );
    }

    #[test]
    fn test_salary_range_usd_orders_bounds() {
        let range = SalaryRange::usd(90_000, 60_000);
        assert_eq!((range.min, range.max), (60_000, 90_000));
    }

    #[test]
    fn test_work_life_balance_table() {
        assert_eq!(work_life_balance_score("not-important"), 1);
        assert_eq!(work_life_balance_score("somewhat-important"), 2);
        assert_eq!(work_life_balance_score("important"), 3);
        assert_eq!(work_life_balance_score("very-important"), 4);
        assert_eq!(work_life_balance_score("critical"), 5);
        assert_eq!(work_life_balance_score("whatever"), 3);
        assert_eq!(work_life_balance_label(5), "critical");
    }

    #[test]
    fn test_remote_preference_table() {
        assert_eq!(remote_preference("remote"), RemotePreference::Required);
        assert_eq!(remote_preference("hybrid"), RemotePreference::Preferred);
        assert_eq!(remote_preference("office"), RemotePreference::No);
        assert_eq!(remote_preference("flexible"), RemotePreference::Flexible);
        assert_eq!(remote_preference("spaceship"), RemotePreference::Flexible);
    }

    #[test]
    fn test_remote_preference_serializes_snake_case() {
        let json = serde_json::to_string(&RemotePreference::Required).unwrap();
        assert_eq!(json, "\"required\"");
    }
}
