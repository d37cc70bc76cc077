use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Likert answer as the questionnaire sends it: a bare number, a slider
/// value wrapped in a sequence (`4` or `[4]`), or either one stringified.
///
/// Never fails to deserialize; anything unreadable lands in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreferenceInput {
    Scalar(i64),
    Float(f64),
    Text(String),
    Sequence(Vec<PreferenceInput>),
    Other(Value),
}

impl PreferenceInput {
    /// The integer this answer carries, rounded to the nearest whole number.
    /// Sequences contribute their first element.
    pub fn value(&self) -> Option<i64> {
        match self {
            PreferenceInput::Scalar(n) => Some(*n),
            PreferenceInput::Float(x) => round_finite(*x),
            PreferenceInput::Text(s) => s.trim().parse::<f64>().ok().and_then(round_finite),
            PreferenceInput::Sequence(values) => values.first().and_then(PreferenceInput::value),
            PreferenceInput::Other(_) => None,
        }
    }
}

fn round_finite(x: f64) -> Option<i64> {
    x.is_finite().then(|| x.round() as i64)
}

/// The questionnaire's answer object, exactly as the frontend accumulates it
/// in session state. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyAssessmentAnswers {
    pub user_id: Option<String>,
    pub age: Option<String>,
    pub location: Option<String>,
    pub education_level: Option<String>,
    pub certifications: Option<Vec<String>>,
    pub current_situation: Option<String>,
    pub current_role: Option<String>,
    /// Experience bucket label, e.g. `"3-5"`.
    pub experience: Option<String>,
    pub resume_text: Option<String>,
    pub linkedin_profile: Option<String>,
    pub technical_skills: Option<Vec<String>>,
    pub soft_skills: Option<Vec<String>>,

    pub working_with_data: Option<PreferenceInput>,
    pub working_with_people: Option<PreferenceInput>,
    pub creative_tasks: Option<PreferenceInput>,
    pub problem_solving: Option<PreferenceInput>,
    pub leadership: Option<PreferenceInput>,
    pub physical_hands_on_work: Option<PreferenceInput>,
    /// Older questionnaire revisions; read only when `physicalHandsOnWork` is absent.
    pub hands_on_work: Option<PreferenceInput>,
    pub physical_work: Option<PreferenceInput>,
    pub outdoor_work: Option<PreferenceInput>,
    pub mechanical_aptitude: Option<PreferenceInput>,
    pub independent_work: Option<PreferenceInput>,

    pub interests: Option<Vec<String>>,
    pub industries: Option<Vec<String>>,
    pub work_environment: Option<String>,
    pub career_goals: Option<String>,
    pub work_life_balance: Option<String>,
    pub salary_expectations: Option<String>,
}

impl LegacyAssessmentAnswers {
    /// The hands-on preference under whichever name the answer arrived with.
    pub fn hands_on_preference(&self) -> Option<&PreferenceInput> {
        self.physical_hands_on_work
            .as_ref()
            .or(self.hands_on_work.as_ref())
            .or(self.physical_work.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preference_accepts_scalar_and_sequence() {
        let scalar: PreferenceInput = serde_json::from_value(json!(4)).unwrap();
        let sequence: PreferenceInput = serde_json::from_value(json!([4])).unwrap();
        assert_eq!(scalar.value(), Some(4));
        assert_eq!(sequence.value(), Some(4));
    }

    #[test]
    fn test_empty_sequence_has_no_value() {
        let empty: PreferenceInput = serde_json::from_value(json!([])).unwrap();
        assert_eq!(empty.value(), None);
    }

    #[test]
    fn test_whole_float_reads_as_integer() {
        let whole: PreferenceInput = serde_json::from_value(json!(4.0)).unwrap();
        let half: PreferenceInput = serde_json::from_value(json!(4.5)).unwrap();
        let low: PreferenceInput = serde_json::from_value(json!(2.4)).unwrap();
        assert_eq!(whole.value(), Some(4));
        assert_eq!(half.value(), Some(5));
        assert_eq!(low.value(), Some(2));
    }

    #[test]
    fn test_numeric_string_is_parsed() {
        let text: PreferenceInput = serde_json::from_value(json!("4")).unwrap();
        let padded: PreferenceInput = serde_json::from_value(json!(" 3.0 ")).unwrap();
        assert_eq!(text.value(), Some(4));
        assert_eq!(padded.value(), Some(3));
    }

    #[test]
    fn test_loose_sequences_use_first_element() {
        let floats: PreferenceInput = serde_json::from_value(json!([4.5, 1])).unwrap();
        let strings: PreferenceInput = serde_json::from_value(json!(["2"])).unwrap();
        assert_eq!(floats.value(), Some(5));
        assert_eq!(strings.value(), Some(2));
    }

    #[test]
    fn test_unreadable_answers_have_no_value() {
        for raw in [json!("lots"), json!(true), json!({"value": 4}), json!([null])] {
            let input: PreferenceInput = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(input.value(), None, "{raw}");
        }
    }

    #[test]
    fn test_null_field_is_absent() {
        let answers: LegacyAssessmentAnswers =
            serde_json::from_value(json!({ "leadership": null })).unwrap();
        assert!(answers.leadership.is_none());
    }

    #[test]
    fn test_answers_deserialize_from_camel_case() {
        let answers: LegacyAssessmentAnswers = serde_json::from_value(json!({
            "experience": "6-10",
            "workingWithPeople": [5],
            "salaryExpectations": "100k-150k",
            "technicalSkills": ["Rust", "SQL"],
            "linkedinProfile": "https://linkedin.com/in/someone"
        }))
        .unwrap();

        assert_eq!(answers.experience.as_deref(), Some("6-10"));
        assert_eq!(
            answers.working_with_people,
            Some(PreferenceInput::Sequence(vec![PreferenceInput::Scalar(5)]))
        );
        assert_eq!(answers.technical_skills.unwrap().len(), 2);
        assert!(answers.working_with_data.is_none());
    }

    #[test]
    fn test_empty_object_is_valid() {
        let answers: LegacyAssessmentAnswers = serde_json::from_value(json!({})).unwrap();
        assert!(answers.current_role.is_none());
    }

    #[test]
    fn test_hands_on_prefers_canonical_name() {
        let answers = LegacyAssessmentAnswers {
            physical_hands_on_work: Some(PreferenceInput::Scalar(5)),
            hands_on_work: Some(PreferenceInput::Scalar(1)),
            ..Default::default()
        };
        assert_eq!(answers.hands_on_preference().and_then(|p| p.value()), Some(5));

        let legacy = LegacyAssessmentAnswers {
            physical_work: Some(PreferenceInput::Scalar(2)),
            ..Default::default()
        };
        assert_eq!(legacy.hands_on_preference().and_then(|p| p.value()), Some(2));
    }
}
