use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinical history gathered before testing, plus the examiner's
/// observations during the session. All fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Anamnesis {
    // Referral
    pub referral_reason: String,
    pub referrer: String,

    // Developmental history
    pub pregnancy_and_birth: String,
    pub motor_development: String,
    pub language_development: String,

    // Schooling
    pub school_history: String,
    pub repeated_grades: String,
    pub existing_accommodations: String,

    // Medical and family background
    pub medical_history: String,
    pub family_history: String,
    pub current_follow_up: String,

    // Observations during the examination
    pub general_behavior: String,
    pub collaboration: String,
    pub fatigability: String,
    pub performance_anxiety: String,
    pub observed_strategies: String,
    pub other_observations: String,
}

impl Anamnesis {
    fn history_fields(&self) -> [&str; 11] {
        [
            self.referral_reason.as_str(),
            self.referrer.as_str(),
            self.pregnancy_and_birth.as_str(),
            self.motor_development.as_str(),
            self.language_development.as_str(),
            self.school_history.as_str(),
            self.repeated_grades.as_str(),
            self.existing_accommodations.as_str(),
            self.medical_history.as_str(),
            self.family_history.as_str(),
            self.current_follow_up.as_str(),
        ]
    }

    fn observation_fields(&self) -> [&str; 6] {
        [
            self.general_behavior.as_str(),
            self.collaboration.as_str(),
            self.fatigability.as_str(),
            self.performance_anxiety.as_str(),
            self.observed_strategies.as_str(),
            self.other_observations.as_str(),
        ]
    }

    pub fn has_content(&self) -> bool {
        self.history_fields()
            .iter()
            .chain(self.observation_fields().iter())
            .any(|f| !f.is_empty())
    }

    pub fn has_observations(&self) -> bool {
        self.observation_fields().iter().any(|f| !f.is_empty())
    }

    pub fn has_developmental_history(&self) -> bool {
        [
            &self.pregnancy_and_birth,
            &self.motor_development,
            &self.language_development,
        ]
        .iter()
        .any(|f| !f.is_empty())
    }

    pub fn has_school_history(&self) -> bool {
        [
            &self.school_history,
            &self.repeated_grades,
            &self.existing_accommodations,
        ]
        .iter()
        .any(|f| !f.is_empty())
    }

    pub fn has_medical_history(&self) -> bool {
        [
            &self.medical_history,
            &self.family_history,
            &self.current_follow_up,
        ]
        .iter()
        .any(|f| !f.is_empty())
    }
}
