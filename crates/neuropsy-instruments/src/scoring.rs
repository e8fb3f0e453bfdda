use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// The normative scale a score is expressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Index score, mean=100, SD=15.
    Standard,
    /// Subtest (scalar) score, mean=10, SD=3.
    Scaled,
    /// Questionnaire T-score, mean=50, SD=10.
    TScore,
}

impl ScoreType {
    pub fn mean(self) -> f64 {
        match self {
            ScoreType::Standard => 100.0,
            ScoreType::Scaled => 10.0,
            ScoreType::TScore => 50.0,
        }
    }

    pub fn standard_deviation(self) -> f64 {
        match self {
            ScoreType::Standard => 15.0,
            ScoreType::Scaled => 3.0,
            ScoreType::TScore => 10.0,
        }
    }

    /// Range accepted at score entry.
    pub fn entry_range(self) -> ScoreRange {
        let (min, max) = match self {
            ScoreType::Standard => (40.0, 160.0),
            ScoreType::Scaled => (1.0, 19.0),
            ScoreType::TScore => (20.0, 80.0),
        };
        ScoreRange {
            min,
            max,
            step: Some(1.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreType::Standard => "Note standard",
            ScoreType::Scaled => "Note scalaire",
            ScoreType::TScore => "Score T",
        }
    }
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }

    /// Snap `value` to the nearest step and pull it back inside the range
    /// bounds.
    pub fn clamp(&self, value: f64) -> f64 {
        let snapped = match self.step {
            Some(step) if step > 0.0 => self.min + ((value - self.min) / step).round() * step,
            _ => value,
        };
        snapped.clamp(self.min, self.max)
    }
}

/// A single scored item within a domain (subtest or questionnaire scale).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    /// Domain phrase substituted into interpretation sentences.
    pub description: Option<String>,
}

/// A top-level domain within an instrument. Cognitive indices carry a
/// composite score of their own; questionnaire groupings do not.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// Everything needed to turn a raw entry into a classified score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreSpec {
    pub id: String,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub domain: String,
}

/// A score entered by the clinician.
///
/// `present` is the "renseigné" checkbox: an entry without it is dropped
/// from its battery even though a value was typed in.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub subscale_id: String,
    pub value: f64,
    #[serde(default)]
    pub present: bool,
}

impl ScoreEntry {
    pub fn present(subscale_id: impl Into<String>, value: f64) -> Self {
        Self {
            subscale_id: subscale_id.into(),
            value,
            present: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub subscale_id: String,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub score_type: ScoreType,
    pub message: String,
}
