use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classification::classify;
use crate::interpretation::interpret;
use crate::scoring::ScoreType;

/// Spread between the strongest and weakest index from which a profile is
/// considered heterogeneous.
pub const HETEROGENEITY_THRESHOLD: f64 = 15.0;

/// A named score with its derived classification and interpretation.
///
/// The derived fields are computed once, when the score is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Score {
    pub name: String,
    pub value: Option<f64>,
    pub score_type: ScoreType,
    pub domain: String,
    pub percentile: Option<String>,
    pub classification: String,
    pub interpretation: String,
}

impl Score {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        score_type: ScoreType,
        domain: impl Into<String>,
    ) -> Self {
        let domain = domain.into();
        let classification = classify(value, score_type);
        let interpretation = interpret(value, score_type, &domain);
        Self {
            name: name.into(),
            value: Some(value),
            score_type,
            domain,
            percentile: classification.percentile.map(str::to_string),
            classification: classification.label.to_string(),
            interpretation,
        }
    }

    /// A score that was listed but never filled in.
    pub fn unanswered(name: impl Into<String>, score_type: ScoreType, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            score_type,
            domain: domain.into(),
            percentile: None,
            classification: String::new(),
            interpretation: String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Value as printed in report tables (integer part).
    pub fn whole_value(&self) -> Option<i64> {
        self.value.map(|v| v as i64)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}: {} ({})", self.name, value, self.classification),
            None => write!(f, "{}: Non renseigné", self.name),
        }
    }
}

/// Dispersion among a subset of a battery's scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Heterogeneity {
    pub is_homogeneous: bool,
    pub max_gap: f64,
    /// Every score tied for the lowest value.
    pub lowest: Vec<Score>,
    /// Every score tied for the highest value.
    pub highest: Vec<Score>,
}

impl Heterogeneity {
    fn homogeneous() -> Self {
        Self {
            is_homogeneous: true,
            max_gap: 0.0,
            lowest: Vec::new(),
            highest: Vec::new(),
        }
    }
}

/// The scores of one test or battery, keyed by name.
///
/// Re-adding a name replaces the earlier score in place, so entry order is
/// the order in which names were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreCollection {
    pub name: String,
    scores: Vec<Score>,
}

impl ScoreCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: Vec::new(),
        }
    }

    pub fn add(&mut self, score: Score) {
        match self.scores.iter_mut().find(|s| s.name == score.name) {
            Some(existing) => *existing = score,
            None => self.scores.push(score),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Score> {
        self.scores.iter().find(|s| s.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Score> {
        let index = self.scores.iter().position(|s| s.name == name)?;
        Some(self.scores.remove(index))
    }

    /// All scores, valid or not, in entry order.
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn valid_scores(&self) -> impl Iterator<Item = &Score> {
        self.scores.iter().filter(|s| s.is_valid())
    }

    pub fn valid_count(&self) -> usize {
        self.valid_scores().count()
    }

    pub fn has_scores(&self) -> bool {
        self.valid_scores().next().is_some()
    }

    pub fn scores_by_type(&self, score_type: ScoreType) -> impl Iterator<Item = &Score> {
        self.valid_scores().filter(move |s| s.score_type == score_type)
    }

    /// Valid score by name.
    pub fn valid(&self, name: &str) -> Option<&Score> {
        self.get(name).filter(|s| s.is_valid())
    }

    /// Spread across the valid scores among `names`.
    ///
    /// Fewer than two valid scores is reported as homogeneous with no gap.
    pub fn heterogeneity(&self, names: &[&str]) -> Heterogeneity {
        let subset: Vec<(&Score, f64)> = names
            .iter()
            .filter_map(|name| self.valid(name))
            .filter_map(|s| s.value.map(|v| (s, v)))
            .collect();

        if subset.len() < 2 {
            return Heterogeneity::homogeneous();
        }

        let min = subset.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
        let max = subset.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
        let gap = max - min;

        let tied = |target: f64| -> Vec<Score> {
            subset
                .iter()
                .filter(|(_, v)| *v == target)
                .map(|(s, _)| (*s).clone())
                .collect()
        };

        Heterogeneity {
            is_homogeneous: gap < HETEROGENEITY_THRESHOLD,
            max_gap: gap,
            lowest: tied(min),
            highest: tied(max),
        }
    }
}
