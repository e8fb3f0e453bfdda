//! Serializable view of an evaluation for presentation layers and
//! user templates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuropsy_core::models::patient::Patient;
use neuropsy_instruments::battery::{Batteries, BatteryKind};
use neuropsy_instruments::instruments::wisc_v::PRIMARY_INDICES;
use neuropsy_instruments::interpretation::{color_for, is_clinically_significant, percentile_rank};
use neuropsy_instruments::score::{Heterogeneity, Score, ScoreCollection};

use crate::informants::InformantComparison;
use crate::profile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRow {
    pub name: String,
    pub value: f64,
    pub classification: String,
    /// Band percentile label, e.g. `"75-90"`.
    pub percentile: Option<String>,
    /// Normal-curve percentile rank, one decimal.
    pub percentile_rank: f64,
    pub color: String,
    pub interpretation: String,
    pub clinically_significant: bool,
}

impl ScoreRow {
    fn from_score(score: &Score) -> Option<Self> {
        let value = score.value?;
        Some(Self {
            name: score.name.clone(),
            value,
            classification: score.classification.clone(),
            percentile: score.percentile.clone(),
            percentile_rank: percentile_rank(value, score.score_type),
            color: color_for(&score.classification, score.score_type).to_string(),
            interpretation: score.interpretation.clone(),
            clinically_significant: is_clinically_significant(value, score.score_type),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BatterySummary {
    pub id: String,
    pub name: String,
    pub scores: Vec<ScoreRow>,
}

impl BatterySummary {
    fn new(kind: BatteryKind, collection: &ScoreCollection) -> Self {
        Self {
            id: kind.id().to_string(),
            name: kind.short_name().to_string(),
            scores: collection
                .valid_scores()
                .filter_map(ScoreRow::from_score)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSummary {
    pub patient_name: String,
    pub age: Option<i16>,
    /// `dd/mm/yyyy`
    pub exam_date: Option<String>,
    pub batteries: Vec<BatterySummary>,
    /// Spread of the WISC-V primary indices, when WISC-V was administered.
    pub wisc_profile: Option<Heterogeneity>,
    /// Present when both Conners forms were completed.
    pub informants: Option<InformantComparison>,
    pub strengths: Vec<String>,
    pub fragilities: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ReportSummary {
    pub fn build(patient: &Patient, batteries: &Batteries) -> Self {
        let informants = match (
            batteries.completed(BatteryKind::ConnersParent),
            batteries.completed(BatteryKind::ConnersTeacher),
        ) {
            (Some(parent), Some(teacher)) => Some(InformantComparison::compare(parent, teacher)),
            _ => None,
        };

        Self {
            patient_name: patient.full_name(),
            age: patient.age_at_exam(),
            exam_date: patient
                .exam_date
                .map(|d| d.strftime("%d/%m/%Y").to_string()),
            batteries: batteries
                .iter_completed()
                .map(|(kind, collection)| BatterySummary::new(kind, collection))
                .collect(),
            wisc_profile: batteries
                .completed(BatteryKind::WiscV)
                .map(|wisc| wisc.heterogeneity(&PRIMARY_INDICES)),
            informants,
            strengths: profile::strengths(batteries),
            fragilities: profile::fragilities(batteries),
            recommendations: profile::recommendations(batteries),
        }
    }
}
