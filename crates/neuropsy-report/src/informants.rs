//! Parent / teacher agreement on the informant-paired rating scales.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use neuropsy_instruments::score::ScoreCollection;

/// Gap from which two ratings of the same scale are considered divergent.
pub const DIVERGENCE_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InformantRow {
    pub scale: String,
    pub parent: f64,
    pub teacher: f64,
    pub gap: f64,
    pub convergent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InformantComparison {
    /// One row per scale valid in both forms, in parent entry order.
    pub rows: Vec<InformantRow>,
}

impl InformantComparison {
    pub fn compare(parent: &ScoreCollection, teacher: &ScoreCollection) -> Self {
        let rows = parent
            .valid_scores()
            .filter_map(|p| {
                let t = teacher.valid(&p.name)?;
                let (parent_value, teacher_value) = (p.value?, t.value?);
                let gap = (parent_value - teacher_value).abs();
                Some(InformantRow {
                    scale: p.name.clone(),
                    parent: parent_value,
                    teacher: teacher_value,
                    gap,
                    convergent: gap < DIVERGENCE_THRESHOLD,
                })
            })
            .collect();
        Self { rows }
    }

    pub fn convergences(&self) -> impl Iterator<Item = &InformantRow> {
        self.rows.iter().filter(|r| r.convergent)
    }

    pub fn divergences(&self) -> impl Iterator<Item = &InformantRow> {
        self.rows.iter().filter(|r| !r.convergent)
    }

    pub fn divergence_count(&self) -> usize {
        self.divergences().count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
