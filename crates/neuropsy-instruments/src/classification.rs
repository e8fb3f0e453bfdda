//! Static band tables and the classifier built on them.
//!
//! Each table is declared from the highest band to the lowest and is
//! open-ended at both extremes, so every finite value lands in exactly one
//! band. Lookup is a linear scan where the first inclusive match wins.

use serde::Serialize;

use crate::scoring::ScoreType;

/// Classification labels, shared between tables where the wording matches.
pub mod label {
    pub const VERY_SUPERIOR: &str = "Très Supérieur";
    pub const SUPERIOR: &str = "Supérieur";
    pub const HIGH_AVERAGE: &str = "Moyen Fort";
    pub const AVERAGE: &str = "Moyen";
    pub const LOW_AVERAGE: &str = "Moyen Faible";
    pub const BORDERLINE: &str = "Limite (Zone Frontière)";
    /// Scaled-score wording of the borderline band.
    pub const SCALED_BORDERLINE: &str = "Limite";
    pub const VERY_LOW: &str = "Très Faible";

    pub const VERY_ELEVATED: &str = "Très Élevé";
    pub const ELEVATED: &str = "Élevé (À Risque)";
    pub const HIGH_AVERAGE_T: &str = "Moyen Haut";
    pub const LOW_AVERAGE_T: &str = "Moyen Bas";
    pub const LOW: &str = "Bas";

    /// Returned when no band matches.
    pub const UNCLASSIFIED: &str = "Non classifié";
}

/// Per-table payload carried by a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandExtra {
    /// Percentile range label (standard scores).
    Percentile(&'static str),
    /// Clinical significance flag (T-scores).
    Significant(bool),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationBand {
    /// Inclusive lower bound, `None` when open-ended.
    pub min: Option<f64>,
    /// Inclusive upper bound, `None` when open-ended.
    pub max: Option<f64>,
    pub label: &'static str,
    pub extra: BandExtra,
}

impl ClassificationBand {
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub fn percentile(&self) -> Option<&'static str> {
        match self.extra {
            BandExtra::Percentile(p) => Some(p),
            _ => None,
        }
    }
}

const fn band(
    min: Option<f64>,
    max: Option<f64>,
    label: &'static str,
    extra: BandExtra,
) -> ClassificationBand {
    ClassificationBand {
        min,
        max,
        label,
        extra,
    }
}

pub static STANDARD_BANDS: [ClassificationBand; 7] = [
    band(Some(130.0), None, label::VERY_SUPERIOR, BandExtra::Percentile(">98")),
    band(Some(120.0), Some(129.0), label::SUPERIOR, BandExtra::Percentile("91-98")),
    band(Some(110.0), Some(119.0), label::HIGH_AVERAGE, BandExtra::Percentile("75-90")),
    band(Some(90.0), Some(109.0), label::AVERAGE, BandExtra::Percentile("25-74")),
    band(Some(80.0), Some(89.0), label::LOW_AVERAGE, BandExtra::Percentile("9-24")),
    band(Some(70.0), Some(79.0), label::BORDERLINE, BandExtra::Percentile("2-8")),
    band(None, Some(69.0), label::VERY_LOW, BandExtra::Percentile("<2")),
];

pub static SCALED_BANDS: [ClassificationBand; 7] = [
    band(Some(16.0), None, label::VERY_SUPERIOR, BandExtra::None),
    band(Some(14.0), Some(15.0), label::SUPERIOR, BandExtra::None),
    band(Some(12.0), Some(13.0), label::HIGH_AVERAGE, BandExtra::None),
    band(Some(8.0), Some(11.0), label::AVERAGE, BandExtra::None),
    band(Some(6.0), Some(7.0), label::LOW_AVERAGE, BandExtra::None),
    band(Some(4.0), Some(5.0), label::SCALED_BORDERLINE, BandExtra::None),
    band(None, Some(3.0), label::VERY_LOW, BandExtra::None),
];

pub static T_SCORE_BANDS: [ClassificationBand; 6] = [
    band(Some(70.0), None, label::VERY_ELEVATED, BandExtra::Significant(true)),
    band(Some(65.0), Some(69.0), label::ELEVATED, BandExtra::Significant(true)),
    band(Some(60.0), Some(64.0), label::HIGH_AVERAGE_T, BandExtra::Significant(false)),
    band(Some(40.0), Some(59.0), label::AVERAGE, BandExtra::Significant(false)),
    band(Some(35.0), Some(39.0), label::LOW_AVERAGE_T, BandExtra::Significant(false)),
    band(None, Some(34.0), label::LOW, BandExtra::Significant(false)),
];

pub fn bands(score_type: ScoreType) -> &'static [ClassificationBand] {
    match score_type {
        ScoreType::Standard => &STANDARD_BANDS,
        ScoreType::Scaled => &SCALED_BANDS,
        ScoreType::TScore => &T_SCORE_BANDS,
    }
}

/// First band of the table containing `value`.
pub fn find_band(value: f64, score_type: ScoreType) -> Option<&'static ClassificationBand> {
    bands(score_type).iter().find(|b| b.contains(value))
}

/// Result of classifying a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub label: &'static str,
    /// Percentile range label, standard scores only.
    pub percentile: Option<&'static str>,
}

impl Classification {
    pub const UNCLASSIFIED: Classification = Classification {
        label: label::UNCLASSIFIED,
        percentile: None,
    };

    pub fn is_classified(&self) -> bool {
        self.label != label::UNCLASSIFIED
    }
}

pub fn classify(value: f64, score_type: ScoreType) -> Classification {
    match find_band(value, score_type) {
        Some(band) => Classification {
            label: band.label,
            percentile: band.percentile(),
        },
        None => Classification::UNCLASSIFIED,
    }
}
