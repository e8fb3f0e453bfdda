//! neuropsy-instruments
//!
//! Psychometric instrument definitions and the scoring engine behind them:
//! classification bands, clinical interpretation, score collections and
//! profile heterogeneity. Pure data and pure functions.

pub mod battery;
pub mod classification;
pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod score;
pub mod scoring;

use scoring::{Domain, ScoreEntry, ScoreSpec, ValidationError};

/// Trait implemented by each psychometric instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "wisc_v", "conners_parent").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "WISC-V", "Conners-3 Parent").
    fn name(&self) -> &str;

    /// The domains and subscales this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Resolve a score name to its type, range and domain phrase.
    ///
    /// Domains that carry a composite are addressable by their own id.
    fn score_spec(&self, id: &str) -> Option<ScoreSpec> {
        for domain in self.domains() {
            if domain.id == id
                && let (Some(score_type), Some(range)) =
                    (domain.composite_score_type, domain.composite_range)
            {
                return Some(ScoreSpec {
                    id: domain.id.clone(),
                    name: domain.name.clone(),
                    score_type,
                    range,
                    domain: domain.description.clone().unwrap_or_default(),
                });
            }

            if let Some(subscale) = domain.subscales.iter().find(|s| s.id == id) {
                return Some(ScoreSpec {
                    id: subscale.id.clone(),
                    name: subscale.name.clone(),
                    score_type: subscale.score_type,
                    range: subscale.range,
                    domain: subscale.description.clone().unwrap_or_default(),
                });
            }
        }
        None
    }

    /// Every addressable score name, composites first within each domain.
    fn score_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for domain in self.domains() {
            if domain.composite_score_type.is_some() {
                ids.push(domain.id.as_str());
            }
            ids.extend(domain.subscales.iter().map(|s| s.id.as_str()));
        }
        ids
    }

    /// Report entries whose value falls outside the instrument's range.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            if let Some(spec) = self.score_spec(&entry.subscale_id)
                && !spec.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: spec.range,
                    score_type: spec.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        spec.name,
                        entry.value,
                        spec.range.min,
                        spec.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Fail on the first out-of-range entry.
    fn ensure_in_range(&self, scores: &[ScoreEntry]) -> Result<(), error::InstrumentError> {
        match self.validate_scores(scores).into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    battery::BatteryKind::ALL
        .iter()
        .map(|kind| kind.instrument())
        .collect()
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
