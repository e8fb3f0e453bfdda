use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use neuropsy_core::files;
use neuropsy_core::models::anamnesis::Anamnesis;
use neuropsy_core::models::patient::Patient;
use neuropsy_instruments::battery::{Batteries, BatteryKind};
use neuropsy_instruments::score::Score;
use neuropsy_instruments::scoring::ScoreEntry;

use crate::engine::generate_report;
use crate::error::ReportError;
use crate::summary::ReportSummary;

/// Everything entered during one evaluation.
///
/// Patient and anamnesis stay `None` until first edited; report generation
/// refuses to run without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSession {
    pub id: Uuid,
    pub patient: Option<Patient>,
    pub anamnesis: Option<Anamnesis>,
    #[serde(default)]
    pub batteries: Batteries,
    #[serde(default)]
    last_report: Option<String>,
}

impl Default for EvaluationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            patient: None,
            anamnesis: None,
            batteries: Batteries::default(),
            last_report: None,
        }
    }

    pub fn patient_mut(&mut self) -> &mut Patient {
        self.patient.get_or_insert_default()
    }

    pub fn anamnesis_mut(&mut self) -> &mut Anamnesis {
        self.anamnesis.get_or_insert_default()
    }

    /// Record one catalogue entry. Values are snapped to the entry step and
    /// clamped to the entry range.
    pub fn record_score(
        &mut self,
        kind: BatteryKind,
        entry: &ScoreEntry,
    ) -> Result<Option<&Score>, ReportError> {
        let stored = self.batteries.record(kind, entry)?;
        if let Some(score) = stored
            && score.value != Some(entry.value)
        {
            warn!(
                battery = %kind,
                score = %entry.subscale_id,
                entered = entry.value,
                stored = ?score.value,
                "score adjusted to entry range and step"
            );
        }
        Ok(stored)
    }

    /// Completed batteries with their count of valid scores.
    pub fn completed_batteries(&self) -> Vec<(BatteryKind, usize)> {
        self.batteries
            .iter_completed()
            .map(|(kind, c)| (kind, c.valid_count()))
            .collect()
    }

    fn ready(&self) -> Result<(&Patient, &Anamnesis), ReportError> {
        let patient = self.patient.as_ref().ok_or(ReportError::MissingPatient)?;
        let anamnesis = self
            .anamnesis
            .as_ref()
            .ok_or(ReportError::MissingAnamnesis)?;
        if !self.batteries.has_any_scores() {
            return Err(ReportError::NoCompletedBattery);
        }
        Ok((patient, anamnesis))
    }

    /// Compose the report and keep it as the session's latest report.
    ///
    /// On a precondition failure the previously stored report is kept.
    pub fn generate_report(&mut self) -> Result<&str, ReportError> {
        let (patient, anamnesis) = self.ready()?;
        let report = generate_report(patient, anamnesis, &self.batteries);
        info!(
            session = %self.id,
            batteries = self.completed_batteries().len(),
            chars = report.len(),
            "report generated"
        );
        Ok(self.last_report.insert(report).as_str())
    }

    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    /// `rapport_{last}_{first}.md`, once a patient is set.
    pub fn report_file_name(&self) -> Option<String> {
        self.patient.as_ref().map(files::report_markdown)
    }

    pub fn summary(&self) -> Result<ReportSummary, ReportError> {
        let (patient, _) = self.ready()?;
        Ok(ReportSummary::build(patient, &self.batteries))
    }

    /// Discard all entered data and start a fresh session.
    pub fn reset(&mut self) {
        info!(session = %self.id, "session reset");
        *self = Self::new();
    }
}
