//! JSON evaluation files: the patient record, the anamnesis and the scores
//! entered per battery.

use std::path::Path;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use neuropsy_core::models::anamnesis::Anamnesis;
use neuropsy_core::models::patient::Patient;
use neuropsy_instruments::battery::BatteryKind;
use neuropsy_instruments::scoring::ScoreEntry;
use neuropsy_report::session::EvaluationSession;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationFile {
    pub patient: Option<Patient>,
    pub anamnesis: Option<Anamnesis>,
    #[serde(default)]
    pub batteries: Vec<BatteryInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryInput {
    pub battery: BatteryKind,
    pub scores: Vec<ScoreLine>,
}

/// One score as written in the file. Lines are "renseigné" unless
/// `present` is explicitly false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreLine {
    pub name: String,
    pub value: f64,
    #[serde(default = "default_present")]
    pub present: bool,
}

fn default_present() -> bool {
    true
}

impl From<&ScoreLine> for ScoreEntry {
    fn from(line: &ScoreLine) -> Self {
        ScoreEntry {
            subscale_id: line.name.clone(),
            value: line.value,
            present: line.present,
        }
    }
}

pub fn load_evaluation(path: &Path) -> eyre::Result<EvaluationFile> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read evaluation at {}: {e}", path.display()))?;
    let file: EvaluationFile = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid evaluation file {}: {e}", path.display()))?;
    Ok(file)
}

impl EvaluationFile {
    /// Build a session from the file.
    ///
    /// Out-of-range values are logged and clamped; with `strict` the first
    /// one aborts instead. A missing exam date defaults to `today`.
    pub fn into_session(self, strict: bool, today: Date) -> eyre::Result<EvaluationSession> {
        let mut session = EvaluationSession::new();

        if let Some(mut patient) = self.patient {
            match patient.exam_date {
                None => patient.exam_date = Some(today),
                Some(exam) if exam > today => {
                    tracing::warn!(%exam, "exam date is in the future");
                }
                Some(_) => {}
            }
            session.patient = Some(patient);
        }
        session.anamnesis = self.anamnesis;

        for input in &self.batteries {
            let entries: Vec<ScoreEntry> = input.scores.iter().map(ScoreEntry::from).collect();
            let instrument = input.battery.instrument();

            if strict {
                instrument.ensure_in_range(&entries)?;
            } else {
                for problem in instrument.validate_scores(&entries) {
                    tracing::warn!(battery = %input.battery, "{problem}");
                }
            }

            for entry in &entries {
                session.record_score(input.battery, entry)?;
            }
        }

        Ok(session)
    }
}
