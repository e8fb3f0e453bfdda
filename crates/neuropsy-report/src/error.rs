use thiserror::Error;

use neuropsy_instruments::error::InstrumentError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("patient information has not been entered")]
    MissingPatient,

    #[error("anamnesis has not been entered")]
    MissingAnamnesis,

    #[error("no battery has a completed score")]
    NoCompletedBattery,

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}

impl From<tera::Error> for ReportError {
    fn from(e: tera::Error) -> Self {
        ReportError::TemplateRender(e.to_string())
    }
}
