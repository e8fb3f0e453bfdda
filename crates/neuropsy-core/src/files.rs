//! Report file naming conventions.
//!
//! Pure string functions. Names are built from the patient's last and first
//! name with spaces replaced by underscores.

use crate::models::patient::Patient;

pub fn report_stem(patient: &Patient) -> String {
    format!("rapport_{}_{}", patient.last_name, patient.first_name).replace(' ', "_")
}

pub fn report_markdown(patient: &Patient) -> String {
    format!("{}.md", report_stem(patient))
}

pub fn report_docx(patient: &Patient) -> String {
    format!("{}.docx", report_stem(patient))
}

pub const CONFIG_DIR: &str = "neuropsy";

pub const CONFIG_FILE: &str = "config.json";
