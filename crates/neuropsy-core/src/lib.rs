//! neuropsy-core
//!
//! Pure domain types shared by the scoring, report and CLI crates: the
//! patient record, the anamnesis, and report file naming conventions.

pub mod files;
pub mod models;
