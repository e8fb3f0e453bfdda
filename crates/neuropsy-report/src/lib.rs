//! neuropsy-report
//!
//! Clinical report generation: section composition, profile analysis,
//! recommendations, the evaluation session, and DOCX / template export.

pub mod docx;
pub mod engine;
pub mod error;
pub mod informants;
pub mod profile;
pub mod render;
pub mod session;
pub mod styles;
pub mod summary;
