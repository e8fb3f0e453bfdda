use serde::{Deserialize, Serialize};

/// Fonts and sizes applied to the Word export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and table cells.
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text size in points.
    pub body_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,
    /// Size of `####` sub-headings (interpretation, profile analysis).
    pub heading4_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 14,
            heading3_size: 12,
            heading4_size: 11,
        }
    }
}
