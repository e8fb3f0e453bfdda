use tera::{Context, Tera};

use crate::error::ReportError;
use crate::summary::ReportSummary;

/// Render a user-supplied Tera template against a report summary.
///
/// Every field of the summary is a top-level template variable
/// (`patient_name`, `batteries`, `recommendations`, ...).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    summary: &ReportSummary,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(summary)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}
