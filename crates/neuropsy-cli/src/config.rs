use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use neuropsy_core::files::{CONFIG_DIR, CONFIG_FILE};
use neuropsy_report::styles::DocumentStyles;

use crate::output::write_atomic;

/// Schema version written by this build. Every bump needs a step in
/// [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuropsyConfig {
    /// 0 when the file predates versioning.
    #[serde(default)]
    pub config_version: u32,
    /// Where reports are written when no `--output-dir` is given.
    /// `None` means the current directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Also write a `.docx` next to each Markdown report. Added in v1.
    pub export_docx: bool,
    /// Added in v1.
    pub styles: DocumentStyles,
}

impl Default for NeuropsyConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            output_dir: None,
            export_docx: true,
            styles: DocumentStyles::default(),
        }
    }
}

impl NeuropsyConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// The override if given, else the platform default.
pub fn resolve_path(explicit: Option<&Path>) -> eyre::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

pub fn load_config(path: &Path) -> eyre::Result<NeuropsyConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Migrations operate on the raw value, before the typed parse.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        None => 0,
        Some(v) => u32::try_from(v).map_err(|_| {
            eyre::eyre!(
                "config_version {v} is newer than this build supports ({CURRENT_VERSION})"
            )
        })?,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: NeuropsyConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load `path`, falling back to defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> eyre::Result<NeuropsyConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(NeuropsyConfig::default())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each step is a pure transform on the raw JSON value.
pub fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: DOCX export toggle and document styles
    if from_version < 1 {
        let styles = serde_json::to_value(DocumentStyles::default())?;
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("export_docx")
            .or_insert(serde_json::Value::Bool(true));
        obj.entry("styles").or_insert(styles);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added export_docx, styles)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &NeuropsyConfig) -> eyre::Result<()> {
    // Saved files are always stamped with this build's version.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    write_atomic(path, json.as_bytes())?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
