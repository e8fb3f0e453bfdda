use std::path::Path;

/// Write `bytes` next to `path` then rename over it, so readers never see a
/// half-written file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);

    std::fs::write(&tmp_path, bytes)
        .map_err(|e| eyre::eyre!("failed to write {}: {e}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}
