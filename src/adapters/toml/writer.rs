//! TOML writer for workforce files

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::parser::WorkforceFile;

/// Format a `WorkforceFile` as TOML
///
/// # Errors
///
/// Returns an error if a value cannot be represented in TOML.
pub fn format_workforce_file(file: &WorkforceFile) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(file)?;
    Ok(format!("# taskdist workforce\n\n{body}"))
}

/// Replace `path` with the formatted file in one step
///
/// Writes a sibling temp file and renames it over the target, so readers
/// see either the old or the new content, never a mix.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn write_atomic(path: &Path, file: &WorkforceFile) -> anyhow::Result<()> {
    let content = format_workforce_file(file)?;
    let file_name = path
        .file_name()
        .map_or_else(|| "workforce.toml".into(), |n| n.to_string_lossy().to_string());
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    fs::write(&tmp, content).with_context(|| format!("writing {}", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("replacing {}", path.display()));
    }
    Ok(())
}
