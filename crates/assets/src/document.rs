//! YAML summary documents: saved state and requirement baselines.

use std::io::ErrorKind;
use std::path::Path;

use hangar_core::{AssetError, AssetResult};

use crate::summary::Summary;

/// Render a summary as YAML with sorted keys.
pub fn dump(summary: &Summary) -> AssetResult<String> {
    serde_yaml::to_string(summary).map_err(|e| AssetError::malformed(format!("summary: {e}")))
}

/// Parse a summary document.
///
/// A blank document is an empty summary. Anything that is not a mapping of
/// label to a mapping of item name to non-negative integer is rejected as a
/// whole, as is a label or item name that appears twice.
pub fn load(text: &str) -> AssetResult<Summary> {
    if text.trim().is_empty() {
        return Ok(Summary::new());
    }
    serde_yaml::from_str(text).map_err(|e| AssetError::malformed(e.to_string()))
}

/// Read the requirement baseline at `path`.
///
/// An absent file is [`AssetError::MissingBaseline`], distinct from a present
/// but empty one.
pub fn load_baseline(path: &Path) -> AssetResult<Summary> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AssetError::missing_baseline(path.display().to_string()));
        }
        Err(e) => return Err(AssetError::io(format!("{}: {e}", path.display()))),
    };
    load(&text).map_err(|e| match e {
        AssetError::MalformedDocument(msg) => {
            AssetError::malformed(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

/// Write `summary` to `path`, creating parent directories as needed.
pub fn save_summary(path: &Path, summary: &Summary) -> AssetResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AssetError::io(format!("{}: {e}", parent.display())))?;
    }
    let text = dump(summary)?;
    std::fs::write(path, text).map_err(|e| AssetError::io(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), containers = summary.len(), "saved summary");
    Ok(())
}
