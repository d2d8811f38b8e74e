//! Command implementations. Each returns the text to print on stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use hangar_assets::{
    AssetError, BuyList, BuyMode, CharacterAssets, NameCache, Summary, dump, load_baseline, save_summary,
};

use crate::capture::Capture;

/// Read a capture and assemble its character's assets.
///
/// Each capture is its own fetch with its own name table, so it gets a fresh
/// [`NameCache`].
pub fn assemble(path: &Path) -> anyhow::Result<CharacterAssets> {
    let capture = Capture::read(path)?;
    let records = capture.records();
    let mut cache = NameCache::new();
    CharacterAssets::assemble(capture.character_name.clone(), records, &capture, &mut cache)
        .with_context(|| format!("assembling assets from {}", path.display()))
}

/// Load the baseline, turning its two failure modes into user-facing messages.
pub fn baseline(path: &Path) -> anyhow::Result<Summary> {
    match load_baseline(path) {
        Ok(summary) => Ok(summary),
        Err(AssetError::MissingBaseline(location)) => bail!(
            "no baseline set: {location} does not exist; save one with `hangar state` and edit it"
        ),
        Err(AssetError::MalformedDocument(msg)) => bail!("baseline is malformed: {msg}"),
        Err(other) => Err(other.into()),
    }
}

/// File name for a character's saved state; the name must stay inside the state directory.
pub fn state_file_name(character_name: &str) -> anyhow::Result<String> {
    let trimmed = character_name.trim();
    if trimmed.is_empty()
        || trimmed.starts_with('.')
        || trimmed.contains(['/', '\\', '\0'])
    {
        bail!("character name {character_name:?} cannot be used as a file name");
    }
    Ok(format!("{trimmed}.yaml"))
}

pub fn state(captures: &[PathBuf], state_dir: &Path) -> anyhow::Result<String> {
    let mut written = Vec::with_capacity(captures.len());
    for path in captures {
        let assets = assemble(path)?;
        let target = state_dir.join(state_file_name(assets.character_name())?);
        save_summary(&target, assets.summary())?;
        written.push(target.display().to_string());
    }
    Ok(written.join("\n"))
}

pub fn check(captures: &[PathBuf], baseline_path: &Path) -> anyhow::Result<String> {
    let baseline = baseline(baseline_path)?;
    let mut sections = Vec::new();
    for path in captures {
        let assets = assemble(path)?;
        let reports: Vec<String> = assets.check(&baseline).map(|report| report.to_string()).collect();
        if !reports.is_empty() {
            sections.push(format!("{}:\n{}", assets.character_name(), reports.join("\n")));
        }
    }

    if sections.is_empty() {
        return Ok("No discrepancies found".to_string());
    }
    Ok(sections.join("\n\n"))
}

pub fn buy(captures: &[PathBuf], baseline_path: &Path, mode: BuyMode) -> anyhow::Result<String> {
    let baseline = baseline(baseline_path)?;
    let mut acc = BuyList::new();
    for path in captures {
        let assets = assemble(path)?;
        acc = assets.buy_list(&baseline, mode, acc);
    }

    if acc.is_empty() {
        return Ok("Nothing to buy".to_string());
    }
    Ok(acc.to_multibuy())
}

pub fn filter(capture: &Path, needle: &str) -> anyhow::Result<String> {
    let assets = assemble(capture)?;
    Ok(dump(&assets.filter(needle))?)
}
