use crate::export::json::read_profile_json;
use crate::model::{GearscoreRecord, GearscoreSummary};
use crate::ProfileError;
use std::path::Path;
use walkdir::WalkDir;

/// Result of averaging a folder of exported profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderAverage {
    /// Base name of the folder, taken as the guild name
    pub guild: String,
    pub summary: GearscoreSummary,
}

/// Averages the gearscore of every `*.json` profile below `folder`
///
/// The walk is recursive. Any unreadable or unparseable JSON file aborts the
/// run, since a partial average would be misleading.
///
/// # Arguments
///
/// * `folder` - Root of the walk; its base name is reported as the guild
///
/// # Returns
///
/// * `Ok(FolderAverage)` - Guild name and gearscore tally
/// * `Err(ProfileError)` - Walk, read, or parse failure
pub fn average_folder(folder: &Path) -> Result<FolderAverage, ProfileError> {
    let guild = guild_name(folder)?;
    let mut summary = GearscoreSummary::default();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();

        if !entry.file_type().is_file() || path.extension().and_then(|e| e.to_str()) != Some("json")
        {
            continue;
        }

        let profile = read_profile_json(path).map_err(|e| {
            tracing::error!("Failed to load {}: {}", path.display(), e);
            e
        })?;
        summary.record(GearscoreRecord::from(&profile.family_info));
    }

    tracing::debug!(
        "Averaged {} members of {} ({} private)",
        summary.members(),
        guild,
        summary.private
    );

    Ok(FolderAverage { guild, summary })
}

fn guild_name(folder: &Path) -> Result<String, ProfileError> {
    let absolute = folder.canonicalize()?;
    Ok(absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| absolute.display().to_string()))
}
