//! Guild roster CSV files
//!
//! A roster is a `Nickname,Ref` file with one guild member per row. The
//! header row is optional on read.

use crate::model::GuildMember;
use crate::ProfileError;
use std::fs;
use std::path::{Path, PathBuf};

const HEADER_NICKNAME: &str = "Nickname";
const HEADER_REF: &str = "Ref";

/// Location of a guild's roster below `root`: `<guild>/<guild>_members.csv`
pub fn roster_path(root: &Path, guild: &str) -> PathBuf {
    root.join(guild).join(format!("{}_members.csv", guild))
}

/// Writes a roster file, creating the guild directory if needed
///
/// # Arguments
///
/// * `root` - Directory the guild folder is created in
/// * `guild` - Guild name, used for the folder and file name
/// * `members` - Members in page order
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(ProfileError)` - Directory or file could not be written
pub fn write_roster(
    root: &Path,
    guild: &str,
    members: &[GuildMember],
) -> Result<PathBuf, ProfileError> {
    let path = roster_path(root, guild);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)?;
    writer.write_record([HEADER_NICKNAME, HEADER_REF])?;
    for member in members {
        writer.serialize(member)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} members to {}", members.len(), path.display());
    Ok(path)
}

/// Reads a roster file
///
/// A first row whose first cell is `Nickname` is treated as the header.
/// Rows with fewer than two cells are logged and skipped; extra cells are
/// ignored.
pub fn read_roster(path: &Path) -> Result<Vec<GuildMember>, ProfileError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut members = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;

        if index == 0 && record.get(0) == Some(HEADER_NICKNAME) {
            continue;
        }

        match (record.get(0), record.get(1)) {
            (Some(nickname), Some(url)) => members.push(GuildMember {
                nickname: nickname.to_string(),
                url: url.to_string(),
            }),
            _ => {
                tracing::warn!("Skipping malformed row {}: {:?}", index + 1, record);
            }
        }
    }

    Ok(members)
}
