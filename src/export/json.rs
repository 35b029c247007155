use crate::model::Profile;
use crate::ProfileError;
use std::fs;
use std::path::Path;

/// Writes a profile as indented JSON, replacing any existing file
///
/// # Arguments
///
/// * `path` - Destination file
/// * `profile` - Profile to serialize
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(ProfileError)` - Serialization or IO failure
pub fn write_profile_json(path: &Path, profile: &Profile) -> Result<(), ProfileError> {
    let json = profile.to_json_pretty()?;
    fs::write(path, json)?;
    tracing::debug!("Wrote profile to {}", path.display());
    Ok(())
}

/// Async variant of [`write_profile_json`] for use inside the event loop
pub async fn save_profile_json(path: &Path, profile: &Profile) -> Result<(), ProfileError> {
    let json = profile.to_json_pretty()?;
    tokio::fs::write(path, json).await?;
    tracing::debug!("Saved profile to {}", path.display());
    Ok(())
}

/// Reads a profile previously written by [`write_profile_json`]
pub fn read_profile_json(path: &Path) -> Result<Profile, ProfileError> {
    let json = fs::read_to_string(path)?;
    Ok(Profile::from_json(&json)?)
}
