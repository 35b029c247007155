use crate::export::json::write_profile_json;
use crate::export::roster::read_roster;
use crate::fetcher::ProfileClient;
use crate::ProfileError;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Files written, in roster order
    pub written: Vec<PathBuf>,

    /// Nicknames whose fetch or write failed
    pub failed: Vec<String>,
}

/// Fetches every member of a roster file into `<out_dir>/<nickname>.json`
///
/// Members are fetched one at a time. A failing member is logged and
/// recorded in the report; the run continues with the next row.
///
/// # Returns
///
/// * `Ok(BatchReport)` - Per-member outcome
/// * `Err(ProfileError)` - The roster could not be read or `out_dir` created
pub async fn run_batch(
    client: &ProfileClient,
    input: &Path,
    out_dir: &Path,
) -> Result<BatchReport, ProfileError> {
    let members = read_roster(input)?;
    fs::create_dir_all(out_dir)?;

    tracing::info!("Fetching {} profiles from {}", members.len(), input.display());

    let mut report = BatchReport::default();
    for member in members {
        let profile = match client.fetch_profile_ref(&member.url).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("[{}] error: {}", member.nickname, e);
                report.failed.push(member.nickname);
                continue;
            }
        };

        let path = out_dir.join(format!("{}.json", file_stem(&member.nickname)));
        match write_profile_json(&path, &profile) {
            Ok(()) => {
                tracing::info!("[{}] written to {}", member.nickname, path.display());
                report.written.push(path);
            }
            Err(e) => {
                tracing::warn!("[{}] write error: {}", member.nickname, e);
                report.failed.push(member.nickname);
            }
        }
    }

    Ok(report)
}

/// Keeps a nickname from escaping the output directory
fn file_stem(nickname: &str) -> String {
    nickname
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect()
}
