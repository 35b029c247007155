use crate::export::save_profile_json;
use crate::fetcher::ProfileClient;
use crate::session::message::{Command, Completion, Envelope};
use std::path::Path;

/// Executes one controller command
///
/// Every network command yields exactly one envelope carrying the command's
/// generation. `SaveProfile` and `Quit` yield nothing.
///
/// `SaveProfile` writes to the configured debug file; a failed write is
/// logged and otherwise ignored.
pub async fn run_command(client: &ProfileClient, command: Command) -> Option<Envelope> {
    match command {
        Command::Resolve { generation, family } => {
            let completion = match client.resolve(&family).await {
                Ok(url) => Completion::ProfileResolved { url },
                Err(e) => Completion::from(e),
            };
            Some(Envelope::new(generation, completion))
        }
        Command::FetchProfile { generation, url } => {
            let completion = match client.fetch_profile(&url).await {
                Ok(profile) => Completion::ProfileFetched {
                    profile: Box::new(profile),
                },
                Err(e) => Completion::from(e),
            };
            Some(Envelope::new(generation, completion))
        }
        Command::SaveProfile { profile } => {
            if let Some(path) = client.config().output.debug_json_path() {
                if let Err(e) = save_profile_json(Path::new(path), &profile).await {
                    tracing::warn!("Could not write debug profile to {}: {}", path, e);
                }
            }
            None
        }
        Command::Quit => None,
    }
}
