//! Search page resolution and guild roster links

use crate::extract::selectors::ProfileSelectors;
use crate::extract::text::element_text;
use crate::model::GuildMember;
use crate::ProfileError;
use scraper::Html;
use std::collections::HashSet;
use url::Url;

/// Resolves a family name to its profile URL from a search results page
///
/// # Arguments
///
/// * `document` - The parsed search results page
/// * `family_name` - The name that was searched, used in the error message
/// * `base_url` - Site origin for resolving relative links
/// * `selectors` - Compiled selectors for the site's markup
///
/// # Returns
///
/// * `Ok(Url)` - Absolute URL of the first result
/// * `Err(ProfileError::ProfileNotFound)` - No result link on the page
/// * `Err(ProfileError::UrlParse)` - The link could not be resolved
pub fn resolve_profile_url(
    document: &Html,
    family_name: &str,
    base_url: &Url,
    selectors: &ProfileSelectors,
) -> Result<Url, ProfileError> {
    let href = document
        .select(&selectors.search_result_link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or_else(|| ProfileError::ProfileNotFound {
            family: family_name.to_string(),
        })?;

    let url = base_url.join(href)?;
    tracing::debug!("Resolved '{}' to {}", family_name, url);
    Ok(url)
}

/// Extracts the member list from a guild page
///
/// Members are deduplicated by nickname and keep page order; links without
/// visible text are skipped.
pub fn extract_guild_members(
    document: &Html,
    base_url: &Url,
    selectors: &ProfileSelectors,
) -> Vec<GuildMember> {
    let mut seen = HashSet::new();
    let mut members = Vec::new();

    for link in document.select(&selectors.guild_member_link) {
        let nickname = element_text(link);
        if nickname.is_empty() || seen.contains(&nickname) {
            continue;
        }

        let Some(href) = link.value().attr("href") else {
            continue;
        };

        let url = match base_url.join(href.trim()) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!("Skipping member '{}' with bad link '{}': {}", nickname, href, e);
                continue;
            }
        };

        seen.insert(nickname.clone());
        members.push(GuildMember { nickname, url });
    }

    members
}
