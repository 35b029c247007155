use crate::config::SiteConfig;
use crate::ProfileError;
use url::Url;

/// Builds the search-by-family-name URL
///
/// The name is form-encoded into the `searchKeyword` query parameter.
///
/// # Example
///
/// ```
/// use bdo_profile::config::SiteConfig;
/// use bdo_profile::fetcher::search_url;
///
/// let url = search_url(&SiteConfig::default(), "Tarkus").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://www.sa.playblackdesert.com/pt-BR/Adventure?checkSearchText=True&searchType=2&searchKeyword=Tarkus"
/// );
/// ```
pub fn search_url(site: &SiteConfig, family_name: &str) -> Result<Url, ProfileError> {
    let mut url = Url::parse(&format!(
        "{}/{}/Adventure",
        site.base_url.trim_end_matches('/'),
        site.locale
    ))?;

    url.query_pairs_mut()
        .append_pair("checkSearchText", "True")
        .append_pair("searchType", "2")
        .append_pair("searchKeyword", family_name);

    Ok(url)
}

/// Builds the guild roster page URL
pub fn guild_url(site: &SiteConfig, guild_name: &str) -> Result<Url, ProfileError> {
    let mut url = Url::parse(&format!(
        "{}/Adventure/Guild/GuildProfile",
        site.base_url.trim_end_matches('/')
    ))?;

    url.query_pairs_mut()
        .append_pair("guildName", guild_name)
        .append_pair("region", &site.region);

    Ok(url)
}
