use crate::config::Config;
use crate::extract::{extract_guild_members, extract_profile, resolve_profile_url, ProfileSelectors};
use crate::fetcher::http::{build_http_client, fetch_document};
use crate::fetcher::urls::{guild_url, search_url};
use crate::model::{GuildMember, Profile};
use crate::ProfileError;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Site client combining the fetcher and the extractor
///
/// Cheap to clone; every async task of a session gets its own handle.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: Client,
    config: Arc<Config>,
    selectors: Arc<ProfileSelectors>,
    base_url: Url,
}

impl ProfileClient {
    /// Creates a client from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(ProfileClient)` - Ready to fetch
    /// * `Err(ProfileError)` - Bad base URL, selector, or HTTP client setup
    pub fn new(config: Config) -> Result<Self, ProfileError> {
        let selectors = ProfileSelectors::compile(&config.selectors)?;
        let base_url = Url::parse(&config.site.base_url)?;
        let client = build_http_client(&config.fetch)?;

        Ok(Self {
            client,
            config: Arc::new(config),
            selectors: Arc::new(selectors),
            base_url,
        })
    }

    /// Returns the configuration this client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves a family name to its profile page URL
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - Absolute profile URL
    /// * `Err(ProfileError::ProfileNotFound)` - The search returned no result
    /// * `Err(ProfileError)` - Network or status failure
    pub async fn resolve(&self, family_name: &str) -> Result<Url, ProfileError> {
        let url = search_url(&self.config.site, family_name)?;
        let document = fetch_document(&self.client, &url).await?;
        resolve_profile_url(&document, family_name, &self.base_url, &self.selectors)
    }

    /// Fetches and extracts a profile page
    pub async fn fetch_profile(&self, url: &Url) -> Result<Profile, ProfileError> {
        let document = fetch_document(&self.client, url).await?;
        Ok(extract_profile(&document, &self.selectors, &self.config.labels))
    }

    /// Fetches a profile from a possibly relative roster reference
    pub async fn fetch_profile_ref(&self, reference: &str) -> Result<Profile, ProfileError> {
        let url = self.base_url.join(reference.trim())?;
        self.fetch_profile(&url).await
    }

    /// Resolves and fetches in one call
    pub async fn lookup(&self, family_name: &str) -> Result<Profile, ProfileError> {
        let url = self.resolve(family_name).await?;
        self.fetch_profile(&url).await
    }

    /// Fetches the member list of a guild
    pub async fn fetch_guild_members(&self, guild_name: &str) -> Result<Vec<GuildMember>, ProfileError> {
        let url = guild_url(&self.config.site, guild_name)?;
        let document = fetch_document(&self.client, &url).await?;
        Ok(extract_guild_members(&document, &self.base_url, &self.selectors))
    }
}
