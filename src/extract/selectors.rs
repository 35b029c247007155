use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::Selector;

/// Compiled form of [`SelectorConfig`]
///
/// Built once per client so pages are never parsed against an invalid
/// selector at runtime.
#[derive(Debug, Clone)]
pub struct ProfileSelectors {
    pub search_result_link: Selector,
    pub family_name: Selector,
    pub info_row: Selector,
    pub info_label: Selector,
    pub info_value: Selector,
    pub guild_link: Selector,
    pub life_skill_item: Selector,
    pub life_skill_name: Selector,
    pub life_skill_level: Selector,
    pub life_skill_mastery: Selector,
    pub character_item: Selector,
    pub character_name: Selector,
    pub character_main_label: Selector,
    pub character_class: Selector,
    pub character_level: Selector,
    pub guild_member_link: Selector,
}

impl ProfileSelectors {
    /// Compiles every selector in the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(ProfileSelectors)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed to parse
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            search_result_link: parse(&config.search_result_link)?,
            family_name: parse(&config.family_name)?,
            info_row: parse(&config.info_row)?,
            info_label: parse(&config.info_label)?,
            info_value: parse(&config.info_value)?,
            guild_link: parse(&config.guild_link)?,
            life_skill_item: parse(&config.life_skill_item)?,
            life_skill_name: parse(&config.life_skill_name)?,
            life_skill_level: parse(&config.life_skill_level)?,
            life_skill_mastery: parse(&config.life_skill_mastery)?,
            character_item: parse(&config.character_item)?,
            character_name: parse(&config.character_name)?,
            character_main_label: parse(&config.character_main_label)?,
            character_class: parse(&config.character_class)?,
            character_level: parse(&config.character_level)?,
            guild_member_link: parse(&config.guild_member_link)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}
