use serde::Deserialize;

/// Default site origin for the South America region
pub const DEFAULT_BASE_URL: &str = "https://www.sa.playblackdesert.com";

/// Browser identity sent with every request; the site rejects unknown agents
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Main configuration structure
///
/// Every section is optional in the TOML file; missing sections and keys
/// fall back to the values that match the live site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
    pub selectors: SelectorConfig,
    pub labels: LabelConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Site origin used to build search URLs and resolve relative links
    pub base_url: String,

    /// Locale path segment of the search page (e.g. "pt-BR")
    pub locale: String,

    /// Region code sent with guild roster requests
    pub region: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: "pt-BR".to_string(),
            region: "SA".to_string(),
        }
    }
}

/// HTTP behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FetchConfig {
    /// User-Agent header value
    pub user_agent: String,

    /// Total request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

/// CSS selectors for every field read from the site's markup
///
/// Item selectors (`*-item`, `info-row`) are matched against the whole
/// document; the remaining ones are matched inside their item.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SelectorConfig {
    pub search_result_link: String,
    pub family_name: String,
    pub info_row: String,
    pub info_label: String,
    pub info_value: String,
    pub guild_link: String,
    pub life_skill_item: String,
    pub life_skill_name: String,
    pub life_skill_level: String,
    pub life_skill_mastery: String,
    pub character_item: String,
    pub character_name: String,
    pub character_main_label: String,
    pub character_class: String,
    pub character_level: String,
    pub guild_member_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            search_result_link: "div.box_list_area > ul > li > div.title > a".to_string(),
            family_name: "div.profile_detail div.nick_wrap > p.nick".to_string(),
            info_row: "div.profile_detail ul.line_list > li".to_string(),
            info_label: "span.title".to_string(),
            info_value: "span.desc".to_string(),
            guild_link: "div.profile_detail ul.line_list > li > span.guild > a".to_string(),
            life_skill_item: "ul.character_data_box li".to_string(),
            life_skill_name: "span.spec_name".to_string(),
            life_skill_level: "span.spec_level".to_string(),
            life_skill_mastery: "span.spec_stat".to_string(),
            character_item: "ul.character_list li".to_string(),
            character_name: "p.character_name".to_string(),
            character_main_label: "p.character_name span.selected_label".to_string(),
            character_class: "span.character_symbol em:nth-child(2)".to_string(),
            character_level: "span.character_info span:nth-child(2)".to_string(),
            guild_member_link: r#"a[href*="profileTarget="]"#.to_string(),
        }
    }
}

/// Label strings shown by the site, used for key/value extraction
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LabelConfig {
    pub creation_date: String,
    pub papd: String,
    pub energy: String,
    pub contribution: String,

    /// Marker that precedes the numeric part of a life skill level
    pub level_marker: String,

    /// Label that flags the account's main character
    pub main_character: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            creation_date: "Criação da família".to_string(),
            papd: "PA/PD".to_string(),
            energy: "Energia".to_string(),
            contribution: "Pontos de Contribuição".to_string(),
            level_marker: "Nv.".to_string(),
            main_character: "Personagem Principal".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Debug JSON written after every interactive fetch; empty disables it
    pub debug_json: String,

    /// Log file used by the interactive session
    pub log_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            debug_json: "debug_output.json".to_string(),
            log_file: "bdo-profile.log".to_string(),
        }
    }
}

impl OutputConfig {
    /// Returns the debug export path, if enabled
    pub fn debug_json_path(&self) -> Option<&str> {
        let path = self.debug_json.trim();
        (!path.is_empty()).then_some(path)
    }
}
