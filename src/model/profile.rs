//! Profile records scraped from a family page
//!
//! The serialized form uses the PascalCase keys of the JSON files produced by
//! earlier tooling (`FamilyInfo.PAPD`, `LifeSkills[].LevelInt`, ...) so that
//! existing roster folders keep loading.

use serde::{Deserialize, Deserializer, Serialize};

/// Family-level fields shown in the profile header
///
/// All values are free text from the page; any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FamilyInfo {
    pub name: String,
    pub creation_date: String,
    pub guild: String,

    /// Combat power, the private sentinel, or empty
    #[serde(rename = "PAPD")]
    pub papd: String,

    pub energy: String,
    pub contribution: String,
}

/// One life skill row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LifeSkill {
    pub name: String,

    /// Rank name, e.g. "Artesão"
    pub level_name: String,

    /// Numeric part of the rank, empty when the page has none
    #[serde(rename = "LevelInt")]
    pub level_value: String,

    pub mastery: String,
}

/// One character row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Character {
    pub name: String,
    pub class: String,

    /// Level text; carries the main-character suffix when `is_main` is set
    pub level: String,

    pub is_main: bool,
}

/// Everything extracted from one profile page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Profile {
    pub family_info: FamilyInfo,

    #[serde(deserialize_with = "null_as_empty")]
    pub life_skills: Vec<LifeSkill>,

    #[serde(deserialize_with = "null_as_empty")]
    pub characters: Vec<Character>,
}

impl Profile {
    /// Returns the character flagged as main, if any
    pub fn main_character(&self) -> Option<&Character> {
        self.characters.iter().find(|c| c.is_main)
    }

    /// Serializes the profile as indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a profile from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

// Older exports wrote `null` for pages without any rows.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            family_info: FamilyInfo {
                name: "Tarkus".to_string(),
                creation_date: "2019-03-02".to_string(),
                guild: String::new(),
                papd: "712".to_string(),
                energy: "".to_string(),
                contribution: "400".to_string(),
            },
            life_skills: vec![LifeSkill {
                name: "Coleta".to_string(),
                level_name: "Mestre".to_string(),
                level_value: "12".to_string(),
                mastery: "".to_string(),
            }],
            characters: vec![
                Character {
                    name: "Arrow".to_string(),
                    class: "Arqueiro".to_string(),
                    level: "62 Personagem Principal".to_string(),
                    is_main: true,
                },
                Character {
                    name: "Alt".to_string(),
                    class: "Bruxa".to_string(),
                    level: "56".to_string(),
                    is_main: false,
                },
            ],
        }
    }

    #[test]
    fn test_json_roundtrip_preserves_empty_fields() {
        let profile = sample_profile();
        let json = profile.to_json_pretty().unwrap();
        let parsed = Profile::from_json(&json).unwrap();
        assert_eq!(parsed, profile);
        assert_eq!(parsed.family_info.guild, "");
        assert_eq!(parsed.life_skills[0].mastery, "");
    }

    #[test]
    fn test_json_keys_match_export_format() {
        let json = sample_profile().to_json_pretty().unwrap();
        assert!(json.contains("\"FamilyInfo\""));
        assert!(json.contains("\"PAPD\": \"712\""));
        assert!(json.contains("\"CreationDate\""));
        assert!(json.contains("\"LevelInt\": \"12\""));
        assert!(json.contains("\"LifeSkills\""));
        assert!(json.contains("\"Characters\""));
    }

    #[test]
    fn test_null_lists_deserialize_as_empty() {
        let json = r#"{
            "FamilyInfo": {"Name": "Solo", "PAPD": "Privado"},
            "LifeSkills": null,
            "Characters": null
        }"#;
        let profile = Profile::from_json(json).unwrap();
        assert_eq!(profile.family_info.name, "Solo");
        assert_eq!(profile.family_info.papd, "Privado");
        assert_eq!(profile.family_info.energy, "");
        assert!(profile.life_skills.is_empty());
        assert!(profile.characters.is_empty());
    }

    #[test]
    fn test_missing_is_main_defaults_false() {
        let json = r#"{"Characters": [{"Name": "A", "Class": "B", "Level": "60"}]}"#;
        let profile = Profile::from_json(json).unwrap();
        assert!(!profile.characters[0].is_main);
        assert!(profile.main_character().is_none());
    }

    #[test]
    fn test_main_character() {
        let profile = sample_profile();
        assert_eq!(profile.main_character().map(|c| c.name.as_str()), Some("Arrow"));
    }
}
