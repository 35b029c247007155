//! Profile page extraction
//!
//! Header fields are read by label where the page provides one and by row
//! position otherwise. Lists keep page order. Nothing here fails: a missing
//! element leaves its field empty.

use crate::config::LabelConfig;
use crate::extract::selectors::ProfileSelectors;
use crate::extract::text::{clean_text, direct_text, element_text, split_level, text_excluding};
use crate::model::{Character, FamilyInfo, LifeSkill, Profile};
use scraper::{ElementRef, Html, Selector};

/// Header fields extracted from the `line_list` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfoField {
    CreationDate,
    Papd,
    Energy,
    Contribution,
}

impl InfoField {
    const ALL: [Self; 4] = [
        Self::CreationDate,
        Self::Papd,
        Self::Energy,
        Self::Contribution,
    ];

    /// 1-based row in the current markup, used when no label matches
    fn fallback_row(self) -> usize {
        match self {
            Self::CreationDate => 1,
            Self::Papd => 3,
            Self::Energy => 4,
            Self::Contribution => 5,
        }
    }

    fn label(self, labels: &LabelConfig) -> &str {
        match self {
            Self::CreationDate => &labels.creation_date,
            Self::Papd => &labels.papd,
            Self::Energy => &labels.energy,
            Self::Contribution => &labels.contribution,
        }
    }

    fn slot(self, info: &mut FamilyInfo) -> &mut String {
        match self {
            Self::CreationDate => &mut info.creation_date,
            Self::Papd => &mut info.papd,
            Self::Energy => &mut info.energy,
            Self::Contribution => &mut info.contribution,
        }
    }
}

/// Extracts a full profile from a parsed profile page
///
/// # Arguments
///
/// * `document` - The parsed profile page
/// * `selectors` - Compiled selectors for the site's markup
/// * `labels` - Label strings for key/value rows, the level marker and the main-character flag
///
/// # Returns
///
/// A best-effort `Profile`; absent elements become empty strings.
pub fn extract_profile(
    document: &Html,
    selectors: &ProfileSelectors,
    labels: &LabelConfig,
) -> Profile {
    let profile = Profile {
        family_info: extract_family_info(document, selectors, labels),
        life_skills: document
            .select(&selectors.life_skill_item)
            .map(|item| extract_life_skill(item, selectors, labels))
            .collect(),
        characters: document
            .select(&selectors.character_item)
            .map(|item| extract_character(item, selectors, labels))
            .collect(),
    };

    tracing::debug!(
        "Extracted profile '{}': {} life skills, {} characters",
        profile.family_info.name,
        profile.life_skills.len(),
        profile.characters.len()
    );

    profile
}

fn extract_family_info(
    document: &Html,
    selectors: &ProfileSelectors,
    labels: &LabelConfig,
) -> FamilyInfo {
    let mut info = FamilyInfo {
        name: first_text(document.root_element(), &selectors.family_name),
        guild: first_text(document.root_element(), &selectors.guild_link),
        ..FamilyInfo::default()
    };

    let rows: Vec<ElementRef<'_>> = document.select(&selectors.info_row).collect();
    let mut matched = [false; InfoField::ALL.len()];
    let mut claimed = vec![false; rows.len()];

    // Preferred: key/value rows keyed by their label element
    for (row_index, row) in rows.iter().enumerate() {
        let Some(label) = row.select(&selectors.info_label).next() else {
            continue;
        };
        let key = element_text(label);
        for (i, field) in InfoField::ALL.into_iter().enumerate() {
            if !matched[i] && label_matches(&key, field.label(labels)) {
                *field.slot(&mut info) = text_excluding(*row, label);
                matched[i] = true;
                claimed[row_index] = true;
                break;
            }
        }
    }

    // Fallback: fixed row positions of the current layout, only for rows no
    // label claimed and that do not carry another field's label
    for (i, field) in InfoField::ALL.into_iter().enumerate() {
        if matched[i] {
            continue;
        }
        let index = field.fallback_row() - 1;
        let Some(row) = rows.get(index) else {
            continue;
        };
        if claimed[index] || has_known_label(*row, selectors, labels) {
            continue;
        }
        *field.slot(&mut info) = first_text(*row, &selectors.info_value);
    }

    info
}

fn extract_life_skill(
    item: ElementRef<'_>,
    selectors: &ProfileSelectors,
    labels: &LabelConfig,
) -> LifeSkill {
    let raw_level = first_text(item, &selectors.life_skill_level);
    let (level_name, level_value) = split_level(&raw_level, &labels.level_marker);

    LifeSkill {
        name: first_text(item, &selectors.life_skill_name),
        level_name,
        level_value,
        mastery: first_text(item, &selectors.life_skill_mastery),
    }
}

fn extract_character(
    item: ElementRef<'_>,
    selectors: &ProfileSelectors,
    labels: &LabelConfig,
) -> Character {
    let is_main = item
        .select(&selectors.character_main_label)
        .any(|label| element_text(label).contains(labels.main_character.as_str()));

    let name = item
        .select(&selectors.character_name)
        .next()
        .map(direct_text)
        .unwrap_or_default();

    let mut level = first_text(item, &selectors.character_level);
    if is_main {
        level.push(' ');
        level.push_str(&labels.main_character);
    }

    Character {
        name,
        class: first_text(item, &selectors.character_class),
        level,
        is_main,
    }
}

/// Cleaned text of the first match under `scope`, or empty
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// True when the row's label names any header field
fn has_known_label(row: ElementRef<'_>, selectors: &ProfileSelectors, labels: &LabelConfig) -> bool {
    row.select(&selectors.info_label).next().is_some_and(|label| {
        let key = element_text(label);
        InfoField::ALL
            .into_iter()
            .any(|field| label_matches(&key, field.label(labels)))
    })
}

/// Case-insensitive label comparison ignoring a trailing colon
fn label_matches(found: &str, expected: &str) -> bool {
    let normalize = |s: &str| clean_text(s.trim_end_matches(':')).to_lowercase();
    normalize(found) == normalize(expected)
}
