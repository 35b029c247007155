//! Profile rendering
//!
//! Pure formatting of a `Profile` into styled lines with fixed column
//! widths. Page order is preserved.

use crate::model::Profile;
use crate::tui::theme::Theme;
use ratatui::text::{Line, Span};

const SEPARATOR_WIDTH: usize = 40;

/// Renders a profile into display lines
///
/// # Layout
///
/// ```text
/// Family: <name>
/// Guild: <guild>
/// Created: <date>
/// PAPD: <papd> | Energy: <energy> | CP: <contribution>
///
/// Characters
/// ----------------------------------------
/// • <name:18> <class:12> <level>
///
/// Life Skills
/// ----------------------------------------
/// • <name:34> <level name:28> <level value>
/// ```
pub fn render_profile(profile: &Profile, theme: &Theme) -> Vec<Line<'static>> {
    let info = &profile.family_info;
    let mut lines = vec![
        field_line(theme, "Family", &info.name),
        field_line(theme, "Guild", &info.guild),
        field_line(theme, "Created", &info.creation_date),
        Line::from(vec![
            Span::styled("PAPD: ", theme.key),
            Span::styled(info.papd.clone(), theme.value),
            Span::raw(" | "),
            Span::styled("Energy: ", theme.key),
            Span::styled(info.energy.clone(), theme.value),
            Span::raw(" | "),
            Span::styled("CP: ", theme.key),
            Span::styled(info.contribution.clone(), theme.value),
        ]),
    ];

    section_header(&mut lines, theme, "Characters");
    for character in &profile.characters {
        let style = if character.is_main {
            theme.main_character
        } else {
            theme.character
        };
        lines.push(Line::styled(
            format!(
                "• {:<18} {:<12} {}",
                character.name, character.class, character.level
            ),
            style,
        ));
    }

    section_header(&mut lines, theme, "Life Skills");
    for skill in &profile.life_skills {
        lines.push(Line::from(vec![
            Span::raw("• "),
            Span::styled(format!("{:<34}", skill.name), theme.key),
            Span::raw(" "),
            Span::styled(format!("{:<28}", skill.level_name), theme.value),
            Span::raw(" "),
            Span::styled(skill.level_value.clone(), theme.value),
        ]));
    }

    lines
}

fn field_line(theme: &Theme, key: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", key), theme.key),
        Span::styled(value.to_string(), theme.value),
    ])
}

fn section_header(lines: &mut Vec<Line<'static>>, theme: &Theme, title: &str) {
    lines.push(Line::default());
    lines.push(Line::styled(title.to_string(), theme.title));
    lines.push(Line::raw("-".repeat(SEPARATOR_WIDTH)));
}
