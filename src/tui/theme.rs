use ratatui::style::{Color, Modifier, Style};

/// Styles used by the renderer
///
/// Passed to the renderer by value so rendering stays a pure function of
/// the profile and the theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub help: Style,
    pub error: Style,
    pub key: Style,
    pub value: Style,
    pub character: Style,
    pub main_character: Style,
    pub spinner: Style,
    pub placeholder: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Indexed(63))
                .add_modifier(Modifier::BOLD),
            help: Style::default().fg(Color::Indexed(241)),
            error: Style::default()
                .fg(Color::Indexed(9))
                .add_modifier(Modifier::BOLD),
            key: Style::default().fg(Color::Indexed(252)),
            value: Style::default().fg(Color::Indexed(86)),
            character: Style::default().fg(Color::Indexed(213)),
            main_character: Style::default()
                .fg(Color::Indexed(86))
                .add_modifier(Modifier::BOLD),
            spinner: Style::default().fg(Color::Indexed(205)),
            placeholder: Style::default().fg(Color::Indexed(240)),
        }
    }
}

impl Theme {
    /// Theme without colors, for terminals that cannot show them
    pub fn plain() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            help: Style::default(),
            error: Style::default().add_modifier(Modifier::BOLD),
            key: Style::default(),
            value: Style::default(),
            character: Style::default(),
            main_character: Style::default().add_modifier(Modifier::BOLD),
            spinner: Style::default(),
            placeholder: Style::default().add_modifier(Modifier::DIM),
        }
    }
}
