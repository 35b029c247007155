use crate::session::{SessionController, SessionState, TextInput};
use crate::tui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const TITLE: &str = "BDO Family Profile Viewer";

/// Draws the whole screen for the controller's current state
pub fn draw(frame: &mut Frame<'_>, controller: &SessionController, theme: &Theme, spinner: &str) {
    let area = frame.area().inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + spacing
            Constraint::Min(0),    // Body
        ])
        .split(area);

    frame.render_widget(Paragraph::new(Line::styled(TITLE, theme.title)), rows[0]);

    match controller.state() {
        SessionState::Search => draw_search(frame, rows[1], controller, theme),
        SessionState::Loading => {
            let line = Line::from(vec![
                Span::styled(spinner.to_string(), theme.spinner),
                Span::raw(format!(" Loading data for '{}'...", controller.searched())),
            ]);
            frame.render_widget(Paragraph::new(line), rows[1]);
        }
        SessionState::ProfileView => draw_profile(frame, rows[1], controller, theme),
        SessionState::Error => draw_error(frame, rows[1], controller, theme),
    }
}

fn draw_search(frame: &mut Frame<'_>, area: Rect, controller: &SessionController, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new("Enter a family name to search:"), rows[0]);
    draw_input(frame, rows[1], controller.input(), theme);
    frame.render_widget(
        Paragraph::new(Line::styled("Enter: search | Esc/Ctrl+C: quit", theme.help)),
        rows[3],
    );
}

fn draw_profile(frame: &mut Frame<'_>, area: Rect, controller: &SessionController, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let body = Paragraph::new(controller.viewport().visible_lines().to_vec());
    frame.render_widget(body, rows[0]);

    let help = Line::styled(
        "↑/↓: scroll | backspace: back to search | Ctrl+C: quit",
        theme.help,
    );
    frame.render_widget(Paragraph::new(help), rows[1]);
}

fn draw_error(frame: &mut Frame<'_>, area: Rect, controller: &SessionController, theme: &Theme) {
    let message = controller.error_message();
    let message_height = wrapped_height(message, area.width);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Heading
            Constraint::Length(message_height), // Message
            Constraint::Length(1),              // Spacing
            Constraint::Length(1),              // Hint
            Constraint::Length(1),              // Input
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new("An error occurred:"), rows[0]);
    frame.render_widget(
        Paragraph::new(Line::styled(message.to_string(), theme.error)).wrap(Wrap { trim: false }),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new("Press Enter to search again or Esc to quit."),
        rows[3],
    );
    draw_input(frame, rows[4], controller.input(), theme);
}

/// Rows needed to show `text` wrapped at `width`
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let chars = text.chars().count().max(1);
    u16::try_from(chars.div_ceil(width)).unwrap_or(u16::MAX)
}

/// Prompt with the text or placeholder; places the terminal cursor
fn draw_input(frame: &mut Frame<'_>, area: Rect, input: &TextInput, theme: &Theme) {
    const PROMPT: &str = "> ";

    let text = if input.is_empty() {
        Span::styled(input.placeholder().to_string(), theme.placeholder)
    } else {
        Span::styled(input.value().to_string(), theme.value)
    };
    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(PROMPT), text])), area);

    let offset = u16::try_from(PROMPT.len() + input.visual_cursor()).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
    frame.set_cursor_position((x, area.y));
}
