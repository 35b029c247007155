use crate::session::message::Key;
use tui_input::{Input, InputRequest};

/// Default maximum length of a family name
pub const FAMILY_NAME_LIMIT: usize = 32;

/// Single-line family name input
///
/// Editing is delegated to `tui_input::Input`; this wrapper adds the
/// character limit, the placeholder and the mapping from session keys.
#[derive(Debug, Clone)]
pub struct TextInput {
    input: Input,
    char_limit: usize,
    placeholder: String,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new("Family Name", FAMILY_NAME_LIMIT)
    }
}

impl TextInput {
    pub fn new(placeholder: &str, char_limit: usize) -> Self {
        Self {
            input: Input::default(),
            char_limit,
            placeholder: placeholder.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    /// Cursor position in terminal columns
    pub fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Clears the text and moves the cursor home
    pub fn reset(&mut self) {
        self.input.reset();
    }

    /// Applies an editing key; returns false for keys the input ignores
    pub fn handle_key(&mut self, key: Key) -> bool {
        let request = match key {
            Key::Char(c) if !c.is_control() => {
                if self.input.value().chars().count() >= self.char_limit {
                    return true;
                }
                InputRequest::InsertChar(c)
            }
            Key::Backspace => InputRequest::DeletePrevChar,
            Key::Delete => InputRequest::DeleteNextChar,
            Key::Left => InputRequest::GoToPrevChar,
            Key::Right => InputRequest::GoToNextChar,
            Key::Home => InputRequest::GoToStart,
            Key::End => InputRequest::GoToEnd,
            _ => return false,
        };

        self.input.handle(request);
        true
    }
}
