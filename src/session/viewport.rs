use crate::session::message::Key;
use ratatui::text::Line;

/// Scrollable window over pre-rendered lines
#[derive(Debug, Clone)]
pub struct Viewport {
    lines: Vec<Line<'static>>,
    offset: usize,
    width: u16,
    height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 20)
    }
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            lines: Vec::new(),
            offset: 0,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Replaces the content, keeping the offset within bounds
    pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.clamp();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.offset = 0;
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// Lines currently inside the window
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let end = (self.offset + self.height as usize).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Applies a scroll key; returns false for keys the viewport ignores
    pub fn handle_key(&mut self, key: Key) -> bool {
        let page = usize::from(self.height.max(1));
        match key {
            Key::Up | Key::Char('k') => self.scroll_up(1),
            Key::Down | Key::Char('j') => self.scroll_down(1),
            Key::PageUp | Key::Char('b') => self.scroll_up(page),
            Key::PageDown | Key::Char('f') | Key::Char(' ') => self.scroll_down(page),
            Key::Char('u') => self.scroll_up(page / 2),
            Key::Char('d') => self.scroll_down(page / 2),
            Key::Home | Key::Char('g') => self.goto_top(),
            Key::End | Key::Char('G') => self.goto_bottom(),
            _ => return false,
        }
        true
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.height as usize)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
