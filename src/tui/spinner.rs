const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Braille dot spinner shown while loading
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    index: usize,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % FRAMES.len();
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.index]
    }
}
