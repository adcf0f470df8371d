//! A bordered frame of display lines.

use super::Frame;

/// Text display widget; the item menu uses a single line of it for the
/// description bar, but multi-line panels are the same widget.
#[derive(Clone, Debug, Default)]
pub struct TextFrame {
    pub frame: Frame,
    lines: Vec<String>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push_line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
        self.auto_height();
    }

    /// Overwrite a line, padding with empty lines if the index is past the
    /// end.
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        if index >= self.lines.len() {
            self.lines.resize(index + 1, String::new());
        }
        self.lines[index] = text.into();
        self.auto_height();
    }

    fn auto_height(&mut self) {
        self.frame.bounds.height = self.lines.len() as u16 + self.frame.frame_width();
    }
}
