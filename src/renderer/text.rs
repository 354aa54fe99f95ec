//! Font metrics the speech bubble and HUD are laid out with

/// Supplied by the host's font system
pub trait TextMetrics {
    /// Distance between baselines
    fn line_height(&self) -> f32;
    /// Advance width of a single line of text
    fn text_width(&self, text: &str) -> f32;
}

/// Fixed-advance approximation of a 16px bold sans font
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            char_width: 10.0,
            line_height: 19.0,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }
}
