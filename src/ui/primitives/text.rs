use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme;

/// Semantic tone of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

/// Text tagged with a tone, rendered with or without ANSI color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Tone,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Dim)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || (self.tone == Tone::Plain && !self.bold) {
            return self.text.clone();
        }

        let color = match self.tone {
            Tone::Plain => None,
            Tone::Success => Some(theme::colors::SUCCESS),
            Tone::Error => Some(theme::colors::ERROR),
            Tone::Warning => Some(theme::colors::WARNING),
            Tone::Info => Some(theme::colors::INFO),
            Tone::Dim => Some(theme::colors::DIM),
        };

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        assert_eq!(ColoredText::warning("Invalid input.").render(false), "Invalid input.");
    }

    #[test]
    fn render_with_color_includes_ansi_escape() {
        let rendered = ColoredText::error("no").render(true);
        assert!(rendered.contains("\u{1b}["));
    }

    #[test]
    fn plain_text_is_unstyled_even_with_color() {
        assert_eq!(ColoredText::plain("menu").render(true), "menu");
    }
}
