//! Dashboard palette.

use ratatui::style::{Color, Modifier, Style};

/// Colors shared by the dashboard panels.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub focus: Color,
    pub inactive: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            focus: Color::Yellow,
            inactive: Color::DarkGray,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Palette {
    /// Panel titles and table headers.
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of a form field. Focus wins over inactivity so the cursor
    /// stays visible on a field the current policy ignores.
    #[must_use]
    pub fn field(&self, focused: bool, active: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.focus)
                .add_modifier(Modifier::BOLD)
        } else if active {
            Style::default()
        } else {
            Style::default().fg(self.inactive)
        }
    }

    /// Style of a status line, chosen by its `[WARN]`/`[ERROR]` prefix.
    #[must_use]
    pub fn status(&self, line: &str) -> Style {
        if line.starts_with("[ERROR]") {
            Style::default().fg(self.error)
        } else if line.starts_with("[WARN]") {
            Style::default().fg(self.warning)
        } else {
            Style::default()
        }
    }
}
