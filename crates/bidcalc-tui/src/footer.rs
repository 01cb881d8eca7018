//! Key hint bar.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Keys and what they do, in display order.
pub const KEY_HINTS: [(&str, &str); 6] = [
    ("Tab", "next field"),
    ("Shift-Tab", "previous"),
    ("\u{2190}/\u{2192}", "toggle"),
    ("Ctrl-U", "clear"),
    ("\u{2191}/\u{2193} PgUp/PgDn", "scroll"),
    ("Esc", "quit"),
];

fn hint_spans() -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Yellow);
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
    for (i, (k, action)) in KEY_HINTS.iter().enumerate() {
        let sep = if i + 1 == KEY_HINTS.len() { "" } else { " | " };
        spans.push(Span::styled(*k, key));
        spans.push(Span::raw(format!(": {action}{sep}")));
    }
    spans
}

/// Render the key hints.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let paragraph =
        Paragraph::new(Line::from(hint_spans())).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}
