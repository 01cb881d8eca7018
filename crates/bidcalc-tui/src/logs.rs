//! Status log panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::styles::Palette;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Maximum number of retained log lines.
pub const MAX_LOG_LINES: usize = 200;

/// Render the most recent log lines that fit in the panel.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String]) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let skip = logs.len().saturating_sub(visible_height);
    let palette = Palette::default();

    let items: Vec<ListItem> = logs
        .iter()
        .skip(skip)
        .map(|log| ListItem::new(Line::raw(log.as_str())).style(palette.status(log)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}
