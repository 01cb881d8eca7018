//! Parameter form panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::form::{Field, FormState};
use crate::styles::Palette;

/// One line per field; the focused field gets a cursor and focus style,
/// fields that do not affect the result are muted.
#[must_use]
pub fn form_lines(form: &FormState, palette: &Palette) -> Vec<Line<'static>> {
    Field::ALL
        .iter()
        .map(|&field| {
            let focused = field == form.focus;
            let style = palette.field(focused, form.is_active(field));
            let marker = if focused { "> " } else { "  " };
            let mut value = form.display(field);
            if focused {
                value.push(if field.is_choice() { ' ' } else { '_' });
            }
            Line::from(vec![
                Span::styled(format!("{marker}{:<15}", field.label()), style),
                Span::styled(value, style),
            ])
        })
        .collect()
}

/// Render the form.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState) {
    let palette = Palette::default();
    let paragraph = Paragraph::new(form_lines(form, &palette)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Parameters ")
            .title_style(palette.title()),
    );
    frame.render_widget(paragraph, area);
}
