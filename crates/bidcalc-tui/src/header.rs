//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use bidcalc_core::EvaluationReport;

/// Render the header panel with the formula and the current A and B.
pub fn render_header(frame: &mut Frame, area: Rect, report: Option<&EvaluationReport>) {
    let summary = match report {
        Some(report) => format!(
            " | A={:.6} ({}) | B={} ({})",
            report.reference.value,
            report.reference.description,
            report.control.value,
            report.control.description
        ),
        None => " | no result".to_string(),
    };

    let text = vec![Line::from(vec![
        Span::styled(
            "Benchmark = A x K1 x Q1 + B x K2 x (1-Q1)",
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(summary),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" bidcalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidcalc_core::benchmark;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row_text(width: u16, report: Option<&EvaluationReport>) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_header(frame, area, report);
            })
            .unwrap();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf.buffer[(x, y)].symbol());
            }
        }
        text
    }

    #[test]
    fn header_without_report() {
        let text = row_text(100, None);
        assert!(text.contains("no result"));
    }

    #[test]
    fn header_with_report() {
        let report = benchmark(&[10.0]).unwrap();
        let text = row_text(160, Some(&report));
        assert!(text.contains("A=10.000000"));
    }
}
