//! Box-plot and histogram panels.

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use bidcalc_core::stats::{BoxSummary, Histogram};

/// Draw a horizontal box plot of `width` cells.
///
/// Whiskers are `-`, the box is `[==]`, the extremes are `|`. The median
/// is `#` and wins over any other mark at the same cell.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn box_plot_line(summary: &BoxSummary, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = summary.max - summary.min;
    let pos = |v: f64| -> usize {
        if span <= 0.0 {
            width / 2
        } else {
            (((v - summary.min) / span) * (width - 1) as f64).round() as usize
        }
    };

    let (lo, q1, med, q3, hi) = (
        pos(summary.min),
        pos(summary.q1),
        pos(summary.median),
        pos(summary.q3),
        pos(summary.max),
    );

    (0..width)
        .map(|i| {
            if i == med {
                '#'
            } else if i == lo || i == hi {
                '|'
            } else if i == q1 {
                '['
            } else if i == q3 {
                ']'
            } else if i > q1 && i < q3 {
                '='
            } else if i > lo && i < hi {
                '-'
            } else {
                ' '
            }
        })
        .collect()
}

/// Render the box-plot panel with the five summary values.
pub fn render_box_plot(frame: &mut Frame, area: Rect, summary: Option<&BoxSummary>) {
    let block = Block::default().borders(Borders::ALL).title(" Box plot ");
    let inner = block.inner(area);

    let lines = match summary {
        Some(summary) => vec![
            Line::raw(box_plot_line(summary, inner.width as usize)),
            Line::raw(format!(
                "min {:.6}  25% {:.6}  median {:.6}",
                summary.min, summary.q1, summary.median
            )),
            Line::raw(format!("75% {:.6}  max {:.6}", summary.q3, summary.max)),
        ],
        None => vec![Line::raw("no data")],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(paragraph, area);
}

/// Render the histogram as horizontal bars labelled by bin start.
pub fn render_histogram(frame: &mut Frame, area: Rect, histogram: &Histogram) {
    let bars: Vec<Bar> = histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::default()
                .value(bin.count as u64)
                .label(Line::from(format!("{:.6}", bin.start)))
                .text_value(bin.count.to_string())
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Histogram ({} bins) ", histogram.bins.len())),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Green))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn summary() -> BoxSummary {
        BoxSummary {
            min: 0.0,
            q1: 2.0,
            median: 5.0,
            q3: 8.0,
            max: 10.0,
        }
    }

    #[test]
    fn box_plot_marks() {
        let line = box_plot_line(&summary(), 11);
        assert_eq!(line, "|-[==#==]-|");
    }

    #[test]
    fn box_plot_constant_values() {
        let s = BoxSummary {
            min: 1.0,
            q1: 1.0,
            median: 1.0,
            q3: 1.0,
            max: 1.0,
        };
        let line = box_plot_line(&s, 5);
        assert_eq!(line.chars().nth(2), Some('#'));
        assert_eq!(line.chars().count(), 5);
    }

    #[test]
    fn box_plot_zero_width() {
        assert!(box_plot_line(&summary(), 0).is_empty());
    }

    #[test]
    fn render_panels_do_not_panic() {
        let histogram = Histogram::from_values(&[0.9, 0.91, 0.95, 0.97, 1.0], 3);
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let top = Rect { height: 6, ..area };
                let bottom = Rect {
                    y: 6,
                    height: 14,
                    ..area
                };
                render_box_plot(frame, top, Some(&summary()));
                render_histogram(frame, bottom, &histogram);
            })
            .unwrap();
    }

    #[test]
    fn render_empty_panels() {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_box_plot(frame, area, None);
                render_histogram(frame, area, &Histogram { bins: Vec::new() });
            })
            .unwrap();
    }
}
