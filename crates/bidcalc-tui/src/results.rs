//! Scrollable table of benchmark rows.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use bidcalc_core::BenchmarkRow;

use crate::styles::Palette;

const HEADERS: [&str; 8] = ["#", "A", "Q1", "K1", "B", "K2", "1-Q1", "Benchmark"];

/// Cells of one table row, values rounded to six decimals.
#[must_use]
pub fn row_cells(index: usize, row: &BenchmarkRow) -> [String; 8] {
    let r = row.rounded();
    [
        (index + 1).to_string(),
        format!("{:.6}", r.a),
        format!("{:.6}", r.q1),
        format!("{:.6}", r.k1),
        format!("{:.6}", r.b),
        format!("{:.6}", r.k2),
        format!("{:.6}", r.q2),
        format!("{:.6}", r.benchmark),
    ]
}

/// Largest useful scroll offset for `rows` rows in a panel of `height`.
#[must_use]
pub fn max_offset(rows: usize, height: u16) -> usize {
    // border top/bottom plus the header line
    rows.saturating_sub(height.saturating_sub(3) as usize)
}

/// Render rows starting at `offset`.
pub fn render_results(frame: &mut Frame, area: Rect, rows: &[BenchmarkRow], offset: usize) {
    let header =
        Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(Palette::default().title());

    let offset = offset.min(rows.len());
    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, row)| Row::new(row_cells(i, row)))
        .collect();

    let mut widths = vec![Constraint::Length(4)];
    widths.extend(std::iter::repeat(Constraint::Length(10)).take(6));
    widths.push(Constraint::Min(10));

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Results ({} rows) ", rows.len())),
    );

    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidcalc_core::benchmark;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(rows: &[BenchmarkRow], offset: usize) -> String {
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_results(frame, area, rows, offset);
            })
            .unwrap();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf.buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn cells_are_one_based_and_rounded() {
        let report = benchmark(&[0.95, 0.93]).unwrap();
        let cells = row_cells(0, &report.rows[0]);
        assert_eq!(cells[0], "1");
        assert_eq!(cells[1], "0.950000");
        assert_eq!(cells[2], "0.850000");
        assert_eq!(cells[3], "0.950000");
        assert_eq!(cells[4], "1.000000");
        assert_eq!(cells[6], "0.150000");
    }

    #[test]
    fn max_offset_accounts_for_chrome() {
        assert_eq!(max_offset(35, 12), 26);
        assert_eq!(max_offset(5, 12), 0);
        assert_eq!(max_offset(5, 0), 5);
    }

    #[test]
    fn renders_header_and_rows() {
        let report = benchmark(&[0.95, 0.93]).unwrap();
        let text = screen(&report.rows, 0);
        assert!(text.contains("Results (35 rows)"));
        assert!(text.contains("Benchmark"));
        assert!(text.contains("0.850000"));
    }

    #[test]
    fn offset_skips_rows() {
        let report = benchmark(&[0.95, 0.93]).unwrap();
        let text = screen(&report.rows, 30);
        assert!(text.contains("31"));
        assert!(text.contains("35"));
    }

    #[test]
    fn empty_table() {
        let text = screen(&[], 4);
        assert!(text.contains("Results (0 rows)"));
    }
}
