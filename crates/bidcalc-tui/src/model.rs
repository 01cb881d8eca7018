//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::chart::{render_box_plot, render_histogram};
use crate::footer::render_footer;
use crate::form::{Evaluation, FormState};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, MAX_LOG_LINES};
use crate::messages::TuiMessage;
use crate::panel::render_form;
use crate::results::{max_offset, render_results};

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Panel rectangles of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub form: Rect,
    pub box_plot: Rect,
    pub histogram: Rect,
    pub results: Rect,
    pub logs: Rect,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Raw form contents.
    pub form: FormState,
    /// Outcome of the latest computation.
    pub evaluation: Evaluation,
    /// Status log.
    pub logs: Vec<String>,
    /// First visible result row.
    pub table_offset: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Status lines of the latest computation, to log only changes.
    last_status: Vec<String>,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app with the default form.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>) -> Self {
        Self::with_form(rx, FormState::default())
    }

    /// Create a TUI app with a pre-filled form and compute it once.
    #[must_use]
    pub fn with_form(rx: Receiver<TuiMessage>, form: FormState) -> Self {
        let mut app = Self {
            form,
            evaluation: Evaluation::default(),
            logs: Vec::new(),
            table_offset: 0,
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            last_status: Vec::new(),
            rx,
        };
        app.recompute();
        app
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        if let Some(line) = msg.status_line() {
            self.push_log(line);
            return;
        }
        match msg {
            TuiMessage::Quit => self.should_quit = true,
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                self.clamp_offset();
            }
            TuiMessage::Key(action) => self.handle_key_action(action),
            TuiMessage::Log(_) | TuiMessage::Warn(_) | TuiMessage::Error(_) => {}
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let edited = match action {
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::NextField => {
                self.form.focus_next();
                false
            }
            KeyAction::PrevField => {
                self.form.focus_prev();
                false
            }
            KeyAction::Input(c) => self.form.insert(c),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::ClearField => self.form.clear(),
            KeyAction::Toggle => self.form.toggle(),
            KeyAction::ScrollUp => {
                self.table_offset = self.table_offset.saturating_sub(1);
                false
            }
            KeyAction::ScrollDown => {
                self.table_offset += 1;
                self.clamp_offset();
                false
            }
            KeyAction::PageUp => {
                self.table_offset = self.table_offset.saturating_sub(PAGE_SIZE);
                false
            }
            KeyAction::PageDown => {
                self.table_offset += PAGE_SIZE;
                self.clamp_offset();
                false
            }
            KeyAction::Home => {
                self.table_offset = 0;
                false
            }
            KeyAction::End => {
                self.table_offset = usize::MAX;
                self.clamp_offset();
                false
            }
            KeyAction::None => false,
        };

        if edited {
            self.recompute();
        }
    }

    /// Evaluate the current form and log the outcome if it changed.
    pub fn recompute(&mut self) {
        self.evaluation = self.form.evaluate();
        self.clamp_offset();

        let status = status_lines(&self.evaluation);
        if status != self.last_status {
            for line in &status {
                self.push_log(line.clone());
            }
            self.last_status = status;
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOG_LINES {
            self.logs.remove(0);
        }
    }

    fn row_count(&self) -> usize {
        self.evaluation.report.as_ref().map_or(0, |r| r.rows.len())
    }

    fn clamp_offset(&mut self) {
        let area = Rect::new(0, 0, self.terminal_width, self.terminal_height);
        let height = Self::compute_layout(area).results.height;
        self.table_offset = self.table_offset.min(max_offset(self.row_count(), height));
    }

    /// Compute the dashboard layout.
    ///
    /// Header and footer frame a body split 40/60 between the form column
    /// (form over status log) and the output column (plots over the table).
    #[must_use]
    pub fn compute_layout(area: Rect) -> DashboardLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(2),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(outer[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(12), Constraint::Min(3)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let plots = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(right[0]);

        DashboardLayout {
            header: outer[0],
            form: left[0],
            logs: left[1],
            box_plot: plots[0],
            histogram: plots[1],
            results: right[1],
            footer: outer[2],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area());
        let report = self.evaluation.report.as_ref();

        render_header(frame, layout.header, report);
        render_form(frame, layout.form, &self.form);
        render_logs(frame, layout.logs, &self.logs);

        match report {
            Some(report) => {
                render_box_plot(frame, layout.box_plot, report.summary().as_ref());
                render_histogram(
                    frame,
                    layout.histogram,
                    &report.histogram(self.evaluation.bins),
                );
                render_results(frame, layout.results, &report.rows, self.table_offset);
            }
            None => {
                render_box_plot(frame, layout.box_plot, None);
                render_results(frame, layout.results, &[], 0);
            }
        }

        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until quit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.handle_message(TuiMessage::Resize {
            width: size.width,
            height: size.height,
        });

        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.update();
        }
    }
}

/// Status log lines describing an evaluation outcome.
#[must_use]
pub fn status_lines(evaluation: &Evaluation) -> Vec<String> {
    let mut lines: Vec<String> = evaluation
        .warnings
        .iter()
        .map(|w| format!("[WARN] {w}; defaults used"))
        .collect();

    match (&evaluation.report, &evaluation.error) {
        (_, Some(err)) => lines.push(format!("[ERROR] {err}")),
        (Some(report), None) => lines.push(format!(
            "{} bids: A={:.6} ({}), B={} ({}), {} rows",
            evaluation.bids.len(),
            report.reference.value,
            report.reference.description,
            report.control.value,
            report.control.description,
            report.rows.len()
        )),
        (None, None) => {}
    }
    lines
}
