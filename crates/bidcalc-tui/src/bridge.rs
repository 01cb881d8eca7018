//! Bridge between engine presentation and TUI messages.

use crossbeam_channel::Sender;

use bidcalc_core::{BidError, ReportPresenter};

use crate::messages::TuiMessage;

/// Presenter that forwards startup warnings and errors to the TUI log panel.
pub struct TuiReportPresenter {
    tx: Sender<TuiMessage>,
}

impl TuiReportPresenter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl ReportPresenter for TuiReportPresenter {
    fn present_warning(&self, warning: &BidError) {
        let _ = self.tx.try_send(TuiMessage::Warn(warning.to_string()));
    }

    fn present_error(&self, error: &BidError) {
        let _ = self.tx.try_send(TuiMessage::Error(error.to_string()));
    }
}
