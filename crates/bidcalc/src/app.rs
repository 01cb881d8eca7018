//! Application entry point and dispatch.

use anyhow::{Context, Result};
use crossbeam_channel::Sender;

use bidcalc_cli::output::{render_export, write_to_file};
use bidcalc_cli::{CliReportPresenter, OutputFormat};
use bidcalc_core::{evaluate, EvaluationRequest, ReportPresenter};
use bidcalc_tui::{FormState, TuiApp, TuiMessage, TuiReportPresenter};

use crate::config::{AppConfig, ParamFile};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting");

    if let Some(shell) = config.completion {
        AppConfig::write_completion(shell, &mut std::io::stdout());
        return Ok(());
    }

    let file = config.param_file()?;

    if config.tui {
        return run_tui(config, &file);
    }

    run_cli(config, &file)
}

fn run_cli(config: &AppConfig, file: &ParamFile) -> Result<()> {
    let presenter = CliReportPresenter::new(config.verbose, config.quiet);
    let params = config.parameters(file);
    for warning in &params.warnings {
        presenter.present_warning(warning);
    }

    let bids = config.bids(file).inspect_err(|err| presenter.present_error(err))?;
    let request = EvaluationRequest {
        bids,
        ..params.request
    };

    let report = evaluate(&request).inspect_err(|err| presenter.present_error(err))?;

    match (config.format, &config.output) {
        (format, Some(path)) => {
            if format == OutputFormat::Table {
                presenter.present_bids(&request.bids);
                presenter.present_report(&report, params.bins);
            }
            write_to_file(path, &report, format)
                .with_context(|| format!("exporting to {}", path.display()))?;
        }
        (OutputFormat::Table, None) => {
            presenter.present_bids(&request.bids);
            presenter.present_report(&report, params.bins);
        }
        (format, None) => print!("{}", render_export(&report, format)?),
    }

    Ok(())
}

fn run_tui(config: &AppConfig, file: &ParamFile) -> Result<()> {
    let params = config.parameters(file);
    let mut form = FormState::from_request(&params.request, params.bins);
    form.bids = config.bid_text(file);

    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    ctrlc_handler(tx.clone());

    let presenter = TuiReportPresenter::new(tx);
    for warning in &params.warnings {
        presenter.present_warning(warning);
    }

    let mut app = TuiApp::with_form(rx, form);
    app.update();
    app.run().context("TUI error")?;

    Ok(())
}

/// Quit the dashboard on SIGINT sent from outside, e.g. `kill -INT`.
///
/// In raw mode a typed Ctrl+C arrives as a key event and is handled by the
/// keymap; this handler never sees it.
fn ctrlc_handler(tx: Sender<TuiMessage>) {
    if let Err(err) = ctrlc::set_handler(move || {
        let _ = tx.send(TuiMessage::Quit);
    }) {
        tracing::warn!("cannot install Ctrl+C handler: {err}");
    }
}
