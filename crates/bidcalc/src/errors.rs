//! Error handling and exit codes.

use bidcalc_cli::ui::print_error;
use bidcalc_core::constants::exit_codes;
use bidcalc_core::BidError;

use crate::config::ConfigError;

/// Exit code for an application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(bid) = err.downcast_ref::<BidError>() {
        bid.exit_code()
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_GENERIC
    }
}

/// Report an error on stderr and return the exit code.
///
/// Engine errors have already gone through the presenter.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<BidError>().is_none() {
        print_error(&format!("{err:#}"));
    }
    exit_code(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&BidError::EmptyBidSet.into()), 3);
        assert_eq!(
            exit_code(
                &BidError::Parse {
                    field: "bids",
                    token: "x".into()
                }
                .into()
            ),
            2
        );
        assert_eq!(
            exit_code(&BidError::InvalidParameters("G1".into()).into()),
            4
        );
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn config_error_code() {
        let err = ConfigError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(handle_error(&err.into()), 4);
    }
}
