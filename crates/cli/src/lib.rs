//! Library surface of the `candrec` binary.
//!
//! Command implementations live here so integration tests can drive them
//! without spawning a process.

pub mod exit_codes;
pub mod report;
pub mod run;

use candrec_recon::ReconError;

use exit_codes::{error_exit_code, EXIT_INPUT, EXIT_INVALID_CONFIG, EXIT_OUTPUT, EXIT_USAGE};

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INVALID_CONFIG, message: msg.into(), hint: None }
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INPUT, message: msg.into(), hint: None }
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self { code: EXIT_OUTPUT, message: msg.into(), hint: None }
    }

    /// Create error from an engine error with the proper exit code.
    pub fn from_recon(err: ReconError) -> Self {
        let code = error_exit_code(&err);
        let hint = match &err {
            ReconError::MissingColumn { .. } => {
                Some("check the [columns] mapping against the export header".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
