//! CLI exit code registry.
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                                      |
//! |------|--------------------------------------------------------------|
//! | 0    | Success                                                      |
//! | 1    | General error (unspecified)                                  |
//! | 2    | CLI usage error (clap also exits 2 on bad arguments)         |
//! | 3    | Invalid config (TOML parse or validation failure)            |
//! | 4    | Input error (unreadable file, bad CSV, missing column/field) |
//! | 5    | Output write error                                           |

use candrec_recon::ReconError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config file failed to parse or validate.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// Input CSV unreadable, malformed, or missing a required column/field.
pub const EXIT_INPUT: u8 = 4;

/// Output destination not writable.
pub const EXIT_OUTPUT: u8 = 5;

/// Map an engine error to its exit code.
pub fn error_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        ReconError::CsvParse(_)
        | ReconError::MissingColumn { .. }
        | ReconError::MissingField { .. } => EXIT_INPUT,
        ReconError::CsvWrite(_) => EXIT_OUTPUT,
    }
}
