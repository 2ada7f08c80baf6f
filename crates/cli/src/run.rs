//! `candrec run` / `candrec validate` — config-driven reconciliation.

use std::path::{Path, PathBuf};

use candrec_recon::engine::{load_interviews, run};
use candrec_recon::report::to_csv;
use candrec_recon::ReconConfig;

use crate::exit_codes::EXIT_ERROR;
use crate::report::render_report;
use crate::CliError;

pub fn cmd_run(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::config(format!("cannot read config: {e}")))?;
    let config = ReconConfig::from_toml(&config_str).map_err(CliError::from_recon)?;

    // Input and output paths resolve relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let input_path = base_dir.join(&config.input.file);
    let csv_data = std::fs::read_to_string(&input_path)
        .map_err(|e| CliError::input(format!("cannot read {}: {e}", input_path.display())))?;

    let records = load_interviews(&csv_data, &config.columns).map_err(CliError::from_recon)?;
    let result = run(&config, &records);

    // The report file is created only when something is unmatched; a clean
    // run leaves no file behind. Content is built fully in memory and
    // written in one call, so a crash mid-write can leave a truncated file
    // but never a stale header with fresh rows.
    let report_path = base_dir.join(&config.output.file);
    if !result.unmatched.is_empty() {
        let csv_text = to_csv(&result.unmatched).map_err(CliError::from_recon)?;
        std::fs::write(&report_path, csv_text).map_err(|e| {
            CliError::output(format!("cannot write {}: {e}", report_path.display()))
        })?;
    }

    if !quiet {
        print!("{}", render_report(&result, &report_path.display().to_string()));
    }

    if json_output || output_file.is_some() {
        let json_str = serde_json::to_string_pretty(&result).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;

        if let Some(ref path) = output_file {
            std::fs::write(path, &json_str).map_err(|e| {
                CliError::output(format!("cannot write {}: {e}", path.display()))
            })?;
            eprintln!("wrote {}", path.display());
        }

        if json_output {
            println!("{json_str}");
        }
    }

    let s = &result.summary;
    eprintln!(
        "recon '{}': {} interview(s), {} unmatched ({} test, {} id, {} other)",
        config.name,
        records.len(),
        s.total_unmatched,
        s.test_candidates,
        s.id_placeholders,
        s.other,
    );

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::config(format!("cannot read config: {e}")))?;
    let config = ReconConfig::from_toml(&config_str).map_err(CliError::from_recon)?;

    if config.known_names.is_empty() {
        eprintln!("warning: known_names is empty; every interview will be unmatched");
    }

    eprintln!(
        "valid: '{}' with {} known name(s), input '{}', output '{}'",
        config.name,
        config.known_names.len(),
        config.input.file,
        config.output.file,
    );

    Ok(())
}
