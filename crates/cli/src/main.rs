// Candrec CLI - reconcile interview exports against imported candidate names

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use candrec_cli::exit_codes::EXIT_SUCCESS;
use candrec_cli::run::{cmd_run, cmd_validate};
use candrec_cli::CliError;

#[derive(Parser)]
#[command(name = "candrec")]
#[command(about = "Reconcile interview exports against imported candidate names")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run reconciliation from a TOML config file
    #[command(after_help = "\
Examples:
  candrec run recon.toml
  candrec run recon.toml --json
  candrec run recon.toml --output result.json
  candrec run recon.toml --quiet")]
    Run {
        /// Path to the recon TOML config file
        config: PathBuf,

        /// Output result JSON to stdout in addition to the report
        #[arg(long)]
        json: bool,

        /// Write result JSON to file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Suppress the console report
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a recon config without running
    #[command(after_help = "\
Examples:
  candrec validate recon.toml")]
    Validate {
        /// Path to the recon TOML config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, json, output, quiet } => cmd_run(config, json, output, quiet),
        Commands::Validate { config } => cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}
