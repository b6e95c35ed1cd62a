//! skillhub CLI: parse, score, format, scan and schema.
//!
//! Logging: set `RUST_LOG=skillhub=debug` (or `warn`, `info`) to see logs on stderr.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillhub_cli::{
    ScanRequest, format_command, load_settings, parse_command, scan_command, schema_command,
    score_command, set_config_home_override,
};

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "skillhub=debug"
        } else {
            "skillhub=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Some(conf_dir) = cli.conf.clone() {
        set_config_home_override(conf_dir);
    }
    let settings = load_settings();
    let options = settings.scoring_options(cli.presence);

    let output = match cli.command {
        Command::Parse { file, raw } => parse_command(&file, raw)?,
        Command::Score { file, format } => {
            score_command(&file, &options, settings.output_format(format))?
        }
        Command::Format { file, write } => format_command(&file, write)?,
        Command::Scan {
            dir,
            format,
            output,
            existing,
        } => {
            let request = ScanRequest {
                format: settings.output_format(format),
                output: output.or_else(|| settings.index_path()),
                existing,
            };
            scan_command(&dir, &settings.catalog_scanner(options), &request)?
        }
        Command::Schema => schema_command()?,
    };

    println!("{output}");
    Ok(())
}
