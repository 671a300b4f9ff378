//! settings-report CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use settings_report::cli::report::Reporter;
use settings_report::cli::{handle_error, Cli};
use settings_report::infrastructure::config::ConfigLoader;
use settings_report::infrastructure::logging::LoggerImpl;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match LoggerImpl::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("ERROR: Failed to initialize logging: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let reporter = Reporter::new(ConfigLoader::new(cli.settings_path()));
    let mut stdout = io::stdout().lock();

    let result = if cli.json {
        reporter.run_json(&mut stdout)
    } else {
        reporter.run(&mut stdout)
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => handle_error(&err, cli.json),
    }
}
