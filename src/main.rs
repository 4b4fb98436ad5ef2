use anyhow::Result;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use deepl_cli::cli::commands::translate::{self, TranslateOptions};
use deepl_cli::cli::{Mode, help_text, parse_cli_args};
use deepl_cli::output::OutputConfig;
use deepl_cli::paths;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let output = OutputConfig::default();

    match run(&output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = output.write_error(&mut io::stderr(), format_args!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(output: &OutputConfig) -> Result<()> {
    let args = parse_cli_args(std::env::args_os().skip(1))?;

    match args.mode {
        Mode::Help => print!("{}", help_text()),
        Mode::Version => println!("{}", env!("CARGO_PKG_VERSION")),
        Mode::Translate => {
            let config_path = paths::config_file()?;
            translate::run_translate(TranslateOptions::new(args, config_path), output).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr, filtered by `DEEPL_CLI_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env("DEEPL_CLI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}
