//! Application entry point and dispatch.

use std::ffi::OsString;
use std::io::BufRead;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use fibonaccier_cli::input::resolve_input;
use fibonaccier_cli::presenter::CLIResultPresenter;
use fibonaccier_core::calculator::FibError;
use fibonaccier_core::constants::exit_codes;
use fibonaccier_orchestration::interfaces::ResultPresenter;
use fibonaccier_orchestration::orchestrator::{analyze_race_results, cross_check, execute_race};

use crate::config::AppConfig;

/// Run the application and return the process exit code.
///
/// Usage errors are handled here: the long help goes to stderr and the
/// process still exits successfully. Every other failure is returned as `Err`.
pub fn run<I, T>(args: I, stdin: &mut impl BufRead) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match AppConfig::try_parse_from(args) {
        Ok(config) => config,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(exit_codes::SUCCESS);
        }
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "invalid command line");
            return Ok(report_usage());
        }
    };
    init_tracing(config.verbose);

    let presenter = CLIResultPresenter::new(config.verbose);
    execute(&config, stdin, &presenter)
}

/// Resolve n, race both computations, and present the outcome.
pub fn execute(
    config: &AppConfig,
    stdin: &mut impl BufRead,
    presenter: &dyn ResultPresenter,
) -> Result<i32> {
    tracing::debug!(?config, "parsed configuration");

    let n = match resolve_input(config.args.as_slice(), stdin) {
        Ok(n) => n,
        Err(FibError::Usage(reason)) => {
            tracing::debug!(%reason, "invalid input");
            return Ok(report_usage());
        }
        Err(err) => return Err(err.into()),
    };

    let opts = config.options();
    tracing::info!(n, time_unit = ?opts.time_unit, seed = ?opts.seed, "starting race");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to build async runtime")?;
    let pair = runtime.block_on(execute_race(&opts, n));

    let outcome = analyze_race_results(&pair)?;
    if config.verify {
        cross_check(n, &outcome)?;
        tracing::debug!(n, "result matches iterative reference");
    }

    presenter.present_report(n, &outcome);
    Ok(exit_codes::SUCCESS)
}

/// Print the full help text to stderr. A usage error is not a failure.
fn report_usage() -> i32 {
    eprintln!("{}", AppConfig::command().render_long_help());
    exit_codes::SUCCESS
}

/// Install the stderr log subscriber. Later calls are no-ops.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .try_init();
}
