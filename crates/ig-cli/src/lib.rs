use std::ffi::OsString;

use clap::Parser;
use ig_core::ImGuardError;

mod check;
mod cli_args;
mod error_map;
mod frame_runner;
mod logging;
mod source_loader;

pub(crate) use check::{check_cases, render_check};
pub(crate) use cli_args::{CheckArgs, Cli, Mode, RunArgs};
pub(crate) use error_map::{
    emit_error, map_cli_case, map_cli_output_json, map_cli_path, map_cli_script_read,
};
pub(crate) use frame_runner::{render_outcome, run_script};
pub(crate) use logging::init_logging;
pub(crate) use source_loader::{load_script, resolve_cases_dir};
#[cfg(test)]
pub(crate) use check::CaseOutcome;
#[cfg(test)]
pub(crate) use frame_runner::{denied_begin_results, RunOutcome};
#[cfg(test)]
pub(crate) use logging::parse_level;
#[cfg(test)]
pub(crate) use source_loader::resolve_path;

pub fn run_cli_from_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return error.exit_code();
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(error) => emit_error(error),
    }
}

fn run(cli: Cli) -> Result<i32, ImGuardError> {
    init_logging(cli.log_level.as_deref())?;
    match cli.command {
        Mode::Run(args) => run_mode(&args),
        Mode::Check(args) => check_mode(&args),
    }
}

fn run_mode(args: &RunArgs) -> Result<i32, ImGuardError> {
    let outcome = run_script(args)?;
    emit_lines(render_outcome(&outcome)?);
    Ok(0)
}

fn check_mode(args: &CheckArgs) -> Result<i32, ImGuardError> {
    let outcomes = check_cases(args)?;
    let failed = outcomes.iter().any(|outcome| outcome.failure.is_some());
    emit_lines(render_check(&outcomes));
    Ok(if failed { 1 } else { 0 })
}

fn emit_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
