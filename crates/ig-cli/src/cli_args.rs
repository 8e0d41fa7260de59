use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ig-cli")]
#[command(about = "Run rhai UI scripts against the scope guard")]
pub(crate) struct Cli {
    /// Log filter level (error, warn, info, debug, trace). Overrides RUST_LOG.
    #[arg(long = "log-level", global = true)]
    pub(crate) log_level: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Mode,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    Run(RunArgs),
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub(crate) struct RunArgs {
    #[arg(long = "script")]
    pub(crate) script: String,
    #[arg(long = "frames", default_value_t = 1)]
    pub(crate) frames: usize,
    #[arg(long = "entry")]
    pub(crate) entry: Option<String>,
    /// Conditional begin ops that report `false` every frame.
    #[arg(long = "deny")]
    pub(crate) deny: Vec<String>,
    #[arg(long = "max-operations")]
    pub(crate) max_operations: Option<u64>,
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[arg(long = "cases-dir")]
    pub(crate) cases_dir: String,
}
