use ig_core::ImGuardError;
use log::LevelFilter;

/// Installs the stderr logger. `--log-level` wins over `RUST_LOG`; the default
/// keeps scope diagnostics (`warn`) visible.
pub(crate) fn init_logging(level: Option<&str>) -> Result<(), ImGuardError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(parse_level(level)?);
    }
    // Only the first logger installed in a process takes effect.
    let _ = builder.try_init();
    Ok(())
}

pub(crate) fn parse_level(level: &str) -> Result<LevelFilter, ImGuardError> {
    level.parse::<LevelFilter>().map_err(|_| {
        ImGuardError::new(
            "CLI_LOG_LEVEL_INVALID",
            format!(
                "Unsupported log level \"{}\". Use off, error, warn, info, debug or trace.",
                level
            ),
        )
    })
}
