use std::fs;
use std::path::PathBuf;

use ig_core::ImGuardError;

use crate::{map_cli_path, map_cli_script_read};

#[derive(Debug, Clone)]
pub(crate) struct LoadedScript {
    pub(crate) path: PathBuf,
    pub(crate) source: String,
}

pub(crate) fn load_script(script: &str) -> Result<LoadedScript, ImGuardError> {
    let path = resolve_path(script)?;
    if !path.is_file() {
        return Err(ImGuardError::new(
            "CLI_SCRIPT_NOT_FOUND",
            format!("script is not a file: {}", path.display()),
        ));
    }
    let source = fs::read_to_string(&path).map_err(map_cli_script_read)?;
    Ok(LoadedScript { path, source })
}

pub(crate) fn resolve_cases_dir(cases_dir: &str) -> Result<PathBuf, ImGuardError> {
    let path = resolve_path(cases_dir)?;
    if !path.exists() {
        return Err(ImGuardError::new(
            "CLI_CASES_NOT_FOUND",
            format!("cases-dir does not exist: {}", path.display()),
        ));
    }
    if !path.is_dir() {
        return Err(ImGuardError::new(
            "CLI_CASES_NOT_DIR",
            format!("cases-dir is not a directory: {}", path.display()),
        ));
    }
    Ok(path)
}

pub(crate) fn resolve_path(raw: &str) -> Result<PathBuf, ImGuardError> {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return Ok(path);
    }
    Ok(std::env::current_dir().map_err(map_cli_path)?.join(path))
}
