use std::fmt::Display;

use ig_core::ImGuardError;
use ig_tool::IgToolError;

fn map_error(code: &'static str, error: impl Display) -> ImGuardError {
    ImGuardError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: ImGuardError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message)
            .unwrap_or_else(|_| "\"Unknown error\"".to_string())
    );
    1
}

pub(crate) fn map_cli_path(error: std::io::Error) -> ImGuardError {
    map_error("CLI_PATH", error)
}

pub(crate) fn map_cli_script_read(error: std::io::Error) -> ImGuardError {
    map_error("CLI_SCRIPT_READ", error)
}

pub(crate) fn map_cli_output_json(error: serde_json::Error) -> ImGuardError {
    map_error("CLI_OUTPUT_JSON", error)
}

/// Setup failures keep the runtime's own code; anything else is a failed case.
pub(crate) fn map_cli_case(error: IgToolError) -> ImGuardError {
    match error {
        IgToolError::Engine(error) => error,
        other => map_error("CLI_CASE_FAILED", other),
    }
}

#[cfg(test)]
mod error_map_tests {
    use super::*;

    #[test]
    fn emit_error_returns_non_zero_exit_code() {
        let code = emit_error(ImGuardError::new("ERR", "failed"));
        assert_eq!(code, 1);
    }

    #[test]
    fn mapping_helpers_keep_error_codes() {
        assert_eq!(map_cli_path(std::io::Error::other("path")).code, "CLI_PATH");
        assert_eq!(
            map_cli_script_read(std::io::Error::other("read")).code,
            "CLI_SCRIPT_READ"
        );

        let invalid = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        assert_eq!(map_cli_output_json(invalid).code, "CLI_OUTPUT_JSON");

        let engine = IgToolError::Engine(ImGuardError::new("RUNTIME_ENTRY_MISSING", "x"));
        assert_eq!(map_cli_case(engine).code, "RUNTIME_ENTRY_MISSING");
        let frames = IgToolError::FrameCountMismatch {
            expected: 1,
            actual: 2,
        };
        let mapped = map_cli_case(frames);
        assert_eq!(mapped.code, "CLI_CASE_FAILED");
        assert!(mapped.message.contains("frame count"));
    }
}
