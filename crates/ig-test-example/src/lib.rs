use std::path::PathBuf;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn demos_root() -> PathBuf {
    workspace_root().join("demos")
}

pub fn demo_script(name: &str) -> PathBuf {
    demos_root().join(format!("{}.rhai", name))
}

pub fn demo_case(name: &str) -> PathBuf {
    demos_root().join(format!("{}.case.json", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_root_points_to_workspace() {
        assert!(workspace_root().join("Cargo.toml").exists());
    }

    #[test]
    fn demos_root_points_to_demos_directory() {
        assert!(demos_root().is_dir());
    }

    #[test]
    fn demo_paths_join_name_and_suffix() {
        assert!(demo_script("01-clean-nesting").is_file());
        assert!(demo_case("01-clean-nesting").ends_with("01-clean-nesting.case.json"));
    }

    #[test]
    fn every_demo_case_passes() {
        let cases = ig_tool::find_case_files(&demos_root()).expect("demo cases should exist");
        assert!(cases.len() >= 5);
        for case in cases {
            if let Err(error) = ig_tool::assert_case(&case) {
                panic!("{} failed: {}", case.display(), error);
            }
        }
    }
}
