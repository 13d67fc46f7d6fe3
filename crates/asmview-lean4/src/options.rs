use asmview_compilation::env::read_env_var;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lean 4 backend options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lean4Options {
    /// Path to the leanc driver used to lower Lean source to C.
    pub leanc_exe: String,
    /// Extra flags passed to leanc before the output/input pair.
    pub leanc_flags: Vec<String>,
}

impl Default for Lean4Options {
    fn default() -> Self {
        Self {
            leanc_exe: read_env_var("LEANC_EXE"),
            leanc_flags: vec![],
        }
    }
}

impl Lean4Options {
    /// Returns the command line to lower `input` into `intermediate`.
    pub fn converter_command(&self, intermediate: &Path, input: &Path) -> Vec<String> {
        let mut result = vec![self.leanc_exe.clone()];

        // If we don't have a leanc executable, try using the path default one
        if result.iter().all(|exe| exe.is_empty()) {
            result = vec!["leanc".to_string()];
        }

        result.extend(self.leanc_flags.iter().cloned());
        result.push("-c".to_string());
        result.push(intermediate.to_string_lossy().into_owned());
        result.push(input.to_string_lossy().into_owned());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_command_shape() {
        let options = Lean4Options {
            leanc_exe: "/opt/lean/bin/leanc".to_string(),
            leanc_flags: vec![],
        };
        assert_eq!(
            options.converter_command(Path::new("example.c"), Path::new("example.lean")),
            vec!["/opt/lean/bin/leanc", "-c", "example.c", "example.lean"]
        );
    }

    #[test]
    fn test_converter_command_falls_back_to_path_leanc() {
        let options = Lean4Options {
            leanc_exe: String::new(),
            leanc_flags: vec!["-DautoImplicit=false".to_string()],
        };
        assert_eq!(
            options.converter_command(Path::new("example.c"), Path::new("example.lean")),
            vec![
                "leanc",
                "-DautoImplicit=false",
                "-c",
                "example.c",
                "example.lean"
            ]
        );
    }
}
