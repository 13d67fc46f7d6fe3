//! What one compilation attempt produced.

use serde::{Deserialize, Serialize};

/// Raw captured output of one toolchain invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationOutput {
    /// Exit code of the process, if it terminated normally.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// The command line that was run.
    pub command: Vec<String>,
}

impl CompilationOutput {
    /// Both streams as one diagnostic blob, stdout first.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// A compiler optimization decision, as reported by the toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptRemark {
    pub pass: String,
    pub function: String,
    pub message: String,
}

/// Per-function stack consumption, as reported by the toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackUsageRecord {
    pub function: String,
    pub bytes: u64,
    /// Static/dynamic/bounded qualifier string from the toolchain.
    pub qualifier: String,
}

/// Result of one compilation attempt.
///
/// Failure is a value, not an error: a failed attempt carries the captured
/// output with empty remark and stack-usage collections, so renderers can
/// always show the diagnostic text without special-casing missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationResult {
    pub output: CompilationOutput,
    pub remarks: Vec<OptRemark>,
    pub stack_usage: Vec<StackUsageRecord>,
    /// Whether the attempt succeeded. Not derivable from the exit code
    /// alone: a converter that exits 0 without producing its output file is
    /// a failure with code 0.
    pub success: bool,
}

impl CompilationResult {
    /// Well-formed early-failure value: the captured output, nothing else.
    pub fn failed(output: CompilationOutput) -> Self {
        Self {
            output,
            remarks: vec![],
            stack_usage: vec![],
            success: false,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_is_well_formed() {
        let result = CompilationResult::failed(CompilationOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: "boom".to_string(),
            command: vec!["leanc".to_string()],
        });
        assert!(!result.is_success());
        assert!(result.remarks.is_empty());
        assert!(result.stack_usage.is_empty());
        assert!(result.output.combined().contains("boom"));
    }

    #[test]
    fn test_failure_with_zero_exit_stays_a_failure() {
        let result = CompilationResult::failed(CompilationOutput {
            code: Some(0),
            ..CompilationOutput::default()
        });
        assert!(!result.is_success());
    }
}
