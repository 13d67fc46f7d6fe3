// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Child process execution for toolchain binaries.

use itertools::Itertools;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tokio::process::Command;

use crate::result::CompilationOutput;

/// Captured streams and exit status of a finished child process.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// Exit code, absent when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Both streams as one diagnostic blob, stdout first.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// The raw output record attached to a compilation result.
    pub fn into_compilation_output(self, command: Vec<String>) -> CompilationOutput {
        CompilationOutput {
            code: self.code,
            stdout: self.stdout,
            stderr: self.stderr,
            command,
        }
    }
}

/// Runs `exe` with `args` in `cwd` and waits for it to exit.
///
/// The wait suspends only the current task; concurrent requests keep running.
/// Process lifecycle policy (timeouts, cancellation) belongs to the
/// environment that owns the working directory, not to this layer.
pub async fn run(exe: &str, args: &[String], cwd: &Path) -> std::io::Result<ExecOutput> {
    debug!("executing: {} {}", exe, args.iter().join(" "));
    let output = Command::new(exe)
        .args(args)
        .current_dir(cwd)
        .kill_on_drop(true)
        .output()
        .await?;
    Ok(ExecOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

static ERROR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^.*\((?P<line>\d+),(?P<col>\d+)\).*(Error:|error:).*$").unwrap()
});

/// Whether the output contains a `file(line,col): error:` style diagnostic
/// line. Used to classify log messages, never to decide success.
pub fn contains_error_line(output: &str) -> bool {
    ERROR_LINE.is_match(output)
}
