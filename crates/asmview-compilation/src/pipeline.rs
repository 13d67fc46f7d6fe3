//! The generic compilation pipeline and its toolchain-driving implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::env::read_env_var;
use crate::exec;
use crate::request::{CompilationRequest, OutputFilters};
use crate::result::CompilationResult;

/// A capability that turns a compilable input file into output artifacts.
///
/// Backends whose source language the toolchain cannot consume directly wrap
/// another pipeline and delegate to it once they have lowered their input.
#[async_trait]
pub trait CompilerPipeline: Send + Sync {
    async fn compile(&self, request: &CompilationRequest) -> Result<CompilationResult>;
}

/// Flags instructing the driver to emit debug info, compile without linking,
/// and write to `output_filename`.
///
/// Pure and total: filter contents do not change the shape at this layer;
/// binary/presentation filters are honored by later stages.
pub fn options_for_filter(_filters: &OutputFilters, output_filename: &str) -> Vec<String> {
    vec![
        "-g".to_string(),
        "-c".to_string(),
        "-o".to_string(),
        output_filename.to_string(),
    ]
}

/// Options for the stock toolchain pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainOptions {
    /// Path to the base compiler driver.
    pub driver_exe: String,
    /// Flags always passed to the driver, before per-request options.
    pub driver_flags: Vec<String>,
}

impl Default for ToolchainOptions {
    fn default() -> Self {
        Self {
            driver_exe: read_env_var("CC_EXE"),
            driver_flags: vec![],
        }
    }
}

impl ToolchainOptions {
    /// Returns the command line to drive one compilation.
    pub fn driver_command(&self, request: &CompilationRequest, output_file: &str) -> Vec<String> {
        let mut result = vec![self.driver_exe.clone()];

        // If we don't have a driver executable, try using the path default one
        if result.iter().all(|exe| exe.is_empty()) {
            result = vec!["cc".to_string()];
        }

        result.extend(self.driver_flags.iter().cloned());
        result.extend(options_for_filter(&request.filters, output_file));
        result.extend(request.options.iter().cloned());
        result.push(request.input_file.to_string_lossy().into_owned());
        result
    }
}

/// Stock pipeline: drives the configured base compiler on the request input.
///
/// Remark parsing, assembly post-processing and result caching live in other
/// parts of the host; the collections on the result stay empty here.
pub struct ToolchainPipeline {
    options: ToolchainOptions,
}

impl ToolchainPipeline {
    pub fn new(options: ToolchainOptions) -> Self {
        Self { options }
    }

    /// Object file for an input: same base name, `.o` extension, in the
    /// working directory.
    fn object_file(request: &CompilationRequest) -> PathBuf {
        let with_ext = request.input_file.with_extension("o");
        match with_ext.file_name() {
            Some(name) => request.working_dir.join(name),
            None => request.working_dir.join("out.o"),
        }
    }
}

#[async_trait]
impl CompilerPipeline for ToolchainPipeline {
    async fn compile(&self, request: &CompilationRequest) -> Result<CompilationResult> {
        let output_file = Self::object_file(request);
        let command = self
            .options
            .driver_command(request, &output_file.to_string_lossy());

        let output = exec::run(&command[0], &command[1..], &request.working_dir)
            .await
            .with_context(|| format!("failed to execute compiler driver `{}`", command[0]))?;

        if output.success() {
            if exec::contains_error_line(&output.combined()) {
                warn!(
                    "driver reported diagnostics for {} despite exit 0",
                    request.input_file.display()
                );
            }
            info!(
                "compiled {} -> {}",
                request.input_file.display(),
                output_file.display()
            );
        } else {
            info!(
                "driver failed on {} (exit {:?})",
                request.input_file.display(),
                output.code
            );
        }

        let success = output.success();
        Ok(CompilationResult {
            output: output.into_compilation_output(command),
            remarks: vec![],
            stack_usage: vec![],
            success,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CacheKey;

    fn request() -> CompilationRequest {
        CompilationRequest::new("example.c", "/tmp/work", CacheKey("k".to_string()))
    }

    #[test]
    fn test_options_for_filter_shape() {
        let filters = OutputFilters::default();
        assert_eq!(
            options_for_filter(&filters, "out"),
            vec!["-g", "-c", "-o", "out"]
        );
    }

    #[test]
    fn test_options_for_filter_is_pure() {
        let mut filters = OutputFilters::default();
        let plain = options_for_filter(&filters, "example.o");
        filters.binary = true;
        filters.demangle = true;
        assert_eq!(options_for_filter(&filters, "example.o"), plain);
        assert_eq!(options_for_filter(&filters, "example.o"), plain);
    }

    #[test]
    fn test_driver_command_falls_back_to_path_cc() {
        let options = ToolchainOptions {
            driver_exe: String::new(),
            driver_flags: vec![],
        };
        let command = options.driver_command(&request(), "example.o");
        assert_eq!(command[0], "cc");
        assert_eq!(&command[1..5], &["-g", "-c", "-o", "example.o"][..]);
        assert_eq!(command.last().unwrap(), "example.c");
    }

    #[test]
    fn test_driver_command_keeps_user_options_ordered() {
        let options = ToolchainOptions {
            driver_exe: "/opt/cc".to_string(),
            driver_flags: vec!["-fverbose-asm".to_string()],
        };
        let mut req = request();
        req.options = vec!["-O2".to_string(), "-Wall".to_string()];
        let command = options.driver_command(&req, "example.o");
        assert_eq!(
            command,
            vec![
                "/opt/cc",
                "-fverbose-asm",
                "-g",
                "-c",
                "-o",
                "example.o",
                "-O2",
                "-Wall",
                "example.c"
            ]
        );
    }

    #[test]
    fn test_object_file_uses_working_dir() {
        let req = CompilationRequest::new(
            "/elsewhere/example.c",
            "/tmp/work",
            CacheKey("k".to_string()),
        );
        assert_eq!(
            ToolchainPipeline::object_file(&req),
            PathBuf::from("/tmp/work/example.o")
        );
    }
}
