// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Two-stage adapter: lower Lean 4 to C, then delegate to the generic
//! pipeline with the intermediate file substituted for the original input.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use itertools::Itertools;
use log::{debug, info};

use asmview_compilation::exec;
use asmview_compilation::pipeline::CompilerPipeline;
use asmview_compilation::request::CompilationRequest;
use asmview_compilation::result::{CompilationOutput, CompilationResult};

use crate::options::Lean4Options;

/// Intermediate file produced by the converter: same base name as the input,
/// `.c` extension, joined onto the working directory.
pub fn intermediate_path(input: &Path, working_dir: &Path) -> PathBuf {
    working_dir.join(input.with_extension("c"))
}

/// Lean 4 compiler backend.
///
/// Wraps the pipeline it delegates to; it overrides only the lowering step
/// and inherits everything else by pass-through.
pub struct Lean4Compiler {
    options: Lean4Options,
    pipeline: Arc<dyn CompilerPipeline>,
}

impl Lean4Compiler {
    pub fn new(options: Lean4Options, pipeline: Arc<dyn CompilerPipeline>) -> Self {
        Self { options, pipeline }
    }
}

#[async_trait]
impl CompilerPipeline for Lean4Compiler {
    /// Runs the converter and, when it succeeds, the wrapped pipeline.
    ///
    /// The lowering succeeds only when leanc exits 0 AND the intermediate
    /// file exists; a zero exit without the file is indistinguishable from a
    /// crashed-but-caught converter and is treated as failure. Converter
    /// failure is a value, not an error: the captured output is surfaced on
    /// a failed result and the pipeline is not invoked. The intermediate
    /// file is left in place either way; the working-directory owner
    /// controls its lifetime.
    async fn compile(&self, request: &CompilationRequest) -> Result<CompilationResult> {
        let intermediate = intermediate_path(&request.input_file, &request.working_dir);
        let command = self
            .options
            .converter_command(&intermediate, &request.input_file);
        debug!(
            "lowering {} with: {}",
            request.input_file.display(),
            command.iter().join(" ")
        );

        let conversion = match exec::run(&command[0], &command[1..], &request.working_dir).await {
            Ok(output) => output,
            Err(err) => {
                info!("cannot execute {}: {}", command[0], err);
                return Ok(CompilationResult::failed(CompilationOutput {
                    code: None,
                    stdout: String::new(),
                    stderr: format!("cannot execute {}: {}", command[0], err),
                    command,
                }));
            }
        };

        if !conversion.success() || !intermediate.exists() {
            info!(
                "lean lowering of {} failed (exit {:?})",
                request.input_file.display(),
                conversion.code
            );
            return Ok(CompilationResult::failed(
                conversion.into_compilation_output(command),
            ));
        }

        debug!("lean lowering succeeded: {}", intermediate.display());
        self.pipeline
            .compile(&request.with_input(intermediate))
            .await
    }
}
