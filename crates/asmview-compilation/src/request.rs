//! Request-scoped compilation inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Opaque identity of one compilation attempt, assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheKey(pub String);

/// Which output forms a request wants, plus presentation filters applied
/// downstream. Plain data; backends receive it structurally and pass it on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFilters {
    /// Emit the assembly listing.
    pub asm: bool,
    /// Emit intermediate representations alongside the assembly.
    pub intermediate: bool,
    /// Collect optimization remarks.
    pub opt_remarks: bool,
    /// Collect per-function stack usage.
    pub stack_usage: bool,
    /// Strip assembler directives from the listing.
    pub directives: bool,
    /// Strip comment-only lines.
    pub comment_only: bool,
    /// Strip unused labels.
    pub labels: bool,
    /// Demangle symbol names.
    pub demangle: bool,
    /// Disassemble the produced object file instead of the textual listing.
    pub binary: bool,
}

/// One selected library, by id and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySelection {
    pub id: String,
    pub version: String,
}

/// One post-compilation tool to run over the produced artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    pub id: String,
    pub args: Vec<String>,
}

/// A single compilation attempt.
///
/// Immutable for the duration of the attempt. Backends that rewrite the input
/// (e.g. transpiling adapters) derive a new request via [`with_input`] rather
/// than mutating this one.
///
/// [`with_input`]: CompilationRequest::with_input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationRequest {
    /// The source file to compile.
    pub input_file: PathBuf,
    /// Scratch directory owned by the host; intermediate artifacts land here.
    pub working_dir: PathBuf,
    pub key: CacheKey,
    /// Raw user-supplied compiler option strings.
    pub options: Vec<String>,
    pub filters: OutputFilters,
    /// Backend-specific options, opaque at this layer.
    pub backend_options: BTreeMap<String, String>,
    pub libraries: Vec<LibrarySelection>,
    pub tools: Vec<ToolInvocation>,
}

impl CompilationRequest {
    pub fn new(
        input_file: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
        key: CacheKey,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            working_dir: working_dir.into(),
            key,
            options: vec![],
            filters: OutputFilters::default(),
            backend_options: BTreeMap::new(),
            libraries: vec![],
            tools: vec![],
        }
    }

    /// The same request with only the input file replaced.
    pub fn with_input(&self, input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            ..self.clone()
        }
    }
}
