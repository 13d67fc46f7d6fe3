// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Lean 4 backend: lowers Lean source to C through the `leanc` driver, then
//! hands the intermediate file to the host's generic compilation pipeline.

use asmview_compilation::languages::LanguageRegistry;

pub mod compiler;
pub mod mode;
pub mod options;

pub use compiler::Lean4Compiler;
pub use options::Lean4Options;

/// Backend key; matches the editor language id.
pub const KEY: &str = "lean4";

/// Registers the Lean 4 editor language. Called once from host startup.
pub fn register(registry: &mut LanguageRegistry) {
    registry.register(mode::language_definition());
}
