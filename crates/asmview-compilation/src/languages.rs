// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Editor language registry.
//!
//! Language definitions are static token-classification tables consumed by
//! the editor widget. Registration is an explicit startup step performed by
//! the host, not a load-time side effect of the defining module.

use log::{debug, warn};
use std::collections::BTreeMap;

/// Comment delimiters for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentConfig {
    pub line: &'static str,
    pub block: (&'static str, &'static str),
    /// Whether block comments nest.
    pub block_nests: bool,
}

/// An auto-closing pair, with the token classes it is suppressed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoClosingPair {
    pub open: &'static str,
    pub close: &'static str,
    pub not_in: &'static [&'static str],
}

/// Token-classification table for one editor language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDefinition {
    pub id: &'static str,
    /// File extensions routed to this language, with the leading dot.
    pub extensions: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub type_keywords: &'static [&'static str],
    pub operators: &'static [&'static str],
    /// Regex matching operator/symbol glyph runs.
    pub symbols_pattern: &'static str,
    /// Regex matching escape sequences inside string and char literals.
    pub escapes_pattern: &'static str,
    pub comments: CommentConfig,
    pub brackets: &'static [(&'static str, &'static str)],
    pub auto_closing_pairs: &'static [AutoClosingPair],
    pub surrounding_pairs: &'static [(&'static str, &'static str)],
}

/// The set of editor languages known to the host, owned by its startup
/// sequence and registered exactly once.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<&'static str, LanguageDefinition>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a language. A later registration for the same id wins.
    pub fn register(&mut self, definition: LanguageDefinition) {
        let id = definition.id;
        if self.languages.insert(id, definition).is_some() {
            warn!("editor language {} registered twice, replacing", id);
        } else {
            debug!("registered editor language {}", id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&LanguageDefinition> {
        self.languages.get(id)
    }

    /// Registered ids, in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
