//! Static editor syntax definition for Lean 4.
//!
//! Pure data for the editor widget's tokenizer; no logic beyond what the
//! widget's standard lexer already does with comment/string region nesting.

use asmview_compilation::languages::{
    AutoClosingPair, CommentConfig, LanguageDefinition,
};

const KEYWORDS: &[&str] = &[
    "attribute",
    "global",
    "local",
    "scoped",
    "partial",
    "unsafe",
    "private",
    "protected",
    "noncomputable",
    "sorry",
    "admit",
    "stop",
    "print",
    "eval",
    "reduce",
    "check",
    "deriving",
    "instance",
    "inductive",
    "coinductive",
    "structure",
    "theorem",
    "axiom",
    "abbrev",
    "lemma",
    "def",
    "class",
    "constant",
    "show",
    "have",
    "from",
    "suffices",
    "nomatch",
    "match",
    "with",
    "for",
    "in",
    "unless",
    "try",
    "catch",
    "finally",
    "return",
    "continue",
    "break",
    "true",
    "false",
];

const TYPE_KEYWORDS: &[&str] = &[
    "Prop",
    "Type",
    "Sort",
    "Type*",
    "Int",
    "Nat",
    "String",
    "Char",
    "Bool",
    "Unit",
    "List",
    "Array",
    "Option",
    "Sum",
    "Prod",
    "IO",
    "Except",
    "Monad",
    "Int32",
    "Int64",
    "UInt32",
    "UInt64",
    "Float32",
    "Float64",
];

const OPERATORS: &[&str] = &[
    "=>", "->", "<-", ":=", ":", "=", "∀", "→", "λ", "∃", "\\", "|", ";",
];

const SYMBOLS_PATTERN: &str = r"[=><!~?:&|+\-*/\^%λ→∀∃]+";

const ESCAPES_PATTERN: &str = r#"\\(?:[ntr"\\'xu][0-9A-Fa-f]*)"#;

/// Token-classification table for the editor widget.
pub fn language_definition() -> LanguageDefinition {
    LanguageDefinition {
        id: crate::KEY,
        extensions: &[".lean"],
        keywords: KEYWORDS,
        type_keywords: TYPE_KEYWORDS,
        operators: OPERATORS,
        symbols_pattern: SYMBOLS_PATTERN,
        escapes_pattern: ESCAPES_PATTERN,
        comments: CommentConfig {
            line: "--",
            block: ("/-", "-/"),
            block_nests: true,
        },
        brackets: &[("{", "}"), ("[", "]"), ("(", ")")],
        auto_closing_pairs: &[
            AutoClosingPair {
                open: "[",
                close: "]",
                not_in: &[],
            },
            AutoClosingPair {
                open: "{",
                close: "}",
                not_in: &[],
            },
            AutoClosingPair {
                open: "(",
                close: ")",
                not_in: &[],
            },
            AutoClosingPair {
                open: "\"",
                close: "\"",
                not_in: &["string"],
            },
            AutoClosingPair {
                open: "'",
                close: "'",
                not_in: &["string", "comment"],
            },
        ],
        surrounding_pairs: &[
            ("{", "}"),
            ("[", "]"),
            ("(", ")"),
            ("\"", "\""),
            ("'", "'"),
        ],
    }
}
