// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single token participating in ordering rules: a keyword ("public"),
/// an annotation ("@Fully.Qualified.Name"), or a role synthesized by the
/// host adapter ("field", "getter", "constructor", ...).
///
/// `has_args` is true only for annotations written with a parenthesized
/// argument list; it lets templates distinguish `@A` from `@A(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub text: String,
    pub has_args: bool,
    /// 1-based source line of the token.
    pub line: usize,
    /// 0-based source column of the token.
    pub col: usize,
}

impl Modifier {
    pub fn new(text: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            text: text.into(),
            has_args: false,
            line,
            col,
        }
    }

    pub fn with_args(text: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            text: text.into(),
            has_args: true,
            line,
            col,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_args {
            write!(f, "{}()", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// The syntactic kind of a declaration, as classified by the host adapter.
/// Checks use it only to pick a template table entry or to decide member
/// eligibility - never to re-inspect syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    Type,
    Field,
    Constructor,
    Method,
    Param,
}

/// One declaration as produced by the host adapter: its ordered modifier
/// tokens plus the structural facts the checks need. Read-only to the checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub modifiers: Vec<Modifier>,
    /// 1-based line of the declaration start.
    pub line: usize,
    /// 0-based column of the declaration start.
    pub col: usize,
    /// Number of physical lines the declaration spans, body included.
    pub line_span: usize,
    pub is_single_line: bool,
}

impl Declaration {
    /// The declaration's modifier texts as a set, role tokens included.
    /// Extra tokens are fine - template matching is a superset test.
    pub fn modifier_set(&self) -> HashSet<&str> {
        self.modifiers.iter().map(|m| m.text.as_str()).collect()
    }
}

/// One container's worth of declarations: the direct children of a type body
/// or of a compilation unit, in source order. The adapter materializes the
/// sibling sequence up front; checks never walk syntax lazily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// 1-based line of the container's own declaration start.
    pub line: usize,
    /// 1-based line of the body's opening brace, if the container has one.
    pub brace_line: Option<usize>,
    pub declarations: Vec<Declaration>,
}

impl Container {
    pub fn new(line: usize, brace_line: Option<usize>, declarations: Vec<Declaration>) -> Self {
        Self {
            line,
            brace_line,
            declarations,
        }
    }

    /// Whether the container header reads as a single-line predecessor for
    /// the first member. A brace on the header line (or no brace at all)
    /// counts as single-line.
    pub fn header_is_single_line(&self) -> bool {
        self.brace_line.is_none_or(|brace| brace == self.line)
    }
}

/// Read access to the physical source lines of the file being checked.
/// The spacing verifiers walk upward from a declaration to classify
/// blank/comment lines; this is the only thing they need from the source.
pub trait SourceLines {
    /// Returns the 0-based physical line `n`, or `None` past the end.
    fn line(&self, n: usize) -> Option<&str>;
}

/// Plain in-memory `SourceLines`, convenient for hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct SourceBuffer {
    lines: Vec<String>,
}

impl SourceBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }
}

impl SourceLines for SourceBuffer {
    fn line(&self, n: usize) -> Option<&str> {
        self.lines.get(n).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_display_appends_parens_only_with_args() {
        let plain = Modifier::new("@Override", 1, 0);
        let with_args = Modifier::with_args("@SuppressWarnings", 1, 0);

        assert_eq!(plain.to_string(), "@Override");
        assert_eq!(with_args.to_string(), "@SuppressWarnings()");
    }

    #[test]
    fn modifier_set_collects_all_texts() {
        let declaration = Declaration {
            kind: DeclarationKind::Field,
            modifiers: vec![
                Modifier::new("private", 3, 4),
                Modifier::new("static", 3, 12),
                Modifier::new("field", 3, 19),
            ],
            line: 3,
            col: 4,
            line_span: 1,
            is_single_line: true,
        };

        let set = declaration.modifier_set();
        assert!(set.contains("private"));
        assert!(set.contains("static"));
        assert!(set.contains("field"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn header_single_line_follows_brace_placement() {
        let same_line = Container::new(2, Some(2), vec![]);
        let own_line = Container::new(2, Some(3), vec![]);
        let no_brace = Container::new(1, None, vec![]);

        assert!(same_line.header_is_single_line());
        assert!(!own_line.header_is_single_line());
        assert!(no_brace.header_is_single_line());
    }

    #[test]
    fn source_buffer_indexes_lines_from_zero() {
        let buffer = SourceBuffer::new("first\nsecond\n");
        assert_eq!(buffer.line(0), Some("first"));
        assert_eq!(buffer.line(1), Some("second"));
        assert_eq!(buffer.line(2), None);
    }
}
