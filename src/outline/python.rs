//! Block-structured (Python) line classifier
//!
//! Recognizes `def` and `class` declaration lines and measures their
//! indentation, so the outline builder can attach methods to the class whose
//! body they sit in. Like the MEL classifier this is a per-line heuristic
//! with no grammar behind it; decorated, multi-line, or string-embedded
//! declarations are classified purely by what their first line looks like.

use regex::Regex;

/// What a declaration line introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BlockKind {
    Def,
    Class,
}

/// A recognized declaration on one line, with its indentation depth.
pub(super) struct BlockDecl {
    pub kind: BlockKind,
    pub name: String,
    /// Leading whitespace characters before the keyword
    pub indent: usize,
}

/// Line classifier with its declaration patterns compiled once per scan.
pub(super) struct BlockClassifier {
    def_re: Regex,
    class_re: Regex,
}

impl BlockClassifier {
    pub(super) fn new() -> Self {
        // A def must open a parameter list; a class name may be followed by
        // a base-class list, a colon, or nothing at all on an in-progress
        // line. Hard-coded patterns, compilation cannot fail at runtime.
        Self {
            def_re: Regex::new(r"^def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(")
                .expect("def pattern should always compile"),
            class_re: Regex::new(r"^class\s+([A-Za-z_][A-Za-z0-9_]*)")
                .expect("class pattern should always compile"),
        }
    }

    /// Classify one source line, returning its declaration if it has one.
    pub(super) fn classify_line(&self, line: &str) -> Option<BlockDecl> {
        let trimmed = line.trim_start();
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();

        if let Some(caps) = self.def_re.captures(trimmed) {
            return Some(BlockDecl {
                kind: BlockKind::Def,
                name: caps[1].to_string(),
                indent,
            });
        }
        if let Some(caps) = self.class_re.captures(trimmed) {
            return Some(BlockDecl {
                kind: BlockKind::Class,
                name: caps[1].to_string(),
                indent,
            });
        }
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
