//! Source outline model
//!
//! This module provides the declaration model and extraction entry point for
//! the outline sidebar: given the full text of a script buffer, produce the
//! ordered list of named, line-numbered declarations (procedures, functions,
//! classes, methods) a navigation tree can display. Methods are nested one
//! level under their owning class; everything else is top-level.
//!
//! An outline is rebuilt from scratch on every extraction. There is no
//! incremental update and no stable entry identity across edits, so callers
//! replace the previous outline wholesale.

mod extract;
mod mel;
mod python;

pub use extract::extract_outline;

use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// OutlineKind
// ─────────────────────────────────────────────────────────────────────────────

/// The kind of declaration an outline entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineKind {
    /// MEL procedure (`proc`)
    Procedure,
    /// MEL global procedure (`global proc`)
    GlobalProcedure,
    /// Python top-level function (`def` outside any class body)
    Function,
    /// Python method (`def` nested inside a class body)
    Method,
    /// Python class (`class`)
    Class,
}

impl OutlineKind {
    /// Short label for rendering in tree rows and text output.
    pub fn label(&self) -> &'static str {
        match self {
            OutlineKind::Procedure => "proc",
            OutlineKind::GlobalProcedure => "global proc",
            OutlineKind::Function => "def",
            OutlineKind::Method => "def",
            OutlineKind::Class => "class",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OutlineEntry
// ─────────────────────────────────────────────────────────────────────────────

/// A single named declaration found in a source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// What was declared
    pub kind: OutlineKind,
    /// Identifier extracted from the declaration line
    pub name: String,
    /// 1-based source line where the declaration starts
    pub line: usize,
    /// Nested declarations; only `Class` entries carry children (their
    /// methods, in source order)
    pub children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    /// Create a new entry with no children.
    pub fn new(kind: OutlineKind, name: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            line,
            children: Vec::new(),
        }
    }

    /// Whether this entry can be expanded/collapsed in a tree view.
    #[allow(dead_code)]
    pub fn is_collapsible(&self) -> bool {
        !self.children.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Outline
// ─────────────────────────────────────────────────────────────────────────────

/// A complete outline for one buffer.
///
/// Top-level entries appear in ascending line order, as do the children of
/// each class. The outline is a pure snapshot of the buffer text it was
/// extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Outline {
    /// Top-level entries in source order
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    /// Check if the outline has no declarations at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of declarations, including nested methods.
    pub fn declaration_count(&self) -> usize {
        self.entries.iter().map(|e| 1 + e.children.len()).sum()
    }

    /// Find the declaration the given 1-based line falls inside.
    ///
    /// Returns the last entry (top-level or method) declared at or before
    /// the line, or None if the line precedes every declaration. Hosts use
    /// this to highlight the cursor's current section in the sidebar.
    #[allow(dead_code)]
    pub fn find_enclosing(&self, line: usize) -> Option<&OutlineEntry> {
        let mut result = None;
        for entry in &self.entries {
            if entry.line > line {
                break;
            }
            result = Some(entry);
            for child in &entry.children {
                if child.line > line {
                    break;
                }
                result = Some(child);
            }
        }
        result
    }

    /// Get a summary string like "2 procedures, 1 class, 3 methods".
    pub fn summary(&self) -> String {
        let mut procedures = 0;
        let mut globals = 0;
        let mut functions = 0;
        let mut methods = 0;
        let mut classes = 0;

        for entry in self.entries.iter().flat_map(|e| std::iter::once(e).chain(e.children.iter())) {
            match entry.kind {
                OutlineKind::Procedure => procedures += 1,
                OutlineKind::GlobalProcedure => globals += 1,
                OutlineKind::Function => functions += 1,
                OutlineKind::Method => methods += 1,
                OutlineKind::Class => classes += 1,
            }
        }

        let mut parts = Vec::new();
        push_count(&mut parts, procedures, "procedure", "procedures");
        push_count(&mut parts, globals, "global procedure", "global procedures");
        push_count(&mut parts, functions, "function", "functions");
        push_count(&mut parts, classes, "class", "classes");
        push_count(&mut parts, methods, "method", "methods");

        if parts.is_empty() {
            "no declarations".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn push_count(parts: &mut Vec<String>, count: usize, singular: &str, plural: &str) {
    if count == 1 {
        parts.push(format!("1 {}", singular));
    } else if count > 1 {
        parts.push(format!("{} {}", count, plural));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_outline() -> Outline {
        let mut class = OutlineEntry::new(OutlineKind::Class, "Foo", 1);
        class.children.push(OutlineEntry::new(OutlineKind::Method, "bar", 2));
        class.children.push(OutlineEntry::new(OutlineKind::Method, "baz", 5));
        Outline {
            entries: vec![class, OutlineEntry::new(OutlineKind::Function, "main", 9)],
        }
    }

    #[test]
    fn test_empty_outline() {
        let outline = Outline::default();
        assert!(outline.is_empty());
        assert_eq!(outline.declaration_count(), 0);
        assert_eq!(outline.summary(), "no declarations");
    }

    #[test]
    fn test_declaration_count_includes_methods() {
        assert_eq!(sample_outline().declaration_count(), 4);
    }

    #[test]
    fn test_is_collapsible() {
        let outline = sample_outline();
        assert!(outline.entries[0].is_collapsible());
        assert!(!outline.entries[1].is_collapsible());
    }

    #[test]
    fn test_find_enclosing_before_any_declaration() {
        // Line 1 holds the first declaration, so line 0 precedes everything
        assert!(sample_outline().find_enclosing(0).is_none());
    }

    #[test]
    fn test_find_enclosing_on_declaration_lines() {
        let outline = sample_outline();
        assert_eq!(outline.find_enclosing(1).unwrap().name, "Foo");
        assert_eq!(outline.find_enclosing(2).unwrap().name, "bar");
        assert_eq!(outline.find_enclosing(9).unwrap().name, "main");
    }

    #[test]
    fn test_find_enclosing_between_declarations() {
        let outline = sample_outline();
        // Line 3 is inside bar's body
        assert_eq!(outline.find_enclosing(3).unwrap().name, "bar");
        // Line 7 is past the last method but before main
        assert_eq!(outline.find_enclosing(7).unwrap().name, "baz");
        // Way past the end, the last declaration still encloses
        assert_eq!(outline.find_enclosing(1000).unwrap().name, "main");
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(
            sample_outline().summary(),
            "1 function, 1 class, 2 methods"
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(OutlineKind::GlobalProcedure.label(), "global proc");
        assert_eq!(OutlineKind::Class.label(), "class");
        assert_eq!(OutlineKind::Method.label(), "def");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample_outline()).unwrap();
        assert_eq!(json["entries"][0]["kind"], "class");
        assert_eq!(json["entries"][0]["children"][0]["kind"], "method");
        assert_eq!(json["entries"][0]["children"][0]["line"], 2);
        assert_eq!(json["entries"][1]["kind"], "function");
    }
}
