//! Outline extraction driver
//!
//! Drives a language's line classifier over the full buffer text and
//! assembles the resulting entries. One synchronous linear pass per call:
//! every line is visited exactly once, in order, and the only state carried
//! between lines is the block variant's current-owning-class accumulator,
//! which is local to the call and reset on every invocation.
//!
//! Extraction is a pure function of the input text. Given identical text it
//! produces identical output, never mutates anything, and never fails; lines
//! that do not classify cleanly simply contribute no entry, which is what an
//! outline view wants while the user is mid-edit.

use log::debug;

use super::{mel, python, Outline, OutlineEntry, OutlineKind};
use crate::language::Language;

/// Extract the outline of `text` using the classifier for `language`.
///
/// Line numbers in the result are 1-based positions in `text`. Top-level
/// entries and each class's children come out in ascending line order by
/// construction.
pub fn extract_outline(text: &str, language: Language) -> Outline {
    let outline = match language {
        Language::Mel => extract_mel(text),
        Language::Python => extract_python(text),
    };
    debug!(
        "Extracted {} declarations from {} buffer",
        outline.declaration_count(),
        language.display_name()
    );
    outline
}

/// Flat scan for MEL: every declaration is top-level.
fn extract_mel(text: &str) -> Outline {
    let mut entries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(decl) = mel::classify_line(line) {
            entries.push(OutlineEntry::new(decl.kind, decl.name, idx + 1));
        }
    }
    Outline { entries }
}

/// Indentation-aware scan for Python.
///
/// `open_class` tracks the most recent class entry and its indentation
/// threshold. A def indented deeper than the threshold becomes that class's
/// method; a def at or above the threshold closes the scope and is a
/// top-level function. A class line always opens a fresh scope of its own,
/// so nesting in the output is exactly one level deep.
fn extract_python(text: &str) -> Outline {
    let classifier = python::BlockClassifier::new();
    let mut entries: Vec<OutlineEntry> = Vec::new();
    // (index of the open class in entries, its indentation)
    let mut open_class: Option<(usize, usize)> = None;

    for (idx, line) in text.lines().enumerate() {
        let decl = match classifier.classify_line(line) {
            Some(decl) => decl,
            None => continue,
        };
        let line_no = idx + 1;

        match decl.kind {
            python::BlockKind::Class => {
                entries.push(OutlineEntry::new(OutlineKind::Class, decl.name, line_no));
                open_class = Some((entries.len() - 1, decl.indent));
            }
            python::BlockKind::Def => match open_class {
                Some((class_idx, class_indent)) if decl.indent > class_indent => {
                    entries[class_idx]
                        .children
                        .push(OutlineEntry::new(OutlineKind::Method, decl.name, line_no));
                }
                _ => {
                    // Dedent to or past the class line closes its scope
                    open_class = None;
                    entries.push(OutlineEntry::new(OutlineKind::Function, decl.name, line_no));
                }
            },
        }
    }
    Outline { entries }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
