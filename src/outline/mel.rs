//! Procedural-language (MEL) line classifier
//!
//! Classifies a single MEL source line as a procedure declaration or plain
//! text. This is a lexical heuristic, not a parser: it does not track brace
//! or paren nesting, string or comment content, or multi-line signatures.
//! `proc` appearing inside a string literal or comment is indistinguishable
//! from a real declaration and will be misclassified. That trade-off keeps
//! the scan a single cheap pass that degrades gracefully on buffers that are
//! mid-edit and not yet syntactically valid.

use super::OutlineKind;

/// A recognized declaration on one MEL line.
pub(super) struct MelDecl {
    pub kind: OutlineKind,
    pub name: String,
}

/// Classify one source line.
///
/// A line declares a procedure when it contains `proc`; the presence of
/// `global` anywhere on the same line upgrades it to a global procedure.
/// Both are substring tests on the whole line, not token-boundary tests, so
/// identifiers such as `reprocess` or `globalCount` can misfire. Flagged
/// for product-owner review; callers may depend on the current behavior.
pub(super) fn classify_line(line: &str) -> Option<MelDecl> {
    if !line.contains("proc") {
        return None;
    }
    let name = extract_name(line)?;
    let kind = if line.contains("global") {
        OutlineKind::GlobalProcedure
    } else {
        OutlineKind::Procedure
    };
    Some(MelDecl { kind, name })
}

/// Extract the declared name from a procedure line.
///
/// A procedure must open a parameter list, so the name is the first
/// whitespace-separated token containing `(`, truncated at the `(`. Lines
/// with no such token yield None and contribute no entry.
fn extract_name(line: &str) -> Option<String> {
    for token in line.split_whitespace() {
        if let Some(paren) = token.find('(') {
            return Some(token[..paren].to_string());
        }
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
