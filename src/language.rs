//! Buffer language selection
//!
//! Maps a script buffer to the line classifier the outline extractor should
//! apply. The language is an explicit tag chosen at the call site, normally
//! from the file extension, so parsing behavior never depends on editor or
//! host state.

use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

/// The scripting language of a source buffer.
///
/// This is a closed set: every supported buffer type maps to exactly one
/// classifier, and the extractor cannot be handed anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Procedural scripts using `proc` / `global proc` declarations
    Mel,
    /// Block-structured scripts using indented `def` / `class` declarations
    Python,
}

impl Language {
    /// Detect the language from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mel" => Some(Language::Mel),
            "py" | "pyw" => Some(Language::Python),
            _ => None,
        }
    }

    /// Detect the language from a file path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Human-readable name for logs and report headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Mel => "MEL",
            Language::Python => "Python",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    /// Parse a command-line language override. Accepts the language name or
    /// its canonical file extension.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mel" => Ok(Language::Mel),
            "python" | "py" => Ok(Language::Python),
            other => Err(format!(
                "unknown language '{}' (expected 'mel' or 'python')",
                other
            )),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
