//! Command-line runner
//!
//! The standalone surface of the outliner: resolves each input path to a
//! language, extracts its outline, and prints either an indented text tree
//! or a JSON report. Directory arguments are scanned like a project
//! workspace; file arguments are outlined directly.

use clap::Parser;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result, ResultExt};
use crate::language::Language;
use crate::outline::{extract_outline, Outline, OutlineEntry};
use crate::workspace::collect_script_files;

// ─────────────────────────────────────────────────────────────────────────────
// Arguments
// ─────────────────────────────────────────────────────────────────────────────

/// Extract source outlines from MEL and Python script files.
#[derive(Debug, Parser)]
#[command(name = "scout", version, about)]
pub struct Args {
    /// Script files or directories to outline
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Force a classifier instead of detecting one per file extension
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Emit the outlines as JSON instead of a text tree
    #[arg(long)]
    pub json: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Reports
// ─────────────────────────────────────────────────────────────────────────────

/// One scanned file and its extracted outline.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Language,
    pub outline: Outline,
}

// ─────────────────────────────────────────────────────────────────────────────
// Runner
// ─────────────────────────────────────────────────────────────────────────────

/// Run the outliner over the paths given on the command line.
pub fn run(args: &Args) -> Result<()> {
    let reports = collect_reports(args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }
    Ok(())
}

/// Resolve every input path to a set of outlined files.
///
/// Directories are scanned recursively for supported script files, and files
/// inside them that fail to read are skipped with a warning. A path named
/// explicitly must resolve and read, or the whole run fails.
fn collect_reports(args: &Args) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            for file in collect_script_files(path) {
                // The workspace scan only yields recognized extensions
                let language = match args.language.or_else(|| Language::from_path(&file)) {
                    Some(language) => language,
                    None => continue,
                };
                if let Some(report) = outline_file(&file, language)
                    .ok_or_warn(&format!("Failed to outline '{}'", file.display()))
                {
                    reports.push(report);
                }
            }
        } else {
            let language = args
                .language
                .or_else(|| Language::from_path(path))
                .ok_or_else(|| Error::UnsupportedFile { path: path.clone() })?;
            reports.push(outline_file(path, language)?);
        }
    }
    Ok(reports)
}

/// Read one file and extract its outline.
fn outline_file(path: &Path, language: Language) -> Result<FileReport> {
    let text = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Outlining '{}' as {}",
        path.display(),
        language.display_name()
    );
    let outline = extract_outline(&text, language);
    Ok(FileReport {
        path: path.to_path_buf(),
        language,
        outline,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Text output
// ─────────────────────────────────────────────────────────────────────────────

fn print_report(report: &FileReport) {
    println!(
        "{} [{}]: {}",
        report.path.display(),
        report.language.display_name(),
        report.outline.summary()
    );
    for entry in &report.outline.entries {
        print_entry(entry, 1);
    }
}

fn print_entry(entry: &OutlineEntry, depth: usize) {
    println!(
        "{}{:<12} {:<24} line {}",
        "  ".repeat(depth),
        entry.kind.label(),
        entry.name,
        entry.line
    );
    for child in &entry.children {
        print_entry(child, depth + 1);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::OutlineKind;
    use std::fs;

    fn args_for(paths: Vec<PathBuf>) -> Args {
        Args {
            paths,
            language: None,
            json: false,
        }
    }

    #[test]
    fn test_parse_arguments() {
        let args = Args::try_parse_from(["scout", "--json", "-l", "mel", "scripts"]).unwrap();
        assert!(args.json);
        assert_eq!(args.language, Some(Language::Mel));
        assert_eq!(args.paths, vec![PathBuf::from("scripts")]);
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        assert!(Args::try_parse_from(["scout", "-l", "perl", "x.mel"]).is_err());
    }

    #[test]
    fn test_outline_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rig.mel");
        fs::write(&file, "global proc myFunc( string $x ){\n}\n").unwrap();

        let reports = collect_reports(&args_for(vec![file])).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].language, Language::Mel);
        assert_eq!(reports[0].outline.entries.len(), 1);
        assert_eq!(reports[0].outline.entries[0].kind, OutlineKind::GlobalProcedure);
        assert_eq!(reports[0].outline.entries[0].name, "myFunc");
    }

    #[test]
    fn test_outline_directory_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.py"), "def b():\n    pass\n").unwrap();
        fs::write(dir.path().join("a.mel"), "proc a(){}\n").unwrap();
        fs::write(dir.path().join("skip.txt"), "nothing\n").unwrap();

        let reports = collect_reports(&args_for(vec![dir.path().to_path_buf()])).unwrap();
        let names: Vec<_> = reports
            .iter()
            .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.mel", "b.py"]);
        assert_eq!(reports[0].language, Language::Mel);
        assert_eq!(reports[1].language, Language::Python);
    }

    #[test]
    fn test_explicit_unsupported_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "just text\n").unwrap();

        let err = collect_reports(&args_for(vec![file])).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFile { .. }));
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let err = collect_reports(&args_for(vec![PathBuf::from("/no/such/file.mel")]))
            .unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn test_language_override_applies_to_extensionless_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("untitled");
        fs::write(&file, "def scratch():\n    pass\n").unwrap();

        let mut args = args_for(vec![file]);
        args.language = Some(Language::Python);

        let reports = collect_reports(&args).unwrap();
        assert_eq!(reports[0].outline.entries[0].name, "scratch");
        assert_eq!(reports[0].outline.entries[0].kind, OutlineKind::Function);
    }

    #[test]
    fn test_json_report_shape() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tool.py");
        fs::write(&file, "class Foo:\n    def bar(self):\n        pass\n").unwrap();

        let reports = collect_reports(&args_for(vec![file])).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["language"], "python");
        assert_eq!(json[0]["outline"]["entries"][0]["name"], "Foo");
        assert_eq!(
            json[0]["outline"]["entries"][0]["children"][0]["kind"],
            "method"
        );
    }
}
