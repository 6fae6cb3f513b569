//! Whole-run behavior: listing, usage errors and exit codes.

use filesift::actions::{FixedAnswer, SystemTrash};
use filesift::cli::Action;
use filesift::error::{ExitCode, StructuredError};
use filesift::scanner::{ScanError, SortOrder};
use filesift::Options;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn options(directory: &Path, extension: &str, action: Action) -> Options {
    Options {
        directory: directory.to_path_buf(),
        extension: Some(extension.to_string()),
        action,
        confirm: false,
        sort_order: SortOrder::Asc,
        seed: Some(0),
        image_extensions: vec![".png".to_string()],
    }
}

fn run(options: &Options) -> (anyhow::Result<ExitCode>, String) {
    let mut out = Vec::new();
    let result = filesift::execute(options, &SystemTrash, &mut FixedAnswer(true), &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_listing_without_action() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.log"), "b").unwrap();
    fs::write(dir.path().join("a.log"), "a").unwrap();
    fs::write(dir.path().join("c.txt"), "c").unwrap();

    let (result, out) = run(&options(dir.path(), "log", Action::List));

    assert_eq!(result.unwrap(), ExitCode::Success);
    assert_eq!(
        out,
        format!(
            "2 file(s) with extension '.log' in '{}':\na.log\nb.log\n",
            dir.path().display()
        )
    );
    // Listing never touches the files
    assert!(dir.path().join("a.log").exists());
    assert!(dir.path().join("b.log").exists());
}

#[test]
fn test_missing_directory_is_usage_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let (result, out) = run(&options(&missing, "txt", Action::Delete));
    let err = result.unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::UsageError);
    assert!(matches!(
        err.downcast_ref::<ScanError>(),
        Some(ScanError::DirectoryNotFound(_))
    ));
    assert!(out.is_empty());
}

#[test]
fn test_empty_extension_is_usage_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    for extension in ["", "   "] {
        let (result, out) = run(&options(dir.path(), extension, Action::Delete));
        let err = result.unwrap_err();

        assert_eq!(ExitCode::for_error(&err), ExitCode::UsageError);
        assert!(err.to_string().contains("an extension must be specified"));
        assert!(out.is_empty());
    }
    assert!(dir.path().join("a.txt").exists());
}

#[test]
fn test_no_matches_is_usage_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let (result, out) = run(&options(dir.path(), ".pdf", Action::Display));
    let err = result.unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::UsageError);
    assert!(err
        .to_string()
        .contains("no file with extension '.pdf' found"));
    assert!(out.is_empty());
}

#[test]
fn test_image_scan_of_missing_directory_is_usage_error() {
    let dir = tempdir().unwrap();
    let mut opts = options(&dir.path().join("gone"), "", Action::FindImageDuplicates);
    opts.extension = None;

    let (result, _) = run(&opts);
    let err = result.unwrap_err();
    assert_eq!(ExitCode::for_error(&err), ExitCode::UsageError);
}

#[test]
fn test_image_scan_ignores_extension() {
    let dir = tempdir().unwrap();
    let mut opts = options(dir.path(), "", Action::FindImageDuplicates);
    opts.extension = None;

    // An empty directory scans cleanly and prints nothing
    let (result, out) = run(&opts);
    assert_eq!(result.unwrap(), ExitCode::Success);
    assert!(out.is_empty());
}

#[test]
fn test_structured_error_for_usage_error() {
    let dir = tempdir().unwrap();
    let (result, _) = run(&options(&dir.path().join("nope"), "txt", Action::List));
    let err = result.unwrap_err();

    let structured = StructuredError::new(&err, ExitCode::for_error(&err));
    assert_eq!(structured.code, "FS002");
    assert_eq!(structured.exit_code, 2);
    assert!(structured.usage);

    let json = serde_json::to_value(&structured).unwrap();
    assert_eq!(json["code"], "FS002");
    assert!(json["message"].as_str().unwrap().contains("does not exist"));
}

#[test]
fn test_general_error_classification() {
    let err = anyhow::anyhow!("disk on fire");
    assert_eq!(ExitCode::for_error(&err), ExitCode::GeneralError);
}
