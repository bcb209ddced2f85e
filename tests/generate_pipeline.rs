//! End-to-end runs against temporary site directories

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use portfolio_gen::{generate, GenerateError, GeneratorConfig};

const CV: &str = r#"{
    "name": "Ada Lovelace",
    "about me": "Wrote the first program.",
    "contact": {
        "email": "ada@example.com",
        "github": "ada"
    },
    "experiences": [
        { "title": "Analyst", "location": "London", "description": "Notes on the engine.", "date from": "1842", "date until": "1843" },
        { "title": "Correspondent", "description": "Letters.", "date from": "1833" }
    ],
    "other": [
        { "title": "Note G", "description": "An algorithm.", "date": "1843" }
    ]
}"#;

const CSS: &str = "nav[open] { position: sticky; }\n";

fn site(cv: Option<&str>, css: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(cv) = cv {
        fs::write(dir.path().join("cv.json"), cv).unwrap();
    }
    if let Some(css) = css {
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css").join("styles.css"), css).unwrap();
    }
    dir
}

fn config(root: &Path) -> GeneratorConfig {
    GeneratorConfig::default().rooted_at(root)
}

#[test]
fn test_full_run() {
    let dir = site(Some(CV), Some(CSS));
    let generated = generate(&config(dir.path())).unwrap();
    assert!(!generated.stylesheet_missing);

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<title>Ada Lovelace | Portfolio</title>"));
    assert!(html.contains(CSS));
    assert!(html.contains(r#"<span class="info">London</span>"#));
    assert!(html.contains(r#"<span class="info">Remote</span>"#));
    assert!(html.contains(r#"<span class="info">1842 - 1843</span>"#));
    assert!(html.contains(r#"<span class="info">1833 - Present</span>"#));
    assert!(html.contains(r#"<span class="info">1843</span>"#));
}

#[test]
fn test_missing_data_writes_nothing() {
    let dir = site(None, Some(CSS));
    let err = generate(&config(dir.path())).unwrap_err();
    assert!(matches!(err, GenerateError::MissingInput { .. }));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_missing_stylesheet_still_generates() {
    let dir = site(Some(CV), None);
    let generated = generate(&config(dir.path())).unwrap();
    assert!(generated.stylesheet_missing);

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.contains("<style></style>"));
}

#[test]
fn test_malformed_json_writes_nothing() {
    let dir = site(Some("{ \"name\": \"Ada\", "), Some(CSS));
    let err = generate(&config(dir.path())).unwrap_err();
    assert!(matches!(err, GenerateError::MalformedData { .. }));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_missing_required_key_is_malformed() {
    let cv = r#"{ "name": "Ada", "about": "x", "contact": {}, "experiences": [] }"#;
    let dir = site(Some(cv), Some(CSS));
    let err = generate(&config(dir.path())).unwrap_err();
    match err {
        GenerateError::MalformedData { source, .. } => {
            assert!(source.to_string().contains("other"));
        }
        other => panic!("expected malformed data, got {:?}", other),
    }
}

#[test]
fn test_blank_name_is_rejected() {
    let cv = r#"{ "name": "", "about": "x", "contact": {}, "experiences": [], "other": [] }"#;
    let dir = site(Some(cv), Some(CSS));
    let err = generate(&config(dir.path())).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidField { ref field, .. } if field == "name"));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_unwritable_output_is_write_error() {
    let dir = site(Some(CV), Some(CSS));
    let config = config(dir.path()).with_output_path(dir.path().join("no-such-dir/index.html"));
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = site(Some(CV), Some(CSS));
    fs::write(dir.path().join("index.html"), "stale").unwrap();
    generate(&config(dir.path())).unwrap();
    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_two_runs_are_byte_identical() {
    let dir = site(Some(CV), Some(CSS));
    generate(&config(dir.path())).unwrap();
    let first = fs::read(dir.path().join("index.html")).unwrap();
    generate(&config(dir.path())).unwrap();
    let second = fs::read(dir.path().join("index.html")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cli_default_paths() {
    let dir = site(Some(CV), Some(CSS));
    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success! Generated static portfolio at: index.html",
        ));
    assert!(dir.path().join("index.html").exists());
}

#[test]
fn test_cli_missing_data_fails() {
    let dir = site(None, None);
    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cv.json not found"));
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_cli_missing_stylesheet_warns() {
    let dir = site(Some(CV), None);
    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("might look unstyled"));
    assert!(dir.path().join("index.html").exists());
}

#[test]
fn test_cli_missing_stylesheet_warns_with_logging_off() {
    let dir = site(Some(CV), None);
    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: css/styles.css not found. The output might look unstyled.",
        ));
}

#[test]
fn test_cli_present_stylesheet_no_warning() {
    let dir = site(Some(CV), Some(CSS));
    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unstyled").not());
}

#[test]
fn test_cli_config_file_and_flags() {
    let dir = site(Some(CV), Some(CSS));
    fs::create_dir(dir.path().join("public")).unwrap();
    fs::write(
        dir.path().join("portfolio.toml"),
        "output_path = \"public/index.html\"\n\n[html]\ntitle_suffix = \" - CV\"\n",
    )
    .unwrap();

    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success();
    let html = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
    assert!(html.contains("<title>Ada Lovelace - CV</title>"));

    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .args(["--output", "other.html"])
        .assert()
        .success();
    assert!(dir.path().join("other.html").exists());
}

#[test]
fn test_cli_malformed_data_report() {
    let dir = site(Some("{\n  \"name\": ,\n}"), None);
    Command::cargo_bin("portfolio-gen")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed data"));
}
