//! End-to-end lint runs against templates and assets on disk.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tagcheck::config::resolve_effective;
use tagcheck::lint::run_lint;
use tagcheck::models::{CheckId, Status};
use tagcheck::output::{compose_report_json, render_human, FAIL_BANNER, PASS_BANNER};
use tempfile::tempdir;

const PAGE: &str = r#"{% load static %}<link rel="stylesheet" href="{% static 'css/a.css' %}">"#;

fn write(root: &Path, rel: &str, body: &str) {
    let p = root.join(rel);
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(p, body).unwrap();
}

#[test]
fn test_existing_asset_passes() {
    let dir = tempdir().unwrap();
    write(dir.path(), "index.html", PAGE);
    write(dir.path(), "assets/css/a.css", "body {}");

    let report = run_lint(dir.path(), "index.html", "assets").unwrap();
    assert!(report.passed());
    let summary: Vec<(CheckId, Status, &str)> = report
        .results
        .iter()
        .map(|r| (r.check, r.status, r.message.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                CheckId::LoadStatic,
                Status::Info,
                "'{% load static %}' tag is included in index.html."
            ),
            (
                CheckId::LoadOrder,
                Status::Info,
                "'{% load static %}' tag is included before loading static css and js files."
            ),
            (
                CheckId::AssetExists,
                Status::Info,
                "File 'css/a.css' exists in './assets/' folder."
            ),
        ]
    );
    assert_eq!(render_human(&report, false).last().unwrap(), PASS_BANNER);
}

#[test]
fn test_missing_asset_fails_with_single_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "index.html", PAGE);

    let report = run_lint(dir.path(), "index.html", "assets").unwrap();
    assert!(!report.passed());
    let errors: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.status == Status::Error)
        .map(|r| r.message.as_str())
        .collect();
    assert_eq!(
        errors,
        vec!["File 'css/a.css' does not exist in './assets/' folder."]
    );
    assert_eq!(report.summary.infos, 2);
    assert_eq!(render_human(&report, false).last().unwrap(), FAIL_BANNER);
    assert_eq!(compose_report_json(&report)["passed"], false);
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "index.html",
        r#"{% load static %}
<!DOCTYPE html>
<html>
<head>
  <link rel="stylesheet" href="{% static 'css/a.css' %}">
  <link rel="stylesheet" href="https://cdn.example.com/b.css">
  <script src="https://cdn.example.com/x.js"></script>
  <script src="{% static 'js/app.js' %}"></script>
</head>
<body></body>
</html>"#,
    );
    write(dir.path(), "assets/js/app.js", "");

    let first = run_lint(dir.path(), "index.html", "assets").unwrap();
    let second = run_lint(dir.path(), "index.html", "assets").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.summary.assets, 2);
    assert_eq!(first.summary.errors, 2);
}

#[test]
fn test_config_file_points_at_template_and_assets() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "tagcheck.toml",
        "template = \"templates/base.html\"\nassets = \"static\"\n",
    );
    write(dir.path(), "templates/base.html", PAGE);
    write(dir.path(), "static/css/a.css", "");

    let eff = resolve_effective(dir.path().to_str(), None, None, None);
    let report = run_lint(&eff.root, &eff.template, &eff.assets).unwrap();
    assert!(report.passed());
    assert_eq!(report.template, "templates/base.html");
    assert!(report
        .results
        .iter()
        .any(|r| r.message == "File 'css/a.css' exists in './static/' folder."));
}
