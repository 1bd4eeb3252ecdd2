//! End-to-end tests for the droidforge binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn minimal_template(dir: &Path) {
    write(
        &dir.join("settings.gradle.kts"),
        "rootProject.name = \"{{PROJECT_NAME}}\"\n",
    );
    write(&dir.join("build.gradle.kts"), "// {{PROJECT_NAME}}\n");
    write(&dir.join("gradle/libs.versions.toml"), "[versions]\nagp = \"8.5.0\"\n");
    write(
        &dir.join("app/build.gradle.kts"),
        "android { namespace = \"{{PACKAGE_NAME}}\" }\n",
    );
    write(
        &dir.join("app/src/main/java/{{PACKAGE_PATH}}/MainActivity.kt"),
        "package {{PACKAGE_NAME}}\n\nclass MainActivity\n",
    );
}

fn droidforge() -> Command {
    Command::cargo_bin("droidforge").unwrap()
}

#[test]
fn new_generates_project() {
    let template = tempfile::tempdir().unwrap();
    let base = tempfile::tempdir().unwrap();
    minimal_template(template.path());

    droidforge()
        .args(["new", "MyApp", "com.acme.myapp"])
        .arg(base.path())
        .arg("--template-dir")
        .arg(template.path())
        .arg("--skip-gradle-check")
        .assert()
        .success();

    let target = base.path().join("MyApp");
    let settings = fs::read_to_string(target.join("settings.gradle.kts")).unwrap();
    assert_eq!(settings, "rootProject.name = \"MyApp\"\n");

    let main = fs::read_to_string(
        target.join("app/src/main/java/com/acme/myapp/MainActivity.kt"),
    )
    .unwrap();
    assert!(main.starts_with("package com.acme.myapp\n"));

    assert!(target.join(".gitignore").is_file());
    assert!(target.join("README.md").is_file());
}

#[test]
fn new_missing_package_argument_fails() {
    let base = tempfile::tempdir().unwrap();

    droidforge()
        .current_dir(base.path())
        .args(["new", "MyApp"])
        .assert()
        .failure()
        .code(1);

    assert!(!base.path().join("MyApp").exists());
}

#[test]
fn new_invalid_package_fails_with_message() {
    let template = tempfile::tempdir().unwrap();
    let base = tempfile::tempdir().unwrap();
    minimal_template(template.path());

    droidforge()
        .args(["new", "MyApp", "NotAPackage"])
        .arg(base.path())
        .arg("--template-dir")
        .arg(template.path())
        .arg("--skip-gradle-check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid package name"));

    assert!(!base.path().join("MyApp").exists());
}

#[test]
fn new_existing_target_fails_and_leaves_contents() {
    let template = tempfile::tempdir().unwrap();
    let base = tempfile::tempdir().unwrap();
    minimal_template(template.path());

    let target = base.path().join("MyApp");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("precious.txt"), "keep me").unwrap();

    droidforge()
        .args(["new", "MyApp", "com.acme.myapp"])
        .arg(base.path())
        .arg("--template-dir")
        .arg(template.path())
        .arg("--skip-gradle-check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(target.join("precious.txt")).unwrap(),
        "keep me"
    );
    assert!(!target.join("settings.gradle.kts").exists());
}

#[test]
fn new_missing_template_dir_fails() {
    let base = tempfile::tempdir().unwrap();

    droidforge()
        .args(["new", "MyApp", "com.acme.myapp"])
        .arg(base.path())
        .args(["--template-dir", "/nonexistent/templates"])
        .arg("--skip-gradle-check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Template directory not found"));
}

#[test]
fn doctor_reports_tools() {
    droidforge()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment Check"));
}

#[test]
fn doctor_json_output() {
    droidforge()
        .args(["doctor", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tool\""));
}
