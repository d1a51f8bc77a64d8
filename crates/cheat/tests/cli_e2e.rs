use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PYTHON: &str = r#"{
    "title": "Python",
    "description": "The Python language",
    "sections": [
        {"id": "basics", "title": "Basics", "examples": [
            {"title": "Intro", "description": "start here", "code": "print(1)"}
        ]},
        {"id": "adv", "title": "Advanced", "examples": [
            {"title": "Deep dive", "description": "complex", "code": "print(2)"}
        ]}
    ]
}"#;

const DJANGO: &str = r#"{
    "title": "Django",
    "sections": [
        {"id": "models", "title": "Models", "examples": [
            {"title": "Fields", "code": "models.CharField()"}
        ]}
    ]
}"#;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let catalogs = dir.path().join("data").join("catalogs");
        fs::create_dir_all(&catalogs).unwrap();
        fs::write(catalogs.join("python.json"), PYTHON).unwrap();
        fs::write(catalogs.join("django.json"), DJANGO).unwrap();
        Self { dir }
    }

    fn cheat(&self) -> Command {
        let mut cmd = Command::cargo_bin("cheat").unwrap();
        cmd.env_remove("CHEAT_DATA_DIR")
            .arg("--data")
            .arg(self.dir.path().join("data"));
        cmd
    }

    fn bookmarks_file(&self) -> String {
        fs::read_to_string(self.dir.path().join("data").join("bookmarks.json")).unwrap()
    }
}

#[test]
fn test_naked_invocation_lists_catalogs() {
    let env = Env::new();
    env.cheat()
        .assert()
        .success()
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("2 sections, 2 examples"))
        .stdout(predicate::str::contains("Django"));
}

#[test]
fn test_show_filters_sections() {
    let env = Env::new();
    env.cheat()
        .args(["show", "python", "PRINT(1)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basics"))
        .stdout(predicate::str::contains("Advanced").not());

    env.cheat()
        .args(["search", "python", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Basics"))
        .stdout(predicate::str::contains("Advanced"));
}

#[test]
fn test_show_unknown_catalog_fails() {
    let env = Env::new();
    env.cheat()
        .args(["show", "golang"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Catalog not found: golang"));
}

#[test]
fn test_mark_list_and_unmark() {
    let env = Env::new();
    env.cheat()
        .args(["mark", "python", "adv", "Deep", "dive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarked: python / adv / Deep dive"));
    env.cheat()
        .args(["mark", "django", "models", "Fields"])
        .assert()
        .success();

    assert!(env.bookmarks_file().contains("\"exampleTitle\": \"Deep dive\""));

    env.cheat()
        .arg("bookmarks")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Advanced / Deep dive"))
        .stdout(predicate::str::contains("2. Models / Fields"));

    env.cheat().args(["unmark", "1"]).assert().success();
    env.cheat()
        .arg("bookmarks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep dive").not())
        .stdout(predicate::str::contains("1. Models / Fields"));
}

#[test]
fn test_mark_is_idempotent() {
    let env = Env::new();
    env.cheat()
        .args(["mark", "python", "basics", "Intro"])
        .assert()
        .success();
    env.cheat()
        .args(["mark", "python", "basics", "Intro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already bookmarked"));

    let value: serde_json::Value = serde_json::from_str(&env.bookmarks_file()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn test_mark_unknown_example_fails() {
    let env = Env::new();
    env.cheat()
        .args(["mark", "python", "basics", "Outro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Example not found"));
}

#[test]
fn test_clear_requires_confirmation() {
    let env = Env::new();
    env.cheat()
        .args(["mark", "python", "basics", "Intro"])
        .assert()
        .success();

    env.cheat()
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("python / basics / Intro"))
        .stdout(predicate::str::contains("--yes"));
    assert!(env.bookmarks_file().contains("Intro"));

    env.cheat()
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 bookmark."));
    let value: serde_json::Value = serde_json::from_str(&env.bookmarks_file()).unwrap();
    assert!(value.as_array().unwrap().is_empty());
}

#[test]
fn test_json_output() {
    let env = Env::new();
    env.cheat()
        .args(["mark", "python", "basics", "Intro"])
        .assert()
        .success();

    let output = env
        .cheat()
        .args(["bookmarks", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let group = &value["bookmark_groups"][0];
    assert_eq!(group["catalog_id"], "python");
    assert_eq!(group["entries"][0]["index"], 1);
    assert_eq!(group["entries"][0]["bookmark"]["sectionId"], "basics");
}

#[test]
fn test_doctor_fix_removes_dangling() {
    let env = Env::new();
    env.cheat()
        .args(["mark", "python", "basics", "Intro"])
        .assert()
        .success();
    fs::remove_file(env.dir.path().join("data").join("catalogs").join("python.json")).unwrap();

    env.cheat()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing example: python / basics / Intro"));
    env.cheat().args(["doctor", "--fix"]).assert().success();
    env.cheat()
        .arg("bookmarks")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks yet."));
}

#[test]
fn test_config_round_trip() {
    let env = Env::new();
    env.cheat()
        .args(["config", "show-code", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show-code set to false"));
    env.cheat()
        .args(["show", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("print(1)").not());
}

#[test]
fn test_corrupt_bookmarks_start_empty() {
    let env = Env::new();
    fs::write(env.dir.path().join("data").join("bookmarks.json"), "garbage").unwrap();
    env.cheat()
        .arg("bookmarks")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks yet."));
}
