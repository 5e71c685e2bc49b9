//! End-to-end tests for the nickname binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NAMES: &str = r#"{
  "William": {"nicknames": ["Bill", "Will", "Billy"], "century": [19, 20], "region": ["English"], "subregion": []},
  "Robert": ["Bob", "Rob", "Bobby"],
  "Margaret": {"nicknames": ["Peggy", "Maggie"], "century": [18], "region": ["English", "Scottish"]}
}"#;

const VARIANTS: &str = r#"{"Margaret": ["Margarete"]}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("names.json"), NAMES).unwrap();
        fs::write(dir.path().join("variants.json"), VARIANTS).unwrap();
        Self { dir }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.path().join(file)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("nickname").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--names")
            .arg(self.path("names.json"))
            .arg("--variants")
            .arg(self.path("variants.json"));
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().args(["--format", "json"]).args(args).output().unwrap();
        assert!(output.status.success(), "command failed: {:?}", output);
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_search_exact_nickname() {
    let fx = Fixture::new();
    let results = fx.json(&["search", "Bill"]);

    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "William");
    assert_eq!(results[0]["score"], 100);
    assert_eq!(results[0]["sources"], serde_json::json!(["Exact"]));
    assert_eq!(results[0]["duplicate"], false);
    assert_eq!(results[0]["century"], serde_json::json!([19, 20]));
}

#[test]
fn test_search_text_output() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["search", "peggy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Margaret"))
        .stdout(predicate::str::contains("Exact"));
}

#[test]
fn test_search_suggests_close_names() {
    let fx = Fixture::new();
    let outcome = fx.json(&["search", "Xilliam"]);

    assert_eq!(outcome["matches"], serde_json::json!([]));
    assert_eq!(
        outcome["suggestions"],
        serde_json::json!([{"name": "William", "similarity": 86}])
    );
}

#[test]
fn test_nicknames_through_variant() {
    let fx = Fixture::new();
    let entry = fx.json(&["nicknames", "margarete"]);

    assert_eq!(entry["nicknames"], serde_json::json!(["Maggie", "Peggy"]));
}

#[test]
fn test_nicknames_legacy_entry() {
    let fx = Fixture::new();
    let entry = fx.json(&["nicknames", "Robert"]);

    assert_eq!(entry["name"], "Robert");
    assert_eq!(entry["nicknames"], serde_json::json!(["Bob", "Bobby", "Rob"]));
    assert_eq!(entry["century"], serde_json::json!([]));
}

#[test]
fn test_filter_by_region_ignores_case() {
    let fx = Fixture::new();
    let filtered = fx.json(&["filter", "--region", "scottish"]);

    let names: Vec<&String> = filtered.as_object().unwrap().keys().collect();
    assert_eq!(names, vec!["Margaret"]);
}

#[test]
fn test_filter_by_century() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["filter", "--century", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("William"))
        .stdout(predicate::str::contains("Margaret").not());
}

#[test]
fn test_autocomplete() {
    let fx = Fixture::new();
    let suggestions = fx.json(&["autocomplete", "Robrt"]);
    assert_eq!(suggestions, serde_json::json!(["Robert"]));

    fx.cmd()
        .args(["autocomplete", "Robrt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("83"))
        .stdout(predicate::str::contains("Robert"));
}

#[test]
fn test_soundex() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["soundex", "Tymczak"])
        .assert()
        .success()
        .stdout("T522\n");

    let code = fx.json(&["soundex", "1234"]);
    assert_eq!(code["code"], Value::Null);
}

#[test]
fn test_add_nickname_persists() {
    let fx = Fixture::new();
    fx.cmd().args(["add", "Robert", "Robby"]).assert().success();

    let names = read_json(&fx.path("names.json"));
    assert_eq!(
        names["Robert"]["nicknames"],
        serde_json::json!(["Bob", "Rob", "Bobby", "Robby"])
    );
    // Untouched entries keep their metadata
    assert_eq!(names["Margaret"]["region"], serde_json::json!(["English", "Scottish"]));
}

#[test]
fn test_add_keeps_entry_with_malformed_field() {
    let fx = Fixture::new();
    fs::write(
        fx.path("names.json"),
        r#"{"William": {"nicknames": ["Will", "Bill", null], "century": 20, "region": "English"}}"#,
    )
    .unwrap();

    fx.cmd().args(["add", "Robert", "Bob"]).assert().success();

    let names = read_json(&fx.path("names.json"));
    assert_eq!(names["William"]["nicknames"], serde_json::json!(["Will", "Bill"]));
    assert_eq!(names["William"]["century"], serde_json::json!([20]));
    assert_eq!(names["William"]["region"], serde_json::json!(["English"]));
    assert_eq!(names["Robert"]["nicknames"], serde_json::json!(["Bob"]));
}

#[test]
fn test_add_existing_nickname_is_noop() {
    let fx = Fixture::new();
    let result = fx.json(&["add", "William", "Bill"]);
    assert_eq!(result["added"], false);
}

#[test]
fn test_add_creates_dictionary() {
    let fx = Fixture::new();
    let fresh = fx.path("fresh.json");
    fx.cmd()
        .arg("--names")
        .arg(&fresh)
        .args(["add", "Elizabeth", "Liz"])
        .assert()
        .success();

    let names = read_json(&fresh);
    assert_eq!(names["Elizabeth"]["nicknames"], serde_json::json!(["Liz"]));
    assert_eq!(names["Elizabeth"]["century"], serde_json::json!([20]));
    assert_eq!(names["Elizabeth"]["region"], serde_json::json!(["English"]));
}

#[test]
fn test_add_variant_persists() {
    let fx = Fixture::new();
    fx.cmd().args(["add-variant", "Margaret", "Margret"]).assert().success();

    let variants = read_json(&fx.path("variants.json"));
    assert_eq!(variants["Margaret"], serde_json::json!(["Margarete", "Margret"]));
}

#[test]
fn test_blank_nickname_rejected() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["add", "Robert", "  "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_missing_names_file() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("--names")
        .arg(fx.path("missing.json"))
        .args(["search", "Bill"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("E9001"));
}

#[test]
fn test_missing_variants_file_is_empty() {
    let fx = Fixture::new();
    let entry = fx.json(&["--variants", "nope.json", "nicknames", "William"]);
    assert_eq!(entry["nicknames"], serde_json::json!(["Bill", "Billy", "Will"]));
}

#[test]
fn test_config_thresholds() {
    let fx = Fixture::new();
    fs::write(
        fx.path(".nickname.toml"),
        "[matching]\nsuggest_threshold = 90\n",
    )
    .unwrap();

    let outcome = fx.json(&["search", "Xilliam"]);
    assert_eq!(outcome["suggestions"], serde_json::json!([]));
}

#[test]
fn test_invalid_config_exit_code() {
    let fx = Fixture::new();
    fs::write(fx.path("bad.toml"), "[matching]\nfuzzy_threshold = 150\n").unwrap();

    fx.cmd()
        .args(["--config", "bad.toml", "search", "Bill"])
        .assert()
        .code(3);
}

#[test]
fn test_json_log_format() {
    let fx = Fixture::new();
    fs::write(fx.path(".nickname.toml"), "[logging]\nformat = \"json\"\n").unwrap();

    let output = fx
        .cmd()
        .args(["--verbose", "--format", "json", "search", "Bill"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"level\":\"DEBUG\""));
    let results: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["name"], "William");
}
