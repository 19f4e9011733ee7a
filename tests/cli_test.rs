//! Process-level tests for the stdout/stderr/exit-code contract.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn monitor(server: &MockServer, temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("koica_monitor"));
    cmd.current_dir(temp.path())
        .env("LISTING_URL", server.url("/list"))
        .env("DETAIL_URL_TEMPLATE", server.url("/detail?sn={id}"))
        .env("REQUEST_TIMEOUT_SECS", "5")
        .env_remove("SEEN_PATH")
        .env_remove("REPORT_PATH")
        .env_remove("KEYWORDS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_found_1_and_writes_issue_body() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200)
            .body("<a href=\"?empmnPblancSn=5\"></a><a href=\"?empmnPblancSn=3\"></a><a href=\"?empmnPblancSn=9\"></a>");
    });
    server.mock(|when, then| {
        when.method(GET).path("/detail").query_param("sn", "9");
        then.status(200).body("<h1>직업훈련원 교사 모집</h1>");
    });
    for sn in ["5", "3"] {
        server.mock(|when, then| {
            when.method(GET).path("/detail").query_param("sn", sn);
            then.status(200).body("<h1>안내</h1>");
        });
    }

    monitor(&server, &temp)
        .assert()
        .success()
        .stdout(predicate::str::diff("FOUND=1\n"));

    let seen: Vec<String> =
        serde_json::from_str(&fs::read_to_string(temp.path().join("seen.json")).unwrap()).unwrap();
    assert_eq!(seen, vec!["3", "5", "9"]);

    let report = fs::read_to_string(temp.path().join("issue_body.md")).unwrap();
    assert!(report.starts_with("KOICA 채용 공고에서 키워드 매칭된 새 항목이 발견됨\n"));
    assert!(report.contains(&format!("- {}", server.url("/detail?sn=9"))));
    assert!(!report.contains("sn=5"));
}

#[test]
fn prints_found_0_when_nothing_new() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200).body("<a href=\"?empmnPblancSn=1\"></a>");
    });
    fs::write(temp.path().join("seen.json"), "[\"1\"]").unwrap();

    monitor(&server, &temp)
        .assert()
        .success()
        .stdout(predicate::str::diff("FOUND=0\n"));

    assert!(!temp.path().join("issue_body.md").exists());
}

#[test]
fn listing_failure_exits_nonzero_with_error_line() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(502);
    });
    fs::write(temp.path().join("seen.json"), "[\"1\"]").unwrap();

    monitor(&server, &temp)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR:").and(predicate::str::contains("502")));

    assert_eq!(
        fs::read_to_string(temp.path().join("seen.json")).unwrap(),
        "[\"1\"]"
    );
}

#[test]
fn bad_configuration_is_fatal() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::start();

    monitor(&server, &temp)
        .env("MAX_CANDIDATES", "many")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ERROR:").and(predicate::str::contains("MAX_CANDIDATES")));
}

#[test]
fn reads_settings_from_dotenv_file() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/list");
        then.status(200).body("<a href=\"?empmnPblancSn=7\"></a>");
    });
    server.mock(|when, then| {
        when.method(GET).path("/detail");
        then.status(200).body("Rust Engineer");
    });
    fs::write(
        temp.path().join(".env"),
        "KEYWORDS=rust\nSEEN_PATH=state/seen.json\nREPORT_PATH=out/issue.md\n",
    )
    .unwrap();

    monitor(&server, &temp)
        .assert()
        .success()
        .stdout(predicate::str::diff("FOUND=1\n"));

    assert!(temp.path().join("state").join("seen.json").exists());
    assert!(temp.path().join("out").join("issue.md").exists());
}
