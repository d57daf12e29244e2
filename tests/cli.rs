mod stapi_stub;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use stapi_stub::{StapiStub, StapiStubConfig};

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("stapi-charts").unwrap();
    cmd.env_remove("STAPI_BASE_URL").env_remove("STAPI_PAGE_SIZE");
    cmd
}

#[test]
fn json_report_contains_both_charts() {
    let stub = StapiStub::spawn(StapiStubConfig::default());

    let output = cmd()
        .args(["--base-url", &stub.base_url, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["seasons"]["maxSeasons"], 3);
    assert_eq!(report["seasons"]["chart"]["type"], "line");
    assert_eq!(
        report["seasons"]["table"][0]["title"],
        "Star Trek"
    );
    assert_eq!(
        report["weapons"]["chart"]["data"]["datasets"][0]["data"],
        serde_json::json!([2, 1, 1, 1])
    );
    assert_eq!(report["weapons"]["aggregate"]["multipleTechnology"], 1);
}

#[test]
fn text_report_lists_series_and_tallies() {
    let stub = StapiStub::spawn(StapiStubConfig::default());

    cmd()
        .args(["--base-url", &stub.base_url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Star Trek: The Next Generation"))
        .stdout(predicate::str::contains("Weapons (5 total)"));
}

#[test]
fn failed_weapon_page_exits_nonzero_but_still_reports_seasons() {
    let stub = StapiStub::spawn(StapiStubConfig {
        failing_weapon_page: Some(1),
        ..StapiStubConfig::default()
    });

    cmd()
        .args(["--base-url", &stub.base_url])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Episodes per season"))
        .stdout(predicate::str::contains("weapons unavailable"));
}

#[test]
fn rust_log_debug_emits_parsed_cli_to_stderr() {
    let stub = StapiStub::spawn(StapiStubConfig::default());

    cmd()
        .env("RUST_LOG", "debug")
        .args(["--base-url", &stub.base_url])
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed cli"));
}

#[test]
fn base_url_and_page_size_come_from_env() {
    let stub = StapiStub::spawn(StapiStubConfig::default());

    cmd()
        .env("STAPI_BASE_URL", &stub.base_url)
        .env("STAPI_PAGE_SIZE", "2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weapons (5 total)"));

    assert!(stub.requests().iter().all(|r| r.contains("pageSize=2")));
}

#[test]
fn non_numeric_page_size_env_fails() {
    cmd()
        .env("STAPI_BASE_URL", "http://127.0.0.1:9/api/v1/rest/")
        .env("STAPI_PAGE_SIZE", "fifty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("STAPI_PAGE_SIZE is not a number"));
}
