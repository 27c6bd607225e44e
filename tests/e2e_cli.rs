//! E2E tests for the command line
//!
//! Runs the built binary with an isolated config so the user's own settings
//! never leak in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str]) -> Output {
    let config_dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_analogue-harness"))
        .arg("--config")
        .arg(config_dir.path().join("config.json"))
        .args(args)
        .env_remove("XMOS_ROOT")
        .env_remove("XSIG_CONFIG_ROOT")
        .env_remove("DUT_ADAPTER")
        .env_remove("HARNESS_ADAPTER")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_list_smoke_inputs() {
    let output = run(&["list", "--tier", "smoke", "--direction", "in"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("in-xk_216_mc-1i2o2xxxxxx-48000-10s"));
    assert!(text.contains("11 scenario(s)"));
    assert!(!text.contains("out-"));
}

#[test]
fn test_list_json() {
    let output = run(&["list", "--tier", "weekend", "--filter", "out-xk_evk_xu316-*", "--json"]);
    assert!(output.status.success());
    let scenarios: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let scenarios = scenarios.as_array().unwrap();
    assert!(!scenarios.is_empty());
    for scenario in scenarios {
        assert_eq!(scenario["direction"], "out");
        assert_eq!(scenario["board"], "xk_evk_xu316");
        assert_eq!(scenario["duration_secs"], 1800);
    }
}

#[test]
fn test_list_rejects_unknown_tier() {
    let output = run(&["list", "--tier", "hourly"]);
    assert!(!output.status.success());
}

#[test]
fn test_resolve_prints_paths() {
    let output = run(&["resolve", "xk_216_mc", "2i10o10xxxxxx", "--xmos-root", "/xmos"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("XMOS xCORE-200 MC (UAC2.0)"));
    assert!(text.contains(
        "/xmos/sw_usb_audio/app_usb_aud_xk_216_mc/bin/2i10o10xxxxxx/app_usb_aud_xk_216_mc_2i10o10xxxxxx.xe"
    ));
    assert!(text.contains("app_audio_analyzer_xcore200_mc.xe"));
}

#[test]
fn test_resolve_without_root_is_an_error() {
    let output = run(&["resolve", "xk_216_mc", "2i10o10xxxxxx"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_verify_passing_report() {
    let expectations = fixture("analogue_8ch.json");
    let report = fixture("report_8ch_pass.txt");
    let output = run(&[
        "verify",
        "--expectations",
        expectations.to_str().unwrap(),
        "--direction",
        "in",
        report.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "Analyser output OK");
}

#[test]
fn test_verify_failing_report() {
    let expectations = fixture("analogue_8ch.json");
    let report = fixture("report_8ch_glitch.txt");
    let output = run(&[
        "verify",
        "--expectations",
        expectations.to_str().unwrap(),
        "--direction",
        "out",
        report.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output).trim(),
        "Checking analyser output failed:\nChannel 5: Lost signal\nUnexpected signal detected on channel 8"
    );
}

#[test]
fn test_run_without_adapters_is_an_error() {
    let output = run(&["run", "--tier", "smoke", "--xmos-root", "/xmos"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No DUT adapter configured"));
}

#[test]
fn test_run_with_empty_selection() {
    let output = run(&["run", "--filter", "no-such-scenario"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No scenarios selected."));
}

#[cfg(not(feature = "host-audio"))]
#[test]
fn test_run_without_host_audio_fails_before_flashing() {
    let output = run(&[
        "run",
        "--tier",
        "smoke",
        "--xmos-root",
        "/xmos",
        "--dut-adapter",
        "DUT",
        "--harness-adapter",
        "HAR",
        "--xrun",
        "/nonexistent/xrun",
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--features host-audio"));
    assert!(stdout(&output).is_empty());
}
