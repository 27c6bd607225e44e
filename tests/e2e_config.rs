//! E2E tests for persistent configuration and adapter allocation
//!
//! Tests config round-trip, defaults, environment overrides and how the
//! harness and adapter pool consume the result.

use analogue_harness::config::ConfigError;
use analogue_harness::harness::AdapterPool;
use analogue_harness::{Harness, HarnessConfig};
use std::collections::HashMap;
use std::path::PathBuf;

fn env(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |key: &str| map.get(key).map(|v| v.to_string())
}

#[test]
fn test_config_default_path_location() {
    let path = HarnessConfig::path();
    assert!(path.ends_with("analogue-harness/config.json"));
}

#[test]
fn test_config_round_trip_preserves_everything() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = HarnessConfig {
        xmos_root: Some("/work/xmos".into()),
        xsig_path: "/tools/xsig".into(),
        xsig_config_root: Some("/work/configs".into()),
        xrun_path: "/tools/xrun".into(),
        dut_adapter: Some("2RNC8V7M".into()),
        harness_adapter: Some("8MBE6DRX".into()),
        device_timeout_secs: 20,
        flash_timeout_secs: 60,
        watched_dir: Some("/Users/ci/exec_all".into()),
    };
    config.save(&path).unwrap();
    assert_eq!(HarnessConfig::load_from(&path), config);
}

#[test]
fn test_config_backward_compatible_minimal_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"xmos_root": "/xmos"}"#).unwrap();

    let config = HarnessConfig::load_from(&path);
    assert_eq!(config.xmos_root, Some(PathBuf::from("/xmos")));
    assert_eq!(config.xsig_path, PathBuf::from("xsig"));
    assert_eq!(config.flash_timeout_secs, 120);
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = HarnessConfig::load_from(&dir.path().join("absent.json"));
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn test_env_overrides_every_tool_path() {
    let config = HarnessConfig::default().with_env_overrides(env(&[
        ("XMOS_ROOT", "/env/xmos"),
        ("XSIG_PATH", "/env/xsig"),
        ("XSIG_CONFIG_ROOT", "/env/configs"),
        ("XRUN_PATH", "/env/xrun"),
        ("DUT_ADAPTER", "D"),
        ("HARNESS_ADAPTER", "H"),
    ]));

    assert_eq!(config.xmos_root, Some(PathBuf::from("/env/xmos")));
    assert_eq!(config.xsig_path, PathBuf::from("/env/xsig"));
    assert_eq!(config.xsig_config_root().unwrap(), PathBuf::from("/env/configs"));
    assert_eq!(config.xrun_path, PathBuf::from("/env/xrun"));
    assert_eq!(config.adapters().unwrap(), ("D".into(), "H".into()));
}

#[test]
fn test_watched_dir_defaults_to_home() {
    let config = HarnessConfig::default();
    assert!(config.watched_dir().ends_with("exec_all"));

    let config = HarnessConfig {
        watched_dir: Some("/tmp/watch".into()),
        ..Default::default()
    };
    assert_eq!(config.watched_dir(), PathBuf::from("/tmp/watch"));
}

#[test]
fn test_harness_needs_xmos_root() {
    assert_eq!(
        Harness::new(&HarnessConfig::default()).err(),
        Some(ConfigError::MissingXmosRoot)
    );

    let config = HarnessConfig::default().with_env_overrides(env(&[("XMOS_ROOT", "/xmos")]));
    let harness = Harness::new(&config).unwrap();
    assert_eq!(harness.xmos_root(), PathBuf::from("/xmos"));
}

#[test]
fn test_adapter_pool_from_config() {
    assert_eq!(
        AdapterPool::from_config(&HarnessConfig::default()),
        Err(ConfigError::MissingAdapter("DUT"))
    );

    let config =
        HarnessConfig::default().with_env_overrides(env(&[("DUT_ADAPTER", "D"), ("HARNESS_ADAPTER", "H")]));
    let mut pool = AdapterPool::from_config(&config).unwrap();
    let lease = pool.acquire();
    assert_eq!((lease.dut(), lease.harness()), ("D", "H"));
}
