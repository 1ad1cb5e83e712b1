/*!
 * Configuration Tests
 * Environment-driven allocator selection
 */

use rbmm::core::limits::{ENV_MEMORY_LIMIT, ENV_TRACE_JSON};
use rbmm::{RecordKind, Region, RegionConfig};
use serial_test::serial;
use std::env;
use std::process::Command;

fn clear_env() {
    env::remove_var(ENV_MEMORY_LIMIT);
    env::remove_var(ENV_TRACE_JSON);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = RegionConfig::from_env();
    assert_eq!(config, RegionConfig::default());
}

#[test]
#[serial]
fn test_from_env_limit_and_json() {
    clear_env();
    env::set_var(ENV_MEMORY_LIMIT, "4096");
    env::set_var(ENV_TRACE_JSON, "true");

    let config = RegionConfig::from_env();
    assert_eq!(config.memory_limit, Some(4096));
    assert!(config.trace_json);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_limit_is_ignored() {
    clear_env();
    env::set_var(ENV_MEMORY_LIMIT, "lots");

    let config = RegionConfig::from_env();
    assert_eq!(config.memory_limit, None);
    clear_env();
}

#[test]
#[serial]
fn test_limit_applies_to_regions() {
    clear_env();
    env::set_var(ENV_MEMORY_LIMIT, Region::record_size().to_string());

    let config = RegionConfig::from_env();
    let mut region = Region::new(config.allocator()).unwrap();
    let err = region.add(b"no room").unwrap_err();
    assert_eq!(err.kind, RecordKind::String);
    assert!(region.is_empty());
    clear_env();
}

#[test]
#[serial]
fn test_demo_reports_invalid_limit() {
    let output = Command::new(env!("CARGO_BIN_EXE_rbmm"))
        .args(["alpha", "b"])
        .env(ENV_MEMORY_LIMIT, "lots")
        .env_remove(ENV_TRACE_JSON)
        .env("RUST_LOG", "warn")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert!(output.status.success());
    let mut logs = String::from_utf8_lossy(&output.stdout).into_owned();
    logs.push_str(&String::from_utf8_lossy(&output.stderr));
    assert!(logs.contains("ignoring invalid RBMM_MEMORY_LIMIT"), "{}", logs);
    assert!(logs.contains("released 2 nodes"), "{}", logs);
}
