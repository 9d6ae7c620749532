//! Configuration read from real environment variables.
//!
//! These tests mutate the process environment, so they run serially.

use std::env;
use std::time::Duration;

use serial_test::serial;
use studio::cli::{parse_args, CliCommand};
use studio::config::{
    StudioConfig, ENV_API_BASE_URL, ENV_GENERATION_TIMEOUT_SECS, ENV_HOME,
    ENV_REQUEST_TIMEOUT_SECS,
};
use tempfile::TempDir;

const ALL_VARS: [&str; 4] = [
    ENV_API_BASE_URL,
    ENV_REQUEST_TIMEOUT_SECS,
    ENV_GENERATION_TIMEOUT_SECS,
    ENV_HOME,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    env::set_var(ENV_API_BASE_URL, "https://studio.example.com/api/");
    env::set_var(ENV_REQUEST_TIMEOUT_SECS, "12");
    env::set_var(ENV_GENERATION_TIMEOUT_SECS, "90");
    env::set_var(ENV_HOME, temp_dir.path());

    let config = StudioConfig::from_env();
    clear_env();

    assert_eq!(config.api_base_url, "https://studio.example.com/api/");
    assert_eq!(config.request_timeout, Duration::from_secs(12));
    assert_eq!(config.generation_timeout, Duration::from_secs(90));
    assert_eq!(config.data_dir, temp_dir.path());
    assert_eq!(config.log_path(), temp_dir.path().join("studio.log"));
    assert!(config.warnings.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_without_variables_uses_defaults() {
    clear_env();
    let config = StudioConfig::from_env();

    assert_eq!(config.api_base_url, "http://localhost:3000/");
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.generation_timeout, Duration::from_secs(600));
}

#[test]
#[serial]
fn test_bad_timeouts_become_warnings() {
    clear_env();
    env::set_var(ENV_REQUEST_TIMEOUT_SECS, "-3");
    env::set_var(ENV_GENERATION_TIMEOUT_SECS, "ten");

    let config = StudioConfig::from_env();
    clear_env();

    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.generation_timeout, Duration::from_secs(600));
    assert_eq!(config.warnings.len(), 2);
    assert!(config.warnings[0].contains(ENV_REQUEST_TIMEOUT_SECS));
    assert!(config.warnings[1].contains(ENV_GENERATION_TIMEOUT_SECS));
}

#[test]
#[serial]
fn test_cli_base_url_wins_over_env() {
    clear_env();
    env::set_var(ENV_API_BASE_URL, "http://from-env:3000/");

    let args = ["studio", "--base-url", "http://from-flag:4000/", "--history"].map(String::from);
    let options = match parse_args(args.into_iter()) {
        CliCommand::RunTui(options) => options,
        other => panic!("unexpected command: {:?}", other),
    };
    let mut config = StudioConfig::from_env();
    clear_env();
    if let Some(url) = options.base_url {
        config = config.with_api_base_url(url);
    }

    assert_eq!(config.api_base_url, "http://from-flag:4000/");
    assert!(options.start_on_history);
}

#[test]
#[serial]
fn test_invalid_base_url_fails_validation() {
    clear_env();
    env::set_var(ENV_API_BASE_URL, "ftp://files.example.com");

    let config = StudioConfig::from_env();
    clear_env();

    assert!(config.validate().is_err());
}
