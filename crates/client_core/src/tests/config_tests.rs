use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn defaults_point_at_local_service() {
    let settings = ClientSettings::default();
    assert_eq!(settings.api_base_url, "http://localhost:5000");
    assert_eq!(settings.log_filter, "info");
    assert_eq!(
        settings.api_base_url().expect("valid").as_str(),
        "http://localhost:5000/"
    );
}

#[test]
fn toml_overrides_defaults() {
    let mut settings = ClientSettings::default();
    settings
        .apply_toml("api_base_url = \"https://geo.example.com/api\"\nlog_filter = \"debug\"\n")
        .expect("parse");

    assert_eq!(settings.api_base_url, "https://geo.example.com/api");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let mut settings = ClientSettings::default();
    settings.apply_toml("log_filter = \"warn\"").expect("parse");

    assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn env_overrides_with_app_prefix_winning() {
    let mut settings = ClientSettings::default();
    settings.apply_env(env_from(&[
        ("POINTS_API_URL", "http://points.internal:8080"),
        ("APP__API_BASE_URL", "http://override.internal:9090"),
        ("RUST_LOG", "client_core=trace"),
    ]));

    assert_eq!(settings.api_base_url, "http://override.internal:9090");
    assert_eq!(settings.log_filter, "client_core=trace");
}

#[test]
fn blank_env_values_are_ignored() {
    let mut settings = ClientSettings::default();
    settings.apply_env(env_from(&[("POINTS_API_URL", "  "), ("RUST_LOG", "")]));

    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn rejects_non_http_urls() {
    let mut settings = ClientSettings::default();

    settings.api_base_url = "ftp://example.com".into();
    assert!(matches!(
        settings.api_base_url(),
        Err(SettingsError::InvalidUrl { .. })
    ));

    settings.api_base_url = "not a url".into();
    assert!(matches!(
        settings.api_base_url(),
        Err(SettingsError::InvalidUrl { .. })
    ));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("points_client_missing_{suffix}.toml"));

    let err = ClientSettings::load(Some(path.as_path())).expect_err("missing file");
    assert!(matches!(err, SettingsError::Read { .. }));
}

#[test]
fn loads_explicit_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("points_client_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("mkdir");
    let path = temp_root.join("client.toml");
    fs::write(&path, "log_filter = \"debug\"\n").expect("write config");

    let settings = ClientSettings::load(Some(path.as_path())).expect("load");
    if env::var("RUST_LOG").map_or(true, |v| v.trim().is_empty()) {
        assert_eq!(settings.log_filter, "debug");
    }

    fs::write(&path, "log_filter = [").expect("write config");
    assert!(matches!(
        ClientSettings::load(Some(path.as_path())),
        Err(SettingsError::Parse { .. })
    ));

    fs::remove_dir_all(temp_root).expect("cleanup");
}
