use std::collections::HashMap;
use std::path::PathBuf;

use voltsense_contact::config::Config;

fn load(vars: &[(&str, &str)]) -> Result<Config, String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = load(&[]).unwrap();

    assert_eq!(config.host.to_string(), "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.max_body_size, 65_536);
    assert_eq!(config.static_dir, None);
    assert_eq!(config.log_level, "info");
}

#[test]
fn values_are_read_from_the_environment() {
    let config = load(&[
        ("VOLTSENSE_HOST", "127.0.0.1"),
        ("VOLTSENSE_PORT", "8080"),
        ("VOLTSENSE_MAX_BODY_SIZE", "1024"),
        ("VOLTSENSE_STATIC_DIR", "public"),
        ("VOLTSENSE_LOG_LEVEL", "debug"),
    ])
    .unwrap();

    assert_eq!(config.host.to_string(), "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.max_body_size, 1024);
    assert_eq!(config.static_dir, Some(PathBuf::from("public")));
    assert_eq!(config.log_level, "debug");
}

#[test]
fn blank_static_dir_disables_pages() {
    let config = load(&[("VOLTSENSE_STATIC_DIR", "  ")]).unwrap();
    assert_eq!(config.static_dir, None);
}

#[test]
fn invalid_values_name_the_variable() {
    let err = load(&[("VOLTSENSE_PORT", "not-a-port")]).unwrap_err();
    assert!(err.starts_with("Invalid VOLTSENSE_PORT"), "{err}");

    let err = load(&[("VOLTSENSE_PORT", "70000")]).unwrap_err();
    assert!(err.starts_with("Invalid VOLTSENSE_PORT"), "{err}");

    let err = load(&[("VOLTSENSE_HOST", "localhost")]).unwrap_err();
    assert!(err.starts_with("Invalid VOLTSENSE_HOST"), "{err}");

    let err = load(&[("VOLTSENSE_MAX_BODY_SIZE", "-1")]).unwrap_err();
    assert!(err.starts_with("Invalid VOLTSENSE_MAX_BODY_SIZE"), "{err}");
}
