use honeycomb_core::config::{ConfigError, DEFAULT_MAX_IMPORT_BYTES, DEFAULT_PORT};
use honeycomb_core::Config;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.storage.root_key, "app_root");
    assert_eq!(config.import.max_bytes, DEFAULT_MAX_IMPORT_BYTES);
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.layout.radius, 300.0);
    assert_eq!(config.layout.root_width, 200);
    assert_eq!(config.layout.child_height, 58);
    assert!(!config.server.open_browser);
}

#[test]
fn test_default_config_string_has_all_sections() {
    let content = Config::default_config_string();
    for section in ["[storage]", "[import]", "[server]", "[layout]"] {
        assert!(content.contains(section), "missing {section}");
    }

    let parsed: Config = toml::from_str(&content).unwrap();
    assert_eq!(parsed.import.max_bytes, DEFAULT_MAX_IMPORT_BYTES);
    assert_eq!(parsed.layout, Config::default().layout);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("honeycomb.toml");
    std::fs::write(
        &path,
        r#"
[import]
max_bytes = 1024

[layout]
radius = 120.0
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.import.max_bytes, 1024);
    assert_eq!(config.layout.radius, 120.0);
    assert_eq!(config.layout.child_width, 152);
    assert_eq!(config.storage.file_extension, "json");
}

#[test]
fn test_invalid_file_rejected() {
    let temp = TempDir::new().unwrap();

    let zero = temp.path().join("zero.toml");
    std::fs::write(&zero, "[import]\nmax_bytes = 0\n").unwrap();
    assert!(matches!(Config::from_file(&zero), Err(ConfigError::Invalid(_))));

    let broken = temp.path().join("broken.toml");
    std::fs::write(&broken, "[import\n").unwrap();
    assert!(matches!(Config::from_file(&broken), Err(ConfigError::ParseError(_))));

    assert!(matches!(
        Config::from_file(temp.path().join("missing.toml")),
        Err(ConfigError::ReadError(_))
    ));
}
