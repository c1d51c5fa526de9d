use godock_core::{Error, GodockConfig};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = GodockConfig::load(tmp.path()).unwrap();

    assert_eq!(config.build.base_image, "golang");
    assert_eq!(config.build.runtime_image, "gcr.io/distroless/static-debian12");
    assert!(!config.build.vuln_scan);
    assert_eq!(config.build.port, 0);
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[build]
base_image = "docker.io/library/golang"
runtime_image = "gcr.io/distroless/base-debian12"
vuln_scan = true
port = 9000
"#;
    std::fs::write(tmp.path().join("godock.toml"), toml).unwrap();

    let config = GodockConfig::load(tmp.path()).unwrap();

    assert_eq!(config.build.base_image, "docker.io/library/golang");
    assert_eq!(config.build.runtime_image, "gcr.io/distroless/base-debian12");
    assert!(config.build.vuln_scan);
    assert_eq!(config.build.port, 9000);
}

#[test]
fn load_fills_missing_fields_with_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("godock.toml"), "[build]\nvuln_scan = true\n").unwrap();

    let config = GodockConfig::load(tmp.path()).unwrap();

    assert!(config.build.vuln_scan);
    assert_eq!(config.build.base_image, "golang");
    assert_eq!(config.build.port, 0);
}

#[test]
fn load_accepts_empty_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("godock.toml"), "").unwrap();

    let config = GodockConfig::load(tmp.path()).unwrap();
    assert_eq!(config.build.base_image, "golang");
}

#[test]
fn load_rejects_invalid_toml() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("godock.toml"), "[build\nport = ").unwrap();

    let err = GodockConfig::load(tmp.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("godock.toml"));
}

#[test]
fn load_accepts_any_integer_port() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("godock.toml"), "[build]\nport = -1\n").unwrap();
    assert_eq!(GodockConfig::load(tmp.path()).unwrap().build.port, -1);

    std::fs::write(tmp.path().join("godock.toml"), "[build]\nport = 70000\n").unwrap();
    assert_eq!(GodockConfig::load(tmp.path()).unwrap().build.port, 70000);
}
