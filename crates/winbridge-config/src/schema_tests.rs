use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.channel.name, "window_manager");
    assert_eq!(config.bridge.failure_mode, FailureMode::Lenient);
    assert_eq!(config.bridge.window_target, WindowTarget::Active);
    assert_eq!(config.fullscreen.geometry_capture, GeometryCapture::BeforeRestyle);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
}

#[test]
fn test_failure_mode_serde() {
    let mode: FailureMode = toml::from_str::<BridgeConfig>("failure_mode = \"strict\"")
        .unwrap()
        .failure_mode;
    assert_eq!(mode, FailureMode::Strict);
}

#[test]
fn test_geometry_capture_serde() {
    let config: FullscreenConfig = toml::from_str("geometry_capture = \"after_restyle\"").unwrap();
    assert_eq!(config.geometry_capture, GeometryCapture::AfterRestyle);
}

#[test]
fn test_unknown_enum_value_rejected() {
    let result = toml::from_str::<BridgeConfig>("window_target = \"desktop\"");
    assert!(result.is_err());
}

#[test]
fn test_log_dir_disabled() {
    let logging = LoggingConfig {
        file_dir: Some("/var/log/winbridge".to_string()),
        ..Default::default()
    };
    assert!(logging.log_dir().is_none());
}

#[test]
fn test_log_dir_explicit() {
    let logging = LoggingConfig {
        file: true,
        file_dir: Some("/var/log/winbridge".to_string()),
        ..Default::default()
    };
    assert_eq!(logging.log_dir(), Some(PathBuf::from("/var/log/winbridge")));
}

#[test]
fn test_log_dir_tilde_expanded() {
    let logging = LoggingConfig {
        file: true,
        file_dir: Some("~/logs".to_string()),
        ..Default::default()
    };
    let dir = logging.log_dir().unwrap();
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with("logs"));
}
