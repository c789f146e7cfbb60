use super::*;

#[test]
fn defaults_apply_when_env_is_empty() {
    let config = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.api_upstream, "http://127.0.0.1:8080");
}

#[test]
fn explicit_values_win() {
    let config = ServerConfig::from_vars(
        Some("4000".to_owned()),
        Some("https://api.example.com".to_owned()),
    )
    .unwrap();
    assert_eq!(config.port, 4000);
    assert_eq!(config.api_upstream, "https://api.example.com");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_vars(Some("not-a-port".to_owned()), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn upstream_requires_http_scheme() {
    let err =
        ServerConfig::from_vars(None, Some("api.example.com".to_owned())).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUpstream(_)));
}

#[test]
fn upstream_trailing_slashes_are_stripped() {
    let config =
        ServerConfig::from_vars(None, Some("http://api.example.com///".to_owned())).unwrap();
    assert_eq!(config.api_upstream, "http://api.example.com");
}

#[test]
fn upstream_whitespace_is_trimmed() {
    let config =
        ServerConfig::from_vars(None, Some("  http://api.example.com/ ".to_owned())).unwrap();
    assert_eq!(config.api_upstream, "http://api.example.com");
}
