use super::*;

fn base() -> ClientConfig {
    ClientConfig {
        api_base_url: "https://api.default".to_owned(),
        api_token: Some("default-token".to_owned()),
        identity_url: "https://id.default".to_owned(),
    }
}

#[test]
fn normalize_value_trims_and_rejects_empty() {
    assert_eq!(normalize_value(""), None);
    assert_eq!(normalize_value("   "), None);
    assert_eq!(
        normalize_value("  https://api.example.com "),
        Some("https://api.example.com".to_owned())
    );
}

#[test]
fn from_values_treats_blank_as_absent() {
    let config = ClientConfig::from_values(Some(" "), Some(""), None);
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn apply_overrides_ignores_blank_values() {
    let mut config = base();
    config.apply_overrides(ClientConfig {
        api_base_url: "  ".to_owned(),
        api_token: Some(String::new()),
        identity_url: String::new(),
    });
    assert_eq!(config, base());
}

#[test]
fn apply_overrides_keeps_token_when_override_has_none() {
    let mut config = base();
    config.apply_overrides(ClientConfig::default());
    assert_eq!(config.api_token.as_deref(), Some("default-token"));
}

#[test]
fn apply_overrides_overwrites_when_present() {
    let mut config = base();
    config.apply_overrides(ClientConfig {
        api_base_url: "https://api.override".to_owned(),
        api_token: Some("override-token".to_owned()),
        identity_url: " https://id.override ".to_owned(),
    });
    assert_eq!(config.api_base_url, "https://api.override");
    assert_eq!(config.api_token.as_deref(), Some("override-token"));
    assert_eq!(config.identity_url, "https://id.override");
}

#[test]
fn embedded_json_escapes_script_close() {
    let config = ClientConfig {
        api_base_url: "https://api.example.com/</script><script>alert(1)".to_owned(),
        api_token: None,
        identity_url: String::new(),
    };
    let json = config.to_embedded_json();
    assert!(!json.contains("</"));
    assert_eq!(parse_embedded(&json), Some(config));
}

#[test]
fn parse_embedded_tolerates_missing_fields() {
    let config = parse_embedded(r#"{ "identity_url": "https://id.example.com" }"#).unwrap();
    assert_eq!(config.identity_url, "https://id.example.com");
    assert_eq!(config.api_base_url, "");
    assert_eq!(config.api_token, None);
}

#[test]
fn parse_embedded_rejects_malformed_json() {
    assert_eq!(parse_embedded("not json"), None);
}
