//! Configuration layering and credential resolution.

use config::{Environment, Map};
use std::io::Write;
use summit::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_THINKING_BUDGET, SummitConfig};
use summit_core::{DEFAULT_MAX_IMAGE_BYTES, DEFAULT_MAX_TEXT_CHARS};
use summit_error::ConfigErrorKind;

fn env(vars: &[(&str, &str)]) -> Environment {
    let map: Map<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Environment::with_prefix("SUMMIT")
        .try_parsing(true)
        .source(Some(map))
}

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults_without_sources() {
    let config = SummitConfig::from_sources(None, env(&[])).expect("defaults load");

    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(*config.thinking_budget(), DEFAULT_THINKING_BUDGET);
    assert!(*config.grounding());
    assert_eq!(*config.limits().max_text_chars(), DEFAULT_MAX_TEXT_CHARS);
    assert_eq!(*config.limits().max_image_bytes(), DEFAULT_MAX_IMAGE_BYTES);
    assert!(config.api_key().is_none());
}

#[test]
fn test_missing_credential_is_reported() {
    let config = SummitConfig::from_sources(None, env(&[]))
        .unwrap()
        .with_credential_from(|_| None);

    let err = config.credential().unwrap_err();
    assert!(err.is_missing_credential());
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[cfg(feature = "gemini")]
#[test]
fn test_consultant_requires_credential_before_any_call() {
    use summit::{Consultant, SummitErrorKind};

    let config = SummitConfig::from_sources(None, env(&[]))
        .unwrap()
        .with_credential_from(|_| None);

    let err = Consultant::from_config(&config).unwrap_err();
    match err.kind() {
        SummitErrorKind::Config(e) => assert!(e.is_missing_credential()),
        other => panic!("Expected a config error, got {other}"),
    }

    let config = config.with_credential_from(|_| Some("test-key".to_string()));
    let consultant = Consultant::from_config(&config).expect("credential present");
    assert_eq!(consultant.builder().model(), DEFAULT_MODEL);
}

#[test]
fn test_credential_lookup_order_and_blank_values() {
    let base = SummitConfig::from_sources(None, env(&[])).unwrap();

    let config = base.clone().with_credential_from(|name| match name {
        "GEMINI_API_KEY" => Some("  ".to_string()),
        "API_KEY" => Some("fallback-key".to_string()),
        _ => None,
    });
    assert_eq!(config.credential().unwrap(), "fallback-key");

    let config = base.with_credential_from(|name| Some(format!("{name}-value")));
    assert_eq!(config.credential().unwrap(), "GEMINI_API_KEY-value");
}

#[test]
fn test_configured_key_wins_over_lookup() {
    let config = SummitConfig::from_sources(None, env(&[("SUMMIT_API_KEY", "from-config")]))
        .unwrap()
        .with_credential_from(|_| Some("from-env".to_string()));
    assert_eq!(config.credential().unwrap(), "from-config");
}

#[test]
fn test_file_then_environment_precedence() {
    let file = toml_file(
        r#"
model = "gemini-file"
thinking_budget = 1024
grounding = false
max_text_chars = 500
"#,
    );

    let config = SummitConfig::from_sources(
        Some((file.path().to_path_buf(), true)),
        env(&[("SUMMIT_MODEL", "gemini-env")]),
    )
    .expect("config loads");

    assert_eq!(config.model(), "gemini-env");
    assert_eq!(*config.thinking_budget(), 1024);
    assert!(!*config.grounding());
    assert_eq!(*config.limits().max_text_chars(), 500);
}

#[test]
fn test_required_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = SummitConfig::from_sources(Some((missing.clone(), true)), env(&[])).unwrap_err();
    assert!(matches!(err.kind, ConfigErrorKind::Load(_)));

    assert!(SummitConfig::from_sources(Some((missing, false)), env(&[])).is_ok());
}

#[test]
fn test_invalid_values_are_rejected() {
    let err = SummitConfig::from_sources(None, env(&[("SUMMIT_BASE_URL", "ftp://nope")]))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ConfigErrorKind::InvalidValue { ref key, .. } if key == "base_url"
    ));

    let err = SummitConfig::from_sources(None, env(&[("SUMMIT_MAX_IMAGE_BYTES", "0")]))
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ConfigErrorKind::InvalidValue { ref key, .. } if key == "max_image_bytes"
    ));
}

#[test]
fn test_invocation_builder_reflects_config() {
    let file = toml_file("thinking_budget = 0\nmax_image_bytes = 2048\n");
    let config = SummitConfig::from_sources(Some((file.path().to_path_buf(), true)), env(&[]))
        .unwrap()
        .with_model("gemini-override");

    let builder = config.invocation_builder();
    assert_eq!(builder.model(), "gemini-override");
    assert!(builder.thinking_budget().is_none());
    assert!(*builder.grounding());
    assert_eq!(*builder.limits().max_image_bytes(), 2048);
}

#[test]
fn test_debug_output_redacts_credential() {
    let config = SummitConfig::from_sources(None, env(&[]))
        .unwrap()
        .with_credential_from(|_| Some("AIza-very-secret".to_string()));

    let debug = format!("{:?}", config);
    assert!(!debug.contains("AIza-very-secret"));
    assert!(debug.contains("<redacted>"));
    assert!(debug.contains(DEFAULT_MODEL));
}
