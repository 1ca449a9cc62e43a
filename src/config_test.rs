use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_without_overrides_matches_default() {
    let cfg = FrameConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, FrameConfig::default());
    assert_eq!(cfg.generate_delay, Duration::from_millis(2000));
    assert_eq!(cfg.deploy_delay, Duration::from_millis(3000));
    assert_eq!(cfg.deploy_url, DEFAULT_DEPLOY_URL);
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = FrameConfig::from_lookup(lookup_from(&[
        ("FRAME_TITLE", "  Frame Lab "),
        ("FRAME_GENERATE_DELAY_MS", "0"),
        ("FRAME_DEPLOY_DELAY_MS", "15"),
        ("FRAME_DEPLOY_URL", "https://frames.example.test/"),
    ]))
    .unwrap();
    assert_eq!(cfg.title, "Frame Lab");
    assert_eq!(cfg.generate_delay, Duration::ZERO);
    assert_eq!(cfg.deploy_delay, Duration::from_millis(15));
    assert_eq!(cfg.deploy_url, "https://frames.example.test");
    assert_eq!(cfg.runtime_name, DEFAULT_RUNTIME_NAME);
}

#[test]
fn from_lookup_rejects_non_numeric_delay() {
    let err = FrameConfig::from_lookup(lookup_from(&[("FRAME_DEPLOY_DELAY_MS", "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidDelay { key: "FRAME_DEPLOY_DELAY_MS", value: "soon".to_owned() });
}

#[test]
fn from_lookup_rejects_non_http_deploy_url() {
    let err = FrameConfig::from_lookup(lookup_from(&[("FRAME_DEPLOY_URL", "ftp://frames")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { key: "FRAME_DEPLOY_URL", .. }));
}

#[test]
fn from_lookup_rejects_blank_text() {
    let err = FrameConfig::from_lookup(lookup_from(&[("FRAME_VERSION", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Blank { key: "FRAME_VERSION" });
}
