use super::*;
use crate::Theme;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_stock_templates() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.storage_key, "darkMode");
    assert_eq!(cfg.toggle_id, "darkModeToggle");
    assert_eq!(cfg.body_dark_class, "dark-mode");
    assert_eq!(cfg.sidebar.selector, ".sidebar");
    assert_eq!(cfg.sidebar.light, vec!["bg-teal-700"]);
    assert_eq!(cfg.sidebar.dark, vec!["bg-dark", "text-white"]);
    assert_eq!(cfg.content.selector, ".content-area");
    assert_eq!(cfg.content.light, vec!["bg-light", "text-dark"]);
    assert_eq!(cfg.footer.selector, "footer");
    assert_eq!(cfg.footer.dark, vec!["bg-dark", "text-white"]);
}

#[test]
fn default_is_valid() {
    assert!(ThemeConfig::default().validate().is_ok());
}

#[test]
fn label_for_names_the_other_theme() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.label_for(Theme::Dark), DEFAULT_LABEL_TO_LIGHT);
    assert_eq!(cfg.label_for(Theme::Light), DEFAULT_LABEL_TO_DARK);
    assert!(cfg.label_for(Theme::Dark).ends_with("Modo Claro"));
    assert!(cfg.label_for(Theme::Light).ends_with("Modo Escuro"));
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}").unwrap(), ThemeConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let cfg = ThemeConfig::from_json(r#"{"storage_key":"site-theme","label_to_dark":"Dark"}"#).unwrap();
    assert_eq!(cfg.storage_key, "site-theme");
    assert_eq!(cfg.label_to_dark, "Dark");
    assert_eq!(cfg.toggle_id, DEFAULT_TOGGLE_ID);
    assert_eq!(cfg.sidebar, ThemeConfig::default().sidebar);
}

#[test]
fn from_json_replaces_whole_region() {
    let cfg = ThemeConfig::from_json(r#"{"footer":{"selector":".page-footer","light":["bg-white"],"dark":["bg-black"]}}"#)
        .unwrap();
    assert_eq!(cfg.footer.selector, ".page-footer");
    assert_eq!(cfg.footer.light, vec!["bg-white"]);
    assert_eq!(cfg.footer.dark, vec!["bg-black"]);
}

#[test]
fn from_json_rejects_partial_region() {
    let err = ThemeConfig::from_json(r#"{"sidebar":{"selector":".nav"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid theme config json"));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_rejects_empty_storage_key() {
    let err = ThemeConfig::from_json(r#"{"storage_key":""}"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyField { field: "storage_key" }));
}

#[test]
fn validate_rejects_empty_toggle_id() {
    let cfg = ThemeConfig { toggle_id: String::new(), ..ThemeConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::EmptyField { field: "toggle_id" })));
}

#[test]
fn validate_rejects_body_marker_with_whitespace() {
    let cfg = ThemeConfig { body_dark_class: "dark mode".into(), ..ThemeConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvalidClassName { region: "body", .. })));
}

#[test]
fn validate_rejects_empty_selector() {
    let mut cfg = ThemeConfig::default();
    cfg.content.selector = "  ".into();
    assert!(matches!(cfg.validate(), Err(ConfigError::EmptySelector { region: "content" })));
}

#[test]
fn validate_rejects_empty_class_set() {
    let mut cfg = ThemeConfig::default();
    cfg.sidebar.light.clear();
    assert!(matches!(cfg.validate(), Err(ConfigError::EmptyClassSet { region: "sidebar", set: "light" })));
}

#[test]
fn validate_rejects_blank_class_name() {
    let mut cfg = ThemeConfig::default();
    cfg.footer.dark.push(String::new());
    match cfg.validate() {
        Err(ConfigError::InvalidClassName { region, class }) => {
            assert_eq!(region, "footer");
            assert_eq!(class, "");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn validate_rejects_class_in_both_sets() {
    let mut cfg = ThemeConfig::default();
    cfg.content.light.push("text-white".into());
    match cfg.validate() {
        Err(ConfigError::OverlappingClass { region, class }) => {
            assert_eq!(region, "content");
            assert_eq!(class, "text-white");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn validate_rejects_regions_sharing_a_node_with_swapped_sets() {
    let err = ThemeConfig::from_json(r#"{"content":{"selector":".sidebar","light":["bg-dark"],"dark":["bg-teal-700"]}}"#)
        .unwrap_err();
    match err {
        ConfigError::ConflictingRegions { first, second, class } => {
            assert_eq!((first, second), ("sidebar", "content"));
            assert_eq!(class, "bg-teal-700");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn validate_allows_regions_sharing_a_node_with_agreeing_sets() {
    let mut cfg = ThemeConfig::default();
    cfg.footer.selector = cfg.content.selector.clone();
    assert!(cfg.validate().is_ok());
}

#[test]
fn validate_ignores_disagreeing_sets_on_distinct_selectors() {
    let mut cfg = ThemeConfig::default();
    cfg.footer.light = vec!["bg-dark".into()];
    cfg.footer.dark = vec!["bg-light".into()];
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_rejects_unknown_top_level_key() {
    let err = ThemeConfig::from_json(r#"{"storage-key":"theme"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().contains("storage-key"));
}

#[test]
fn from_json_rejects_unknown_region_key() {
    let err =
        ThemeConfig::from_json(r#"{"footer":{"selector":"footer","light":["a"],"dark":["b"],"lite":["c"]}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

// =============================================================
// from_page
// =============================================================

#[test]
fn from_page_without_override_is_default() {
    let (cfg, rejected) = ThemeConfig::from_page(None);
    assert_eq!(cfg, ThemeConfig::default());
    assert!(rejected.is_none());
}

#[test]
fn from_page_applies_valid_override() {
    let (cfg, rejected) = ThemeConfig::from_page(Some(r#"{"toggle_id":"theme-btn"}"#));
    assert_eq!(cfg.toggle_id, "theme-btn");
    assert!(rejected.is_none());
}

#[test]
fn from_page_falls_back_to_default_on_bad_json() {
    let (cfg, rejected) = ThemeConfig::from_page(Some("{not json"));
    assert_eq!(cfg, ThemeConfig::default());
    assert!(matches!(rejected, Some(ConfigError::Json(_))));
}

#[test]
fn from_page_falls_back_to_default_on_invalid_config() {
    let (cfg, rejected) = ThemeConfig::from_page(Some(r#"{"storage_key":""}"#));
    assert_eq!(cfg, ThemeConfig::default());
    assert!(matches!(rejected, Some(ConfigError::EmptyField { field: "storage_key" })));
}
