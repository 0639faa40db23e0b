use bazaar_domain::config::{BackofficeConfig, LoggingSettings, ShippingSettings};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let shipping = ShippingSettings::default();
    assert_eq!(shipping.publish_delay_hours, 48);

    let logging = LoggingSettings::default();
    assert_eq!(logging.level, "info");
    assert!(!logging.json);
    assert!(logging.filter.is_none());
}

#[test]
fn backoffice_config_deserializes() {
    let raw = json!({
        "shipping": { "publish_delay_hours": 24 },
        "logging": { "level": "debug", "json": true, "filter": "bazaar_shipping=trace" }
    });

    let cfg: BackofficeConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.shipping.publish_delay_hours, 24);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.filter.as_deref(), Some("bazaar_shipping=trace"));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: BackofficeConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.shipping.publish_delay_hours, 48);
    assert_eq!(cfg.logging.level, "info");
}
