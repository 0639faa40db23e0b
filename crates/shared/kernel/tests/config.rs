use bazaar_kernel::config::{ConfigError, load_config};
use bazaar_kernel::domain::config::BackofficeConfig;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
#[serial]
fn loads_file_settings_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("backoffice.toml");
    fs::write(&path, "[shipping]\npublish_delay_hours = 12\n\n[logging]\njson = true\n")?;

    let cfg: BackofficeConfig = load_config(Some(&path))?;
    assert_eq!(cfg.shipping.publish_delay_hours, 12);
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[test]
#[serial]
fn no_file_yields_defaults() -> Result<(), ConfigError> {
    let cfg: BackofficeConfig = load_config(None::<PathBuf>)?;
    assert_eq!(cfg.shipping.publish_delay_hours, 48);
    Ok(())
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let err = load_config::<BackofficeConfig>(Some("definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}
