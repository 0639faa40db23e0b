use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level back-office configuration shared across apps and feature slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackofficeConfigInner {
    pub shipping: ShippingSettings,
    pub logging: LoggingSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BackofficeConfig {
    #[serde(flatten, default)]
    inner: Arc<BackofficeConfigInner>,
}

impl Deref for BackofficeConfig {
    type Target = BackofficeConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BackofficeConfig {
    fn deref_mut(&mut self) -> &mut BackofficeConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Shipping slice knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShippingSettings {
    /// Hours between publishing a configuration and it taking effect for buyers.
    pub publish_delay_hours: u32,
}

/// Logger setup used by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    pub json: bool,
    /// Extra `tracing` directives, e.g. `bazaar_shipping=debug`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for ShippingSettings {
    fn default() -> Self {
        Self { publish_delay_hours: 48 }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, filter: None }
    }
}
