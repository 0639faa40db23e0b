//! # Shipping Configuration
//!
//! This slice maps a brand's shipping rules between two shapes:
//!
//! * the **relational row set** ([`RelationalRowSet`]): separate row groups for zones,
//!   methods, per-zone delivery fees, exclusions, free-shipping rules and same-day cities,
//!   as stored; and
//! * the **configuration tree** ([`ConfigurationTree`]): one nested, fully-defaulted
//!   structure used for editing and validation.
//!
//! ## Flow
//!
//! 1. **Read ([`store`]):** row groups are fetched concurrently.
//! 2. **Transform ([`transform`]):** rows are patched onto the default template
//!    ([`template`]).
//! 3. **Validate ([`validator`]):** the edited tree yields an ordered list of violations.
//! 4. **Flatten ([`flatten`]):** a publishable tree becomes rows again and replaces the
//!    stored configuration; publication takes effect after a delay ([`publication`]).
//!
//! Steps 2-4 are pure and synchronous; only the store is async.
//!
//! ```rust
//! use bazaar_shipping::{flatten::flatten, transform::transform, validator::validate};
//!
//! let tree = transform(None);
//! assert!(validate(&tree).is_empty());
//! assert_eq!(transform(Some(&flatten(&tree))), tree);
//! ```

pub mod clock;
mod error;
pub mod flatten;
pub mod publication;
pub mod service;
pub mod store;
pub mod template;
pub mod transform;
pub mod validator;

pub use crate::error::{ShippingError, ShippingErrorExt};
use bazaar_kernel::domain::config::ShippingSettings;
use bazaar_kernel::domain::registry::{FeatureSlice, InitializedSlice};
pub use bazaar_kernel::domain::shipping::{ConfigurationTree, RelationalRowSet};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// Shipping feature state shared by the slice handle.
#[derive(Debug, Clone)]
pub struct ShippingInner {
    pub settings: ShippingSettings,
}

/// Thread-safe handle to the shipping slice.
#[derive(Debug, Clone)]
pub struct Shipping {
    inner: Arc<ShippingInner>,
}

impl Shipping {
    pub fn new(inner: ShippingInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Binds the slice settings to a store.
    pub fn service<S: store::ShippingStore>(&self, store: S) -> service::ShippingService<S> {
        service::ShippingService::new(store, self.settings.clone())
    }
}

impl Deref for Shipping {
    type Target = ShippingInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Shipping {
    fn name(&self) -> &'static str {
        "shipping"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the shipping feature slice.
pub fn init(settings: &ShippingSettings) -> InitializedSlice {
    tracing::info!(
        publish_delay_hours = settings.publish_delay_hours,
        "Shipping slice initialized"
    );

    InitializedSlice::new(Shipping::new(ShippingInner { settings: settings.clone() }))
}

/// Decodes a configuration tree from JSON.
///
/// # Errors
/// Returns [`ShippingError::Serde`] if the JSON does not describe a tree.
pub fn tree_from_json(json: &str) -> Result<ConfigurationTree, ShippingError> {
    serde_json::from_str(json).context("Decoding configuration tree")
}

/// Decodes a relational row set from JSON.
///
/// # Errors
/// Returns [`ShippingError::Serde`] if the JSON does not describe a row set.
pub fn rows_from_json(json: &str) -> Result<RelationalRowSet, ShippingError> {
    serde_json::from_str(json).context("Decoding shipping rows")
}

/// Encodes any shipping model as pretty-printed JSON.
///
/// # Errors
/// Returns [`ShippingError::Serde`] if serialization fails.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, ShippingError> {
    serde_json::to_string_pretty(value).context("Encoding shipping JSON")
}
