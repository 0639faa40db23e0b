//! Facade crate for the back-office features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `bazaar` with the desired feature flags (`shipping` is on by default).
//! - Call [`init`] once at startup to build the feature slices.

pub use bazaar_domain as domain;
use bazaar_domain::config::BackofficeConfig;
use bazaar_domain::registry::InitializedSlice;
pub use bazaar_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "shipping")]
    pub use bazaar_shipping as shipping;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "shipping")]
        "shipping",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
#[must_use]
pub fn init(config: &BackofficeConfig) -> Vec<InitializedSlice> {
    let mut slices = Vec::new();

    // Shipping
    #[cfg(feature = "shipping")]
    slices.push(features::shipping::init(&config.shipping));

    #[cfg(not(feature = "shipping"))]
    let _ = config;

    slices
}

/// Finds an initialized slice by its concrete state type.
#[must_use]
pub fn slice<T: domain::registry::FeatureSlice>(slices: &[InitializedSlice]) -> Option<&T> {
    slices.iter().find_map(InitializedSlice::downcast_ref::<T>)
}
