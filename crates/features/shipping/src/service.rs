//! Load/check/save orchestration around a [`ShippingStore`].

use crate::error::{ShippingError, ShippingErrorExt};
use crate::flatten::flatten;
use crate::publication::{Publication, publish_delay};
use crate::store::{BrandId, ShippingStore, read_rows};
use crate::transform::transform;
use crate::validator::ValidationReport;
use bazaar_kernel::domain::config::ShippingSettings;
use bazaar_kernel::domain::shipping::ConfigurationTree;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

/// Shipping configuration use cases for one store.
#[derive(Debug)]
pub struct ShippingService<S> {
    store: S,
    settings: ShippingSettings,
}

impl<S: ShippingStore> ShippingService<S> {
    pub const fn new(store: S, settings: ShippingSettings) -> Self {
        Self { store, settings }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the brand's rows and derives its configuration tree.
    ///
    /// A brand without any stored rows gets the default configuration.
    ///
    /// # Errors
    /// Returns [`ShippingError::Store`] if any row group cannot be read.
    #[instrument(skip(self, brand), fields(brand = %brand))]
    pub async fn load(&self, brand: &BrandId) -> Result<ConfigurationTree, ShippingError> {
        let rows = read_rows(&self.store, brand).await.context("Loading shipping rows")?;
        if rows.is_none() {
            debug!("Brand has no shipping configuration yet");
        }
        Ok(transform(rows.as_ref()))
    }

    /// Validates `tree` without saving it.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn check(&self, tree: &ConfigurationTree) -> ValidationReport {
        ValidationReport::of(tree)
    }

    /// Validates and, when publishable, replaces the brand's stored configuration.
    ///
    /// # Errors
    /// * [`ShippingError::Rejected`] with every violation if `tree` is not publishable.
    ///   Nothing is written in that case.
    /// * [`ShippingError::Internal`] if the publish delay overflows the calendar. Nothing is
    ///   written in that case either.
    /// * [`ShippingError::Store`] if the replace fails.
    #[instrument(skip(self, brand, tree), fields(brand = %brand))]
    pub async fn save(
        &self,
        brand: &BrandId,
        tree: &ConfigurationTree,
        now: DateTime<Utc>,
    ) -> Result<Publication, ShippingError> {
        let report = self.check(tree);
        if !report.is_publishable() {
            info!(violations = report.violations().len(), "Shipping configuration rejected");
            return Err(ShippingError::Rejected {
                violations: report.into_violations(),
                context: Some(format!("Saving shipping configuration for {brand}").into()),
            });
        }

        let publication = Publication::new(brand.clone(), now, publish_delay(&self.settings))
            .context("Scheduling shipping publication")?;
        self.store.replace(brand, flatten(tree)).await.context("Replacing shipping rows")?;

        info!(effective_at = %publication.effective_at, "Shipping configuration published");
        Ok(publication)
    }
}
