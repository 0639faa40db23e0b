//! # Persistence adapter
//!
//! [`ShippingStore`] is the boundary to durable storage. Reads are split per row group so
//! an implementation can issue them independently; [`read_rows`] runs all seven
//! concurrently and joins them before the transformer sees anything.
//!
//! Writes are whole-configuration replaces: every multi-row group is deleted and
//! reinserted, the header is upserted. Two editors saving at once therefore converge to
//! whichever save lands last, never to a merge.

use crate::error::ShippingError;
use bazaar_kernel::domain::shipping::{
    DeliveryRow, ExclusionRow, FreeShippingRuleRow, MethodRow, RelationalRowSet, SameDayCityRow,
    ShippingHeader, ZoneRow,
};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::{Future, ready};

/// Identifies the brand owning a shipping configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandId(String);

impl BrandId {
    /// Creates a brand id from a non-blank string.
    ///
    /// # Errors
    /// Returns [`ShippingError::Internal`] when `id` is empty or whitespace only.
    pub fn new(id: impl Into<String>) -> Result<Self, ShippingError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ShippingError::Internal {
                message: "Brand id cannot be blank".into(),
                context: None,
            });
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BrandId {
    type Error = ShippingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BrandId> for String {
    fn from(id: BrandId) -> Self {
        id.0
    }
}

/// Durable storage of shipping row groups.
///
/// A group that has never been written may be reported as `None` or as an empty list;
/// both mean "no rows". A failed read must be an error, never `None`.
pub trait ShippingStore: Send + Sync {
    fn header(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<ShippingHeader>, ShippingError>> + Send;

    fn methods(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<MethodRow>>, ShippingError>> + Send;

    fn delivery(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<DeliveryRow>>, ShippingError>> + Send;

    fn zones(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<ZoneRow>>, ShippingError>> + Send;

    fn exclusions(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<ExclusionRow>>, ShippingError>> + Send;

    fn free_shipping_rules(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<FreeShippingRuleRow>>, ShippingError>> + Send;

    fn same_day_cities(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<SameDayCityRow>>, ShippingError>> + Send;

    /// Replaces the brand's stored configuration with `rows`.
    fn replace(
        &self,
        brand: &BrandId,
        rows: RelationalRowSet,
    ) -> impl Future<Output = Result<(), ShippingError>> + Send;
}

/// Reads every row group of `brand` concurrently.
///
/// Returns `Ok(None)` when the brand has no stored configuration at all.
///
/// # Errors
/// Propagates the first failing group read.
pub async fn read_rows<S: ShippingStore>(
    store: &S,
    brand: &BrandId,
) -> Result<Option<RelationalRowSet>, ShippingError> {
    let (header, methods, delivery, zones, exclusions, free_shipping_rules, same_day_cities) = tokio::try_join!(
        store.header(brand),
        store.methods(brand),
        store.delivery(brand),
        store.zones(brand),
        store.exclusions(brand),
        store.free_shipping_rules(brand),
        store.same_day_cities(brand),
    )?;

    let rows = RelationalRowSet {
        header,
        methods,
        delivery,
        zones,
        exclusions,
        free_shipping_rules,
        same_day_cities,
    };

    Ok((!rows.is_empty()).then_some(rows))
}

/// In-process [`ShippingStore`] keyed by brand.
#[derive(Debug, Default)]
pub struct MemoryStore {
    brands: RwLock<FxHashMap<BrandId, RelationalRowSet>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a brand with raw rows, bypassing validation (imports, fixtures).
    pub fn insert(&self, brand: BrandId, rows: RelationalRowSet) {
        self.brands.write().insert(brand, rows);
    }

    /// Snapshot of everything stored for `brand`.
    #[must_use]
    pub fn snapshot(&self, brand: &BrandId) -> Option<RelationalRowSet> {
        self.brands.read().get(brand).cloned()
    }

    fn group<T>(&self, brand: &BrandId, pick: impl FnOnce(&RelationalRowSet) -> T) -> Option<T> {
        self.brands.read().get(brand).map(pick)
    }
}

impl ShippingStore for MemoryStore {
    fn header(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<ShippingHeader>, ShippingError>> + Send {
        ready(Ok(self.group(brand, |rows| rows.header).flatten()))
    }

    fn methods(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<MethodRow>>, ShippingError>> + Send {
        ready(Ok(self.group(brand, |rows| rows.methods.clone()).flatten()))
    }

    fn delivery(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<DeliveryRow>>, ShippingError>> + Send {
        ready(Ok(self.group(brand, |rows| rows.delivery.clone()).flatten()))
    }

    fn zones(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<ZoneRow>>, ShippingError>> + Send {
        ready(Ok(self.group(brand, |rows| rows.zones.clone()).flatten()))
    }

    fn exclusions(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<ExclusionRow>>, ShippingError>> + Send {
        ready(Ok(self.group(brand, |rows| rows.exclusions.clone()).flatten()))
    }

    fn free_shipping_rules(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<FreeShippingRuleRow>>, ShippingError>> + Send {
        ready(Ok(self.group(brand, |rows| rows.free_shipping_rules.clone()).flatten()))
    }

    fn same_day_cities(
        &self,
        brand: &BrandId,
    ) -> impl Future<Output = Result<Option<Vec<SameDayCityRow>>, ShippingError>> + Send {
        ready(Ok(self.group(brand, |rows| rows.same_day_cities.clone()).flatten()))
    }

    fn replace(
        &self,
        brand: &BrandId,
        rows: RelationalRowSet,
    ) -> impl Future<Output = Result<(), ShippingError>> + Send {
        let mut brands = self.brands.write();
        let stored = brands.entry(brand.clone()).or_default();

        // Upsert: a save without a header keeps the stored one.
        if rows.header.is_some() {
            stored.header = rows.header;
        }
        // Delete + reinsert for every multi-row group.
        stored.methods = Some(rows.methods.unwrap_or_default());
        stored.delivery = Some(rows.delivery.unwrap_or_default());
        stored.zones = Some(rows.zones.unwrap_or_default());
        stored.exclusions = Some(rows.exclusions.unwrap_or_default());
        stored.free_shipping_rules = Some(rows.free_shipping_rules.unwrap_or_default());
        stored.same_day_cities = Some(rows.same_day_cities.unwrap_or_default());

        ready(Ok(()))
    }
}
