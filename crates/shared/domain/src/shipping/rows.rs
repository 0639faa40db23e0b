//! Table-shaped shipping configuration as read from and written to durable storage.
//!
//! Field names match the storage columns exactly. Each multi-row group may arrive as a list
//! or as `null`; both mean "no rows".

use super::kinds::{ExclusionType, MethodType, Zone};
use serde::{Deserialize, Serialize};

/// The single per-brand header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingHeader {
    pub handling_time_from: i32,
    pub handling_time_to: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRow {
    pub method_type: MethodType,
    pub available: bool,
    /// Stored as `HH:MM:SS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut_off_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRow {
    pub method_type: MethodType,
    pub zone_type: Zone,
    pub delivery_from: i32,
    pub delivery_to: i32,
    pub fee: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRow {
    pub zone_type: Zone,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRow {
    pub zone_type: Zone,
    pub exclusion_type: ExclusionType,
    pub value: String,
}

/// Every column is optional; the transformer supplies the defaults.
///
/// `method_type` stays a plain string because the column is not constrained to the timed
/// methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeShippingRuleRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_countries: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SameDayCityRow {
    pub city_name: String,
}

/// All row groups that make up one brand's shipping configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationalRowSet {
    pub header: Option<ShippingHeader>,
    pub methods: Option<Vec<MethodRow>>,
    pub delivery: Option<Vec<DeliveryRow>>,
    pub zones: Option<Vec<ZoneRow>>,
    pub exclusions: Option<Vec<ExclusionRow>>,
    pub free_shipping_rules: Option<Vec<FreeShippingRuleRow>>,
    pub same_day_cities: Option<Vec<SameDayCityRow>>,
}

impl RelationalRowSet {
    #[must_use]
    pub fn methods(&self) -> &[MethodRow] {
        self.methods.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn delivery(&self) -> &[DeliveryRow] {
        self.delivery.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn zones(&self) -> &[ZoneRow] {
        self.zones.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn exclusions(&self) -> &[ExclusionRow] {
        self.exclusions.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn free_shipping_rules(&self) -> &[FreeShippingRuleRow] {
        self.free_shipping_rules.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn same_day_cities(&self) -> &[SameDayCityRow] {
        self.same_day_cities.as_deref().unwrap_or_default()
    }

    /// `true` when no header and no rows exist in any group (`null` and `[]` alike).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.methods().is_empty()
            && self.delivery().is_empty()
            && self.zones().is_empty()
            && self.exclusions().is_empty()
            && self.free_shipping_rules().is_empty()
            && self.same_day_cities().is_empty()
    }

    #[must_use]
    pub fn method(&self, method: MethodType) -> Option<&MethodRow> {
        self.methods().iter().find(|row| row.method_type == method)
    }

    #[must_use]
    pub fn delivery_for(&self, method: MethodType, zone: Zone) -> Option<&DeliveryRow> {
        self.delivery().iter().find(|row| row.method_type == method && row.zone_type == zone)
    }

    #[must_use]
    pub fn zone(&self, zone: Zone) -> Option<&ZoneRow> {
        self.zones().iter().find(|row| row.zone_type == zone)
    }

    /// Values of all exclusion rows keyed `(zone, kind)`, in row order.
    #[must_use]
    pub fn exclusion_values(&self, zone: Zone, kind: ExclusionType) -> Vec<String> {
        self.exclusions()
            .iter()
            .filter(|row| row.zone_type == zone && row.exclusion_type == kind)
            .map(|row| row.value.clone())
            .collect()
    }
}
