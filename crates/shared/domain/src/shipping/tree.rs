//! The nested, editing-facing shipping configuration.
//!
//! Every field is populated; gaps in storage are filled from the default template when the
//! tree is derived. Business rules are not type-enforced here; the validator checks them.

use super::kinds::{PerZone, TimedMethodKind, Zone};
use serde::{Deserialize, Serialize};

/// Working days between order and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingTime {
    pub from: i32,
    pub to: i32,
}

/// Availability and exclusions of a single zone.
///
/// `excluded_cities` is meaningful for [`Zone::Domestic`] only, `excluded_countries` for the
/// other three zones. A missing list is a validation failure, not an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_cities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_countries: Option<Vec<String>>,
}

impl ZoneConfig {
    /// The exclusion list relevant to `zone`, if present.
    #[must_use]
    pub fn exclusions(&self, zone: Zone) -> Option<&[String]> {
        match zone {
            Zone::Domestic => self.excluded_cities.as_deref(),
            Zone::SubRegional | Zone::Regional | Zone::Global => self.excluded_countries.as_deref(),
        }
    }

    /// Replaces the exclusion list relevant to `zone`.
    pub fn set_exclusions(&mut self, zone: Zone, values: Vec<String>) {
        match zone {
            Zone::Domestic => self.excluded_cities = Some(values),
            Zone::SubRegional | Zone::Regional | Zone::Global => {
                self.excluded_countries = Some(values);
            },
        }
    }
}

/// Same-day delivery. Priced once, not per zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SameDayMethod {
    pub available: bool,
    pub fee: f64,
    /// Order cut-off as `HH:MM`.
    pub cut_off_time: String,
    pub time_zone: String,
    pub applicable_cities: Vec<String>,
}

/// Delivery window (in days) and fee of a timed method inside one zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    pub from: i32,
    pub to: i32,
    pub fee: f64,
}

/// Standard or express delivery, priced per zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedMethod {
    pub available: bool,
    pub per_zone: PerZone<DeliveryWindow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Methods {
    pub same_day: SameDayMethod,
    pub standard: TimedMethod,
    pub express: TimedMethod,
}

impl Methods {
    #[must_use]
    pub const fn timed(&self, kind: TimedMethodKind) -> &TimedMethod {
        match kind {
            TimedMethodKind::Standard => &self.standard,
            TimedMethodKind::Express => &self.express,
        }
    }

    pub const fn timed_mut(&mut self, kind: TimedMethodKind) -> &mut TimedMethod {
        match kind {
            TimedMethodKind::Standard => &mut self.standard,
            TimedMethodKind::Express => &mut self.express,
        }
    }
}

/// Order-value threshold above which the listed methods ship for free.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeShippingRule {
    pub available: bool,
    pub threshold: f64,
    pub applicable_methods: Vec<TimedMethodKind>,
    pub excluded_countries: Vec<String>,
}

impl FreeShippingRule {
    /// The rule that represents "no free shipping", both in memory and on the wire
    /// (where it is stored as the absence of a rule row).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            available: false,
            threshold: 0.0,
            applicable_methods: Vec::new(),
            excluded_countries: Vec::new(),
        }
    }
}

/// A brand's complete shipping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationTree {
    pub handling_time: HandlingTime,
    pub zones: PerZone<ZoneConfig>,
    pub methods: Methods,
    pub free_shipping: FreeShippingRule,
}

impl ConfigurationTree {
    /// Whether any of the four zones is enabled.
    #[must_use]
    pub fn any_zone_enabled(&self) -> bool {
        self.zones.iter().any(|(_, zone)| zone.available)
    }
}
