//! # Shipping Configuration Validation
//!
//! A stateless predicate pass over a [`ConfigurationTree`] producing human-readable
//! violations. An empty list means the configuration is publishable.
//!
//! ## Check order
//! Checks always run in the same order so that output is deterministic:
//! 1. handling time
//! 2. same-day method
//! 3. standard method
//! 4. express method
//! 5. zones
//! 6. free shipping
//! 7. global zone enablement
//!
//! ## Gating
//! Disabled entities are never checked. A timed method's zone slot is checked only when
//! both the method and that zone are enabled.

use crate::clock::is_valid_hhmm;
use bazaar_kernel::domain::shipping::{
    ConfigurationTree, DeliveryWindow, FreeShippingRule, HandlingTime, Methods, PerZone,
    SameDayMethod, TimedMethodKind, Zone, ZoneConfig,
};

/// Validates `tree` and returns every violation in check order.
#[must_use]
pub fn validate(tree: &ConfigurationTree) -> Vec<String> {
    let mut violations = Vec::new();

    check_handling_time(&tree.handling_time, &mut violations);
    check_same_day(&tree.methods.same_day, &mut violations);
    for kind in TimedMethodKind::ALL {
        check_timed_method(tree, kind, &mut violations);
    }
    check_zones(&tree.zones, &mut violations);
    check_free_shipping(&tree.free_shipping, &tree.methods, &mut violations);
    check_zone_enablement(tree, &mut violations);

    violations
}

/// The outcome of [`validate`], for callers that gate on publishability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn of(tree: &ConfigurationTree) -> Self {
        Self { violations: validate(tree) }
    }

    #[must_use]
    pub const fn is_publishable(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }
}

fn check_handling_time(handling: &HandlingTime, out: &mut Vec<String>) {
    let from_valid = handling.from >= 0;
    let to_valid = handling.to >= 1;

    if !from_valid {
        out.push("Handling time 'from' must be 0 days or more".to_owned());
    }
    if !to_valid {
        out.push("Handling time 'to' must be at least 1 day".to_owned());
    }
    if from_valid && to_valid && handling.to < handling.from {
        out.push("Handling time 'to' cannot be less than 'from'".to_owned());
    }
}

fn check_same_day(same_day: &SameDayMethod, out: &mut Vec<String>) {
    if !same_day.available {
        return;
    }

    // Unlike timed methods, a zero fee is not allowed here.
    if !same_day.fee.is_finite() {
        out.push("Same-day delivery fee must be a valid number".to_owned());
    } else if same_day.fee <= 0.0 {
        out.push("Same-day delivery fee must be greater than 0".to_owned());
    }
    if !is_valid_hhmm(&same_day.cut_off_time) {
        out.push("Same-day cut-off time must be in HH:MM format".to_owned());
    }
    if same_day.time_zone.trim().is_empty() {
        out.push("Same-day delivery requires a time zone".to_owned());
    }
    if same_day.applicable_cities.is_empty() {
        out.push("Same-day delivery requires at least one applicable city".to_owned());
    }
}

fn check_timed_method(tree: &ConfigurationTree, kind: TimedMethodKind, out: &mut Vec<String>) {
    let method = tree.methods.timed(kind);
    if !method.available {
        return;
    }

    let mut enabled_zones = 0_usize;
    let mut valid_zones = 0_usize;

    for (zone, config) in tree.zones.iter() {
        if !config.available {
            continue;
        }
        enabled_zones += 1;
        if check_delivery_window(kind, zone, method.per_zone.get(zone), out) {
            valid_zones += 1;
        }
    }

    if enabled_zones == 0 {
        out.push(format!("{} shipping is enabled but no zones are enabled", kind.label()));
    } else if valid_zones == 0 {
        out.push(format!("{} shipping has no valid fees set for any enabled zone", kind.label()));
    }
}

/// Checks one enabled zone slot. Returns `true` when the slot is fully valid.
fn check_delivery_window(
    kind: TimedMethodKind,
    zone: Zone,
    window: &DeliveryWindow,
    out: &mut Vec<String>,
) -> bool {
    let before = out.len();
    let scope = format!("{} shipping to the {} zone", kind.label(), zone.label().to_lowercase());

    let from_valid = window.from > 0;
    let to_valid = window.to > 0;

    if !from_valid {
        out.push(format!("{scope}: delivery 'from' days must be greater than 0"));
    }
    if !to_valid {
        out.push(format!("{scope}: delivery 'to' days must be greater than 0"));
    }
    if from_valid && to_valid && window.to < window.from {
        out.push(format!("{scope}: delivery 'to' days cannot be less than 'from' days"));
    }
    // Zero is a legitimate per-zone fee (free delivery to that zone).
    if !window.fee.is_finite() {
        out.push(format!("{scope}: fee must be a valid number"));
    } else if window.fee < 0.0 {
        out.push(format!("{scope}: fee cannot be negative"));
    }

    out.len() == before
}

fn check_zones(zones: &PerZone<ZoneConfig>, out: &mut Vec<String>) {
    for (zone, config) in zones.iter() {
        if config.exclusions(zone).is_some() {
            continue;
        }
        let list = match zone {
            Zone::Domestic => "excluded cities",
            Zone::SubRegional | Zone::Regional | Zone::Global => "excluded countries",
        };
        out.push(format!("{} zone {list} must be a list", zone.label()));
    }
}

fn check_free_shipping(rule: &FreeShippingRule, methods: &Methods, out: &mut Vec<String>) {
    if !rule.available {
        return;
    }

    if !rule.threshold.is_finite() {
        out.push("Free shipping threshold must be a valid number".to_owned());
    } else if rule.threshold <= 0.0 {
        out.push("Free shipping threshold must be greater than 0".to_owned());
    }
    if rule.applicable_methods.is_empty() {
        out.push("Free shipping requires at least one applicable method".to_owned());
    }
    for kind in &rule.applicable_methods {
        if !methods.timed(*kind).available {
            out.push(format!(
                "Free shipping applies to {} shipping, which is not enabled",
                kind.label()
            ));
        }
    }
}

/// One union check across both timed methods, not one per method.
fn check_zone_enablement(tree: &ConfigurationTree, out: &mut Vec<String>) {
    let timed_enabled = tree.methods.standard.available || tree.methods.express.available;
    if timed_enabled && !tree.any_zone_enabled() {
        out.push(
            "At least one shipping zone must be enabled when standard or express shipping is enabled"
                .to_owned(),
        );
    }
}
