//! # Configuration tree to relational rows
//!
//! [`flatten`] is the inverse of [`transform`](crate::transform::transform): for any stored
//! row set `R`, `transform(flatten(transform(R)))` equals `transform(R)`.
//!
//! Every group is emitted as a complete list because saving replaces each group wholesale.
//! Rows whose content equals the template are left out where the transformer would
//! restore the same value anyway (delivery windows, the same-day fee, a disabled
//! free-shipping rule).

use crate::clock::to_storage_time;
use crate::template::default_same_day;
use bazaar_kernel::domain::shipping::{
    ConfigurationTree, DeliveryRow, DeliveryWindow, ExclusionRow, FreeShippingRule,
    FreeShippingRuleRow, MethodRow, MethodType, RelationalRowSet, SameDayCityRow,
    ShippingHeader, TimedMethodKind, Zone, ZoneRow,
};
use tracing::warn;

/// Flattens `tree` into the row groups it is stored as.
#[must_use]
pub fn flatten(tree: &ConfigurationTree) -> RelationalRowSet {
    RelationalRowSet {
        header: Some(ShippingHeader {
            handling_time_from: tree.handling_time.from,
            handling_time_to: tree.handling_time.to,
        }),
        methods: Some(method_rows(tree)),
        delivery: Some(delivery_rows(tree)),
        zones: Some(zone_rows(tree)),
        exclusions: Some(exclusion_rows(tree)),
        free_shipping_rules: Some(free_shipping_rows(&tree.free_shipping)),
        same_day_cities: Some(
            tree.methods
                .same_day
                .applicable_cities
                .iter()
                .map(|city| SameDayCityRow { city_name: city.clone() })
                .collect(),
        ),
    }
}

fn method_rows(tree: &ConfigurationTree) -> Vec<MethodRow> {
    let same_day = &tree.methods.same_day;
    let mut rows = vec![MethodRow {
        method_type: MethodType::SameDay,
        available: same_day.available,
        cut_off_time: (!same_day.cut_off_time.is_empty())
            .then(|| to_storage_time(&same_day.cut_off_time)),
        time_zone: (!same_day.time_zone.is_empty()).then(|| same_day.time_zone.clone()),
    }];

    rows.extend(TimedMethodKind::ALL.into_iter().map(|kind| MethodRow {
        method_type: kind.into(),
        available: tree.methods.timed(kind).available,
        cut_off_time: None,
        time_zone: None,
    }));
    rows
}

fn delivery_rows(tree: &ConfigurationTree) -> Vec<DeliveryRow> {
    let mut rows = Vec::new();

    // Same-day's single fee is stored under the domestic key.
    let same_day_fee = tree.methods.same_day.fee;
    if same_day_fee != default_same_day().fee {
        rows.push(DeliveryRow {
            method_type: MethodType::SameDay,
            zone_type: Zone::Domestic,
            delivery_from: 0,
            delivery_to: 0,
            fee: same_day_fee,
        });
    }

    for kind in TimedMethodKind::ALL {
        for (zone, window) in tree.methods.timed(kind).per_zone.iter() {
            if *window == DeliveryWindow::default() {
                continue;
            }
            rows.push(DeliveryRow {
                method_type: kind.into(),
                zone_type: zone,
                delivery_from: window.from,
                delivery_to: window.to,
                fee: window.fee,
            });
        }
    }
    rows
}

fn zone_rows(tree: &ConfigurationTree) -> Vec<ZoneRow> {
    tree.zones
        .iter()
        .map(|(zone, config)| ZoneRow { zone_type: zone, available: config.available })
        .collect()
}

/// Only the list meaningful for each zone is written; the other one is dropped.
fn exclusion_rows(tree: &ConfigurationTree) -> Vec<ExclusionRow> {
    tree.zones
        .iter()
        .flat_map(|(zone, config)| {
            config.exclusions(zone).unwrap_or_default().iter().map(move |value| ExclusionRow {
                zone_type: zone,
                exclusion_type: zone.exclusion_type(),
                value: value.clone(),
            })
        })
        .collect()
}

/// A disabled rule with nothing else set is stored as no row at all. A disabled rule
/// that still carries a threshold, methods or countries keeps its row so those values
/// survive a reload.
///
/// Writing the row only for an available rule would break the reload law checked by
/// `flatten_then_transform_reproduces_the_tree` in `tests/roundtrip.rs`: a disabled rule
/// without a row reloads as [`FreeShippingRule::disabled`] and loses its threshold.
fn free_shipping_rows(rule: &FreeShippingRule) -> Vec<FreeShippingRuleRow> {
    if *rule == FreeShippingRule::disabled() {
        return Vec::new();
    }
    if rule.applicable_methods.len() > 1 {
        warn!(
            count = rule.applicable_methods.len(),
            "Free-shipping rule rows hold a single method, storing only the first"
        );
    }

    vec![FreeShippingRuleRow {
        available: Some(rule.available),
        threshold: Some(rule.threshold),
        method_type: rule.applicable_methods.first().map(|kind| kind.as_str().to_owned()),
        excluded_countries: Some(rule.excluded_countries.clone()),
    }]
}
