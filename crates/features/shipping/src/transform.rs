//! # Relational rows to configuration tree
//!
//! [`transform`] starts from the default template and patches it one entity at a time
//! through [`TreeBuilder`]. Each step reads only the rows keyed to its entity, so the
//! fields sourced from storage (versus kept from the template) are exactly the ones a step
//! writes:
//!
//! | step              | from rows                                   | otherwise      |
//! |-------------------|---------------------------------------------|----------------|
//! | handling time     | header `from`/`to`                          | template       |
//! | zone              | `available` + exclusion values (per zone)   | template       |
//! | same-day          | method row, city rows, `(same_day, domestic)` fee | template |
//! | standard/express  | method `available`, per-zone delivery window | template slot |
//! | free shipping     | first rule row                              | **disabled**   |
//!
//! Free shipping is the one entity that does not fall back to the template: with no rule
//! rows it is explicitly [`FreeShippingRule::disabled`], because an absent row is how a
//! disabled rule is stored.

use crate::clock::truncate_to_minutes;
use crate::template::default_config;
use bazaar_kernel::domain::shipping::{
    ConfigurationTree, DeliveryWindow, FreeShippingRule, FreeShippingRuleRow, HandlingTime,
    MethodType, RelationalRowSet, SameDayMethod, TimedMethodKind, Zone,
};
use tracing::{debug, warn};

/// Derives the configuration tree from stored rows.
///
/// `None` means no configuration exists yet and yields the default template. Never fails:
/// every field has a template fallback.
#[must_use]
pub fn transform(rows: Option<&RelationalRowSet>) -> ConfigurationTree {
    let Some(rows) = rows else {
        debug!("No shipping rows stored, using the default template");
        return default_config();
    };

    TreeBuilder::from_template()
        .handling_time(rows)
        .zones(rows)
        .same_day(rows)
        .timed_method(rows, TimedMethodKind::Standard)
        .timed_method(rows, TimedMethodKind::Express)
        .free_shipping(rows)
        .build()
}

/// Default-then-patch builder for [`ConfigurationTree`].
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    tree: ConfigurationTree,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::from_template()
    }
}

impl TreeBuilder {
    /// Starts from a fresh copy of the default template.
    #[must_use]
    pub fn from_template() -> Self {
        Self { tree: default_config() }
    }

    /// Copies the handling time from the header row, if stored.
    #[must_use]
    pub fn handling_time(mut self, rows: &RelationalRowSet) -> Self {
        if let Some(header) = rows.header {
            self.tree.handling_time =
                HandlingTime { from: header.handling_time_from, to: header.handling_time_to };
        }
        self
    }

    /// Applies every zone that has a zone row.
    #[must_use]
    pub fn zones(self, rows: &RelationalRowSet) -> Self {
        Zone::ALL.into_iter().fold(self, |builder, zone| builder.zone(rows, zone))
    }

    /// Sets availability and the exclusion list of `zone` from its rows.
    ///
    /// Domestic takes `city` exclusions, every other zone `country` exclusions. Without a
    /// zone row the template zone is kept untouched.
    #[must_use]
    pub fn zone(mut self, rows: &RelationalRowSet, zone: Zone) -> Self {
        let Some(row) = rows.zone(zone) else {
            debug!(zone = %zone, "No zone row, keeping template zone");
            return self;
        };

        let config = self.tree.zones.get_mut(zone);
        config.available = row.available;
        config.set_exclusions(zone, rows.exclusion_values(zone, zone.exclusion_type()));
        self
    }

    /// Rebuilds the same-day method from its method row, if stored.
    ///
    /// The fee lives in the `(same_day, domestic)` delivery row. That key is a storage
    /// convention; it says nothing about domestic zone availability.
    ///
    /// Values the row leaves out stay blank instead of falling back to the template. In
    /// particular a missing cut-off yields `""`, not the template's `"12:00"`: a bare
    /// same-day row must report a missing fee, cut-off, time zone and city list
    /// (`bare_same_day_row_reports_four_violations_in_order` in `tests/scenarios.rs`).
    #[must_use]
    pub fn same_day(mut self, rows: &RelationalRowSet) -> Self {
        let Some(row) = rows.method(MethodType::SameDay) else {
            return self;
        };

        let template_fee = self.tree.methods.same_day.fee;
        let fee = rows
            .delivery_for(MethodType::SameDay, Zone::Domestic)
            .map_or(template_fee, |delivery| delivery.fee);

        self.tree.methods.same_day = SameDayMethod {
            available: row.available,
            fee,
            cut_off_time: row.cut_off_time.as_deref().map(truncate_to_minutes).unwrap_or_default(),
            time_zone: row.time_zone.clone().unwrap_or_default(),
            applicable_cities: rows
                .same_day_cities()
                .iter()
                .map(|city| city.city_name.clone())
                .collect(),
        };
        self
    }

    /// Applies the method row and the per-zone delivery rows of a timed method.
    ///
    /// Merging happens per zone slot: a zone without a delivery row keeps the template
    /// window while its siblings are overwritten.
    #[must_use]
    pub fn timed_method(mut self, rows: &RelationalRowSet, kind: TimedMethodKind) -> Self {
        let method_type = MethodType::from(kind);
        let method = self.tree.methods.timed_mut(kind);

        if let Some(row) = rows.method(method_type) {
            method.available = row.available;
        }

        for zone in Zone::ALL {
            if let Some(delivery) = rows.delivery_for(method_type, zone) {
                *method.per_zone.get_mut(zone) = DeliveryWindow {
                    from: delivery.delivery_from,
                    to: delivery.delivery_to,
                    fee: delivery.fee,
                };
            }
        }
        self
    }

    /// Replaces the free-shipping rule; see [`free_shipping_from_rows`].
    #[must_use]
    pub fn free_shipping(mut self, rows: &RelationalRowSet) -> Self {
        self.tree.free_shipping = free_shipping_from_rows(rows.free_shipping_rules());
        self
    }

    #[must_use]
    pub fn build(self) -> ConfigurationTree {
        self.tree
    }
}

/// Maps stored free-shipping rule rows onto the tree rule.
///
/// * No rows: the rule is explicitly disabled, overriding whatever the template holds.
/// * Otherwise only the first row is used; a missing `available` means enabled.
#[must_use]
pub fn free_shipping_from_rows(rows: &[FreeShippingRuleRow]) -> FreeShippingRule {
    let Some(row) = rows.first() else {
        return FreeShippingRule::disabled();
    };
    if rows.len() > 1 {
        warn!(count = rows.len(), "Multiple free-shipping rules stored, using the first");
    }

    let applicable_methods = match row.method_type.as_deref().map(str::parse::<TimedMethodKind>) {
        Some(Ok(kind)) => vec![kind],
        Some(Err(err)) => {
            warn!(%err, "Ignoring free-shipping method");
            Vec::new()
        },
        None => Vec::new(),
    };

    FreeShippingRule {
        available: row.available.unwrap_or(true),
        threshold: row.threshold.unwrap_or_default(),
        applicable_methods,
        excluded_countries: row.excluded_countries.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_kernel::domain::shipping::{
        DeliveryRow, ExclusionRow, ExclusionType, MethodRow, SameDayCityRow, ShippingHeader,
        ZoneRow,
    };

    fn method(method_type: MethodType, available: bool) -> MethodRow {
        MethodRow { method_type, available, cut_off_time: None, time_zone: None }
    }

    fn delivery(method_type: MethodType, zone_type: Zone, from: i32, to: i32, fee: f64) -> DeliveryRow {
        DeliveryRow { method_type, zone_type, delivery_from: from, delivery_to: to, fee }
    }

    #[test]
    fn absent_rows_yield_the_template() {
        assert_eq!(transform(None), default_config());
    }

    #[test]
    fn empty_rows_yield_the_template() {
        assert_eq!(transform(Some(&RelationalRowSet::default())), default_config());
    }

    #[test]
    fn header_overrides_handling_time() {
        let rows = RelationalRowSet {
            header: Some(ShippingHeader { handling_time_from: 2, handling_time_to: 4 }),
            ..RelationalRowSet::default()
        };
        assert_eq!(transform(Some(&rows)).handling_time, HandlingTime { from: 2, to: 4 });
    }

    #[test]
    fn zone_rows_collect_matching_exclusions_only() {
        let rows = RelationalRowSet {
            zones: Some(vec![
                ZoneRow { zone_type: Zone::Domestic, available: true },
                ZoneRow { zone_type: Zone::Global, available: true },
            ]),
            exclusions: Some(vec![
                ExclusionRow {
                    zone_type: Zone::Domestic,
                    exclusion_type: ExclusionType::City,
                    value: "Odesa".to_owned(),
                },
                // A country exclusion on domestic is not meaningful and is ignored.
                ExclusionRow {
                    zone_type: Zone::Domestic,
                    exclusion_type: ExclusionType::Country,
                    value: "UA".to_owned(),
                },
                ExclusionRow {
                    zone_type: Zone::Global,
                    exclusion_type: ExclusionType::Country,
                    value: "AQ".to_owned(),
                },
                // No regional zone row, so this one is never read.
                ExclusionRow {
                    zone_type: Zone::Regional,
                    exclusion_type: ExclusionType::Country,
                    value: "PL".to_owned(),
                },
            ]),
            ..RelationalRowSet::default()
        };

        let tree = transform(Some(&rows));
        assert!(tree.zones.domestic.available);
        assert_eq!(tree.zones.domestic.excluded_cities, Some(vec!["Odesa".to_owned()]));
        assert_eq!(tree.zones.domestic.excluded_countries, None);
        assert_eq!(tree.zones.global.excluded_countries, Some(vec!["AQ".to_owned()]));
        assert!(!tree.zones.regional.available);
        assert_eq!(tree.zones.regional.excluded_countries, Some(Vec::new()));
    }

    #[test]
    fn same_day_reads_row_cities_and_domestic_fee() {
        let rows = RelationalRowSet {
            methods: Some(vec![MethodRow {
                method_type: MethodType::SameDay,
                available: true,
                cut_off_time: Some("15:45:00".to_owned()),
                time_zone: Some("Europe/Kyiv".to_owned()),
            }]),
            delivery: Some(vec![
                delivery(MethodType::SameDay, Zone::Regional, 0, 0, 99.0),
                delivery(MethodType::SameDay, Zone::Domestic, 0, 0, 7.5),
            ]),
            same_day_cities: Some(vec![
                SameDayCityRow { city_name: "Kyiv".to_owned() },
                SameDayCityRow { city_name: "Lviv".to_owned() },
            ]),
            ..RelationalRowSet::default()
        };

        let same_day = transform(Some(&rows)).methods.same_day;
        assert!(same_day.available);
        assert_eq!(same_day.fee, 7.5);
        assert_eq!(same_day.cut_off_time, "15:45");
        assert_eq!(same_day.time_zone, "Europe/Kyiv");
        assert_eq!(same_day.applicable_cities, ["Kyiv", "Lviv"]);
    }

    #[test]
    fn same_day_without_method_row_keeps_template() {
        let rows = RelationalRowSet {
            delivery: Some(vec![delivery(MethodType::SameDay, Zone::Domestic, 0, 0, 7.5)]),
            same_day_cities: Some(vec![SameDayCityRow { city_name: "Kyiv".to_owned() }]),
            ..RelationalRowSet::default()
        };
        assert_eq!(transform(Some(&rows)).methods.same_day, default_config().methods.same_day);
    }

    #[test]
    fn same_day_row_without_stored_values_is_blank() {
        let rows = RelationalRowSet {
            methods: Some(vec![method(MethodType::SameDay, true)]),
            ..RelationalRowSet::default()
        };
        let same_day = transform(Some(&rows)).methods.same_day;
        assert_eq!(same_day.fee, 0.0);
        assert!(same_day.cut_off_time.is_empty());
        assert!(same_day.time_zone.is_empty());
        assert!(same_day.applicable_cities.is_empty());
    }

    #[test]
    fn timed_methods_merge_per_zone_slot() {
        let rows = RelationalRowSet {
            methods: Some(vec![
                method(MethodType::Standard, true),
                method(MethodType::Express, false),
            ]),
            delivery: Some(vec![
                delivery(MethodType::Standard, Zone::Regional, 3, 6, 12.0),
                delivery(MethodType::Express, Zone::Domestic, 1, 1, 20.0),
            ]),
            ..RelationalRowSet::default()
        };

        let tree = transform(Some(&rows));
        let standard = &tree.methods.standard;
        assert!(standard.available);
        assert_eq!(standard.per_zone.regional, DeliveryWindow { from: 3, to: 6, fee: 12.0 });
        assert_eq!(standard.per_zone.domestic, DeliveryWindow::default());

        let express = &tree.methods.express;
        assert!(!express.available);
        assert_eq!(express.per_zone.domestic, DeliveryWindow { from: 1, to: 1, fee: 20.0 });
        assert_eq!(express.per_zone.global, DeliveryWindow::default());
    }

    #[test]
    fn lookups_do_not_depend_on_row_order() {
        let forward = RelationalRowSet {
            zones: Some(vec![
                ZoneRow { zone_type: Zone::Domestic, available: true },
                ZoneRow { zone_type: Zone::Global, available: false },
            ]),
            delivery: Some(vec![
                delivery(MethodType::Standard, Zone::Domestic, 1, 2, 3.0),
                delivery(MethodType::Express, Zone::Global, 4, 5, 6.0),
            ]),
            ..RelationalRowSet::default()
        };
        let mut reversed = forward.clone();
        if let Some(zones) = reversed.zones.as_mut() {
            zones.reverse();
        }
        if let Some(delivery) = reversed.delivery.as_mut() {
            delivery.reverse();
        }

        assert_eq!(transform(Some(&forward)), transform(Some(&reversed)));
    }

    #[test]
    fn zero_rule_rows_disable_free_shipping_over_template() {
        assert_eq!(free_shipping_from_rows(&[]), FreeShippingRule::disabled());
    }

    #[test]
    fn rule_row_defaults_to_enabled() {
        let rule = free_shipping_from_rows(&[FreeShippingRuleRow {
            threshold: Some(50.0),
            method_type: Some("express".to_owned()),
            ..FreeShippingRuleRow::default()
        }]);
        assert!(rule.available);
        assert_eq!(rule.threshold, 50.0);
        assert_eq!(rule.applicable_methods, [TimedMethodKind::Express]);
        assert!(rule.excluded_countries.is_empty());
    }

    #[test]
    fn only_the_first_rule_row_counts() {
        let rule = free_shipping_from_rows(&[
            FreeShippingRuleRow { available: Some(false), ..FreeShippingRuleRow::default() },
            FreeShippingRuleRow { threshold: Some(10.0), ..FreeShippingRuleRow::default() },
        ]);
        assert!(!rule.available);
        assert_eq!(rule.threshold, 0.0);
    }

    #[test]
    fn unsupported_rule_methods_are_dropped() {
        let rule = free_shipping_from_rows(&[FreeShippingRuleRow {
            method_type: Some("same_day".to_owned()),
            ..FreeShippingRuleRow::default()
        }]);
        assert!(rule.applicable_methods.is_empty());
    }
}
