use bazaar_kernel::domain::shipping::{
    DeliveryRow, FreeShippingRuleRow, MethodRow, MethodType, RelationalRowSet, Zone, ZoneRow,
};
use bazaar_shipping::template::default_config;
use bazaar_shipping::transform::transform;
use bazaar_shipping::validator::validate;

fn method(method_type: MethodType, available: bool) -> MethodRow {
    MethodRow { method_type, available, cut_off_time: None, time_zone: None }
}

fn domestic_standard_rows(fee: f64) -> RelationalRowSet {
    RelationalRowSet {
        zones: Some(vec![ZoneRow { zone_type: Zone::Domestic, available: true }]),
        methods: Some(vec![method(MethodType::Standard, true)]),
        delivery: Some(vec![DeliveryRow {
            method_type: MethodType::Standard,
            zone_type: Zone::Domestic,
            delivery_from: 2,
            delivery_to: 5,
            fee,
        }]),
        ..RelationalRowSet::default()
    }
}

#[test]
fn absent_rows_are_publishable() {
    assert!(validate(&transform(None)).is_empty());
}

#[test]
fn domestic_standard_shipping_is_publishable() {
    assert!(validate(&transform(Some(&domestic_standard_rows(10.0)))).is_empty());
}

#[test]
fn free_domestic_standard_shipping_is_publishable() {
    assert!(validate(&transform(Some(&domestic_standard_rows(0.0)))).is_empty());
}

#[test]
fn bare_same_day_row_reports_four_violations_in_order() {
    let rows = RelationalRowSet {
        methods: Some(vec![method(MethodType::SameDay, true)]),
        ..RelationalRowSet::default()
    };

    let violations = validate(&transform(Some(&rows)));
    assert_eq!(
        violations,
        [
            "Same-day delivery fee must be greater than 0",
            "Same-day cut-off time must be in HH:MM format",
            "Same-day delivery requires a time zone",
            "Same-day delivery requires at least one applicable city",
        ]
    );
}

#[test]
fn free_shipping_on_disabled_express_is_a_single_mismatch() {
    let mut rows = domestic_standard_rows(10.0);
    rows.methods = Some(vec![method(MethodType::Standard, true), method(MethodType::Express, false)]);
    rows.free_shipping_rules = Some(vec![FreeShippingRuleRow {
        threshold: Some(50.0),
        method_type: Some("express".to_owned()),
        ..FreeShippingRuleRow::default()
    }]);

    let tree = transform(Some(&rows));
    assert!(tree.free_shipping.available, "a rule row without `available` is enabled");
    assert_eq!(validate(&tree), ["Free shipping applies to Express shipping, which is not enabled"]);
}

#[test]
fn default_config_is_publishable() {
    assert_eq!(validate(&default_config()), Vec::<String>::new());
}

#[test]
fn disabled_zone_is_not_checked_even_with_empty_slot() {
    let mut tree = transform(Some(&domestic_standard_rows(10.0)));
    // Regional is disabled and its slot holds template zeros.
    tree.methods.express.available = true;
    tree.methods.express.per_zone.domestic.from = 1;
    tree.methods.express.per_zone.domestic.to = 1;

    assert!(validate(&tree).is_empty());
    assert!(!tree.zones.regional.available);
    assert_eq!(tree.methods.standard.per_zone.regional.fee, 0.0);
}

#[test]
fn same_day_zero_fee_is_invalid_while_timed_zero_fee_is_valid() {
    let mut tree = transform(Some(&domestic_standard_rows(0.0)));
    assert!(validate(&tree).is_empty());

    tree.methods.same_day.available = true;
    tree.methods.same_day.fee = 0.0;
    tree.methods.same_day.time_zone = "Europe/Warsaw".to_owned();
    tree.methods.same_day.applicable_cities = vec!["Krakow".to_owned()];

    assert_eq!(validate(&tree), ["Same-day delivery fee must be greater than 0"]);
}

#[test]
fn zero_rule_rows_override_an_enabled_template_rule() {
    // Even if the rule was enabled before, storing no rule rows means "disabled".
    let mut rows = domestic_standard_rows(10.0);
    rows.free_shipping_rules = Some(Vec::new());

    let tree = transform(Some(&rows));
    assert!(!tree.free_shipping.available);
    assert_eq!(tree.free_shipping.threshold, 0.0);
    assert!(tree.free_shipping.applicable_methods.is_empty());
    assert!(tree.free_shipping.excluded_countries.is_empty());
}

#[test]
fn one_enabled_zone_serves_both_timed_methods() {
    let mut tree = transform(Some(&domestic_standard_rows(10.0)));
    tree.methods.express.available = true;
    tree.methods.express.per_zone.domestic.from = 1;
    tree.methods.express.per_zone.domestic.to = 2;

    let violations = validate(&tree);
    assert!(violations.is_empty(), "unexpected violations: {violations:?}");
}
