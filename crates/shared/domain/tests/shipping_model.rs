use bazaar_domain::shipping::{
    ExclusionType, MethodType, PerZone, RelationalRowSet, TimedMethodKind, Zone, ZoneConfig,
};
use serde_json::json;

#[test]
fn zone_wire_names_match_storage() {
    let names: Vec<&str> = Zone::ALL.iter().map(|zone| zone.as_str()).collect();
    assert_eq!(names, ["domestic", "sub_regional", "regional", "global"]);
    assert_eq!(serde_json::to_value(Zone::SubRegional).unwrap(), json!("sub_regional"));
    assert_eq!(serde_json::to_value(MethodType::SameDay).unwrap(), json!("same_day"));
}

#[test]
fn only_domestic_excludes_cities() {
    assert_eq!(Zone::Domestic.exclusion_type(), ExclusionType::City);
    for zone in [Zone::SubRegional, Zone::Regional, Zone::Global] {
        assert_eq!(zone.exclusion_type(), ExclusionType::Country);
    }
}

#[test]
fn timed_method_kind_parses_only_timed_methods() {
    assert_eq!("standard".parse::<TimedMethodKind>(), Ok(TimedMethodKind::Standard));
    assert_eq!("express".parse::<TimedMethodKind>(), Ok(TimedMethodKind::Express));
    assert!("same_day".parse::<TimedMethodKind>().is_err());
    assert!("".parse::<TimedMethodKind>().is_err());
}

#[test]
fn per_zone_iterates_in_canonical_order() {
    let map = PerZone::from_fn(|zone| zone.as_str().len());
    let zones: Vec<Zone> = map.iter().map(|(zone, _)| zone).collect();
    assert_eq!(zones, Zone::ALL);
    assert_eq!(*map.get(Zone::SubRegional), "sub_regional".len());
}

#[test]
fn zone_config_routes_exclusions_by_zone() {
    let mut config = ZoneConfig::default();
    config.set_exclusions(Zone::Domestic, vec!["Springfield".to_owned()]);
    assert_eq!(config.exclusions(Zone::Domestic), Some(&["Springfield".to_owned()][..]));
    assert_eq!(config.exclusions(Zone::Global), None);
}

#[test]
fn null_and_missing_groups_are_empty() {
    let rows: RelationalRowSet = serde_json::from_value(json!({
        "methods": null,
        "zones": [],
    }))
    .expect("row set deserialize");

    assert!(rows.is_empty());
    assert!(rows.methods().is_empty());
    assert!(rows.delivery().is_empty());
}

#[test]
fn row_set_deserializes_storage_shapes() {
    let rows: RelationalRowSet = serde_json::from_value(json!({
        "header": { "handling_time_from": 1, "handling_time_to": 3 },
        "methods": [{ "method_type": "same_day", "available": true, "cut_off_time": "14:30:00" }],
        "delivery": [{
            "method_type": "standard", "zone_type": "regional",
            "delivery_from": 2, "delivery_to": 5, "fee": 9.5
        }],
        "exclusions": [{ "zone_type": "global", "exclusion_type": "country", "value": "AQ" }],
        "free_shipping_rules": [{ "threshold": 100 }],
        "same_day_cities": [{ "city_name": "Lviv" }]
    }))
    .expect("row set deserialize");

    assert!(!rows.is_empty());
    assert_eq!(rows.method(MethodType::SameDay).and_then(|m| m.cut_off_time.as_deref()), Some("14:30:00"));
    assert_eq!(rows.delivery_for(MethodType::Standard, Zone::Regional).map(|d| d.fee), Some(9.5));
    assert!(rows.delivery_for(MethodType::Express, Zone::Regional).is_none());
    assert_eq!(rows.exclusion_values(Zone::Global, ExclusionType::Country), ["AQ"]);
    assert_eq!(rows.free_shipping_rules()[0].available, None);
}
