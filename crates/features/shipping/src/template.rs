//! Default configuration template.
//!
//! Every call builds a fresh tree, so callers may mutate their copy freely. All
//! availability flags are off and all lists empty; the few non-zero values keep the
//! template itself valid.

use bazaar_kernel::domain::shipping::{
    ConfigurationTree, FreeShippingRule, HandlingTime, Methods, PerZone, SameDayMethod,
    TimedMethod, Zone, ZoneConfig,
};

/// Handling time upper bound of a fresh configuration. Must be at least 1.
pub const DEFAULT_HANDLING_TIME_TO: i32 = 1;

/// Same-day cut-off used while no same-day method has been stored.
pub const DEFAULT_CUT_OFF_TIME: &str = "12:00";

/// Builds the default shipping configuration.
#[must_use]
pub fn default_config() -> ConfigurationTree {
    ConfigurationTree {
        handling_time: HandlingTime { from: 0, to: DEFAULT_HANDLING_TIME_TO },
        zones: PerZone::from_fn(default_zone),
        methods: Methods {
            same_day: default_same_day(),
            standard: TimedMethod::default(),
            express: TimedMethod::default(),
        },
        free_shipping: FreeShippingRule::disabled(),
    }
}

/// A disabled zone carrying an empty exclusion list of the kind that zone supports.
#[must_use]
pub fn default_zone(zone: Zone) -> ZoneConfig {
    let mut config = ZoneConfig::default();
    config.set_exclusions(zone, Vec::new());
    config
}

#[must_use]
pub fn default_same_day() -> SameDayMethod {
    SameDayMethod {
        available: false,
        fee: 0.0,
        cut_off_time: DEFAULT_CUT_OFF_TIME.to_owned(),
        time_zone: String::new(),
        applicable_cities: Vec::new(),
    }
}
