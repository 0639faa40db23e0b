//! Shipping configuration models: the nested [`ConfigurationTree`] and its normalized
//! storage form, [`RelationalRowSet`].

mod kinds;
mod rows;
mod tree;

pub use kinds::{ExclusionType, MethodType, PerZone, TimedMethodKind, UnknownMethod, Zone};
pub use rows::{
    DeliveryRow, ExclusionRow, FreeShippingRuleRow, MethodRow, RelationalRowSet, SameDayCityRow,
    ShippingHeader, ZoneRow,
};
pub use tree::{
    ConfigurationTree, DeliveryWindow, FreeShippingRule, HandlingTime, Methods, SameDayMethod,
    TimedMethod, ZoneConfig,
};
