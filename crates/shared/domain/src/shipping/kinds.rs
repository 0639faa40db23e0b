use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of four mutually exclusive geographic tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Domestic,
    SubRegional,
    Regional,
    Global,
}

impl Zone {
    /// All zones in their canonical order.
    pub const ALL: [Self; 4] = [Self::Domestic, Self::SubRegional, Self::Regional, Self::Global];

    /// The wire identifier (`zone_type` column value).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::SubRegional => "sub_regional",
            Self::Regional => "regional",
            Self::Global => "global",
        }
    }

    /// Human-readable label used in violation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Domestic => "Domestic",
            Self::SubRegional => "Sub-regional",
            Self::Regional => "Regional",
            Self::Global => "Global",
        }
    }

    /// Cities are excluded inside the domestic zone; countries everywhere else.
    #[must_use]
    pub const fn exclusion_type(self) -> ExclusionType {
        match self {
            Self::Domestic => ExclusionType::City,
            Self::SubRegional | Self::Regional | Self::Global => ExclusionType::Country,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of three shipping speeds, as stored in the `method_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodType {
    SameDay,
    Standard,
    Express,
}

impl MethodType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameDay => "same_day",
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TimedMethodKind> for MethodType {
    fn from(kind: TimedMethodKind) -> Self {
        match kind {
            TimedMethodKind::Standard => Self::Standard,
            TimedMethodKind::Express => Self::Express,
        }
    }
}

/// The methods priced per zone with a delivery window (everything except same-day).
///
/// Free-shipping rules may only name these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimedMethodKind {
    Standard,
    Express,
}

impl TimedMethodKind {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Express => "Express",
        }
    }
}

impl fmt::Display for TimedMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a `method_type` string does not name a timed method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a standard or express method", self.0)
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for TimedMethodKind {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            other => Err(UnknownMethod(other.to_owned())),
        }
    }
}

/// What an exclusion row excludes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionType {
    City,
    Country,
}

/// A total map from [`Zone`] to `T`.
///
/// Serialized as an object keyed by the wire zone identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerZone<T> {
    pub domestic: T,
    pub sub_regional: T,
    pub regional: T,
    pub global: T,
}

impl<T> PerZone<T> {
    /// Builds a map by calling `f` once per zone, in canonical order.
    pub fn from_fn(mut f: impl FnMut(Zone) -> T) -> Self {
        Self {
            domestic: f(Zone::Domestic),
            sub_regional: f(Zone::SubRegional),
            regional: f(Zone::Regional),
            global: f(Zone::Global),
        }
    }

    #[must_use]
    pub const fn get(&self, zone: Zone) -> &T {
        match zone {
            Zone::Domestic => &self.domestic,
            Zone::SubRegional => &self.sub_regional,
            Zone::Regional => &self.regional,
            Zone::Global => &self.global,
        }
    }

    pub const fn get_mut(&mut self, zone: Zone) -> &mut T {
        match zone {
            Zone::Domestic => &mut self.domestic,
            Zone::SubRegional => &mut self.sub_regional,
            Zone::Regional => &mut self.regional,
            Zone::Global => &mut self.global,
        }
    }

    /// Iterates `(zone, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &T)> {
        Zone::ALL.into_iter().map(|zone| (zone, self.get(zone)))
    }
}
