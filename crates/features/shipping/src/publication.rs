//! Draft/valid status and delayed publication.
//!
//! A configuration with violations stays a draft. Publishing a valid configuration takes
//! effect for buyers only after the configured delay (48 hours by default).

use crate::error::ShippingError;
use crate::store::BrandId;
use crate::validator::{ValidationReport, validate};
use bazaar_kernel::domain::config::ShippingSettings;
use bazaar_kernel::domain::shipping::ConfigurationTree;
use chrono::{DateTime, TimeDelta, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Publishability of a configuration tree.
///
/// Serializes as `{"status": "valid" | "draft", "violations": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingStatus {
    Draft { violations: Vec<String> },
    Valid,
}

impl ShippingStatus {
    #[must_use]
    pub fn of(tree: &ConfigurationTree) -> Self {
        Self::from_violations(validate(tree))
    }

    #[must_use]
    pub fn from_violations(violations: Vec<String>) -> Self {
        if violations.is_empty() { Self::Valid } else { Self::Draft { violations } }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Draft { .. } => "draft",
            Self::Valid => "valid",
        }
    }

    /// Empty for a valid configuration.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Draft { violations } => violations,
            Self::Valid => &[],
        }
    }
}

impl From<ValidationReport> for ShippingStatus {
    fn from(report: ValidationReport) -> Self {
        Self::from_violations(report.into_violations())
    }
}

impl Serialize for ShippingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ShippingStatus", 2)?;
        state.serialize_field("status", self.label())?;
        state.serialize_field("violations", self.violations())?;
        state.end()
    }
}

/// Receipt of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub brand: BrandId,
    pub published_at: DateTime<Utc>,
    /// When buyers start seeing the new configuration.
    pub effective_at: DateTime<Utc>,
}

impl Publication {
    /// # Errors
    /// Returns [`ShippingError::Internal`] if the effective date falls outside the supported
    /// calendar range.
    pub fn new(
        brand: BrandId,
        published_at: DateTime<Utc>,
        delay: TimeDelta,
    ) -> Result<Self, ShippingError> {
        let effective_at = published_at.checked_add_signed(delay).ok_or_else(|| {
            ShippingError::from(format!(
                "Publish delay of {} hours overflows the calendar",
                delay.num_hours()
            ))
        })?;
        Ok(Self { brand, published_at, effective_at })
    }

    #[must_use]
    pub fn is_effective(&self, now: DateTime<Utc>) -> bool {
        now >= self.effective_at
    }
}

/// The publish delay configured for the shipping slice.
#[must_use]
pub fn publish_delay(settings: &ShippingSettings) -> TimeDelta {
    TimeDelta::hours(i64::from(settings.publish_delay_hours))
}
