use std::borrow::Cow;

/// Error types specific to the shipping feature.
///
/// Transforming and validating never fail; these cover the store, the save path and JSON
/// decoding at the edges.
#[bazaar_derive::bazaar_error]
pub enum ShippingError {
    /// The persistence adapter failed to read or write row groups.
    #[error("Shipping store error{}: {message}", format_context(.context))]
    Store { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A save was refused because the configuration is not publishable.
    #[error(
        "Shipping configuration rejected{} with {} violation(s): {}",
        format_context(.context),
        .violations.len(),
        .violations.join("; ")
    )]
    Rejected { violations: Vec<String>, context: Option<Cow<'static, str>> },

    /// JSON (de)serialization error with optional context.
    #[error("Shipping serialization error{}: {source}", format_context(.context))]
    Serde { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal shipping error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ShippingError {
    /// The violations behind a [`ShippingError::Rejected`], empty for every other variant.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Rejected { violations, .. } => violations.as_slice(),
            _ => &[],
        }
    }
}
