//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it re-exports the domain crate and provides layered config
//! loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use bazaar_kernel::config::load_config;
//! use bazaar_kernel::domain::config::BackofficeConfig;
//!
//! let cfg: BackofficeConfig = load_config(Some("config/backoffice")).unwrap_or_default();
//! ```
pub mod config;

pub use bazaar_domain as domain;
