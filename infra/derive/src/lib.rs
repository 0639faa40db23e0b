#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the back-office crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! bazaar-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for the crate-level error enums.
///
/// Turns a plain enum into a `thiserror` error that carries an optional human-readable
/// context on each variant.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<ErrorName>Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>` and to results of every wrapped upstream error.
/// * **Standard Conversions**: Implements `From<T>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
/// * **Formatting**: Emits a module-private `format_context` helper for the `#[error]` strings.
///   Use the macro at most once per module.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Context fields are named `context` and typed `Option<Cow<'static, str>>`.
/// 3. Variants wrapping an upstream error must also have a context field.
///
/// # Example
///
/// ```rust,ignore
/// use bazaar_derive::bazaar_error;
/// use std::borrow::Cow;
///
/// #[bazaar_error]
/// pub enum StoreError {
///     #[error("Store I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, StoreError> {
///     std::fs::read_to_string(path).context("Reading shipping rows")
/// }
/// ```
#[proc_macro_attribute]
pub fn bazaar_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
