#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `HeroHub` workspace.
//!
//! * [`macro@main`] bootstraps the tuned Tokio runtime from `hhub-runtime`.
//! * [`macro@api_model`] and [`macro@api_handler`] keep DTOs and Axum handlers consistent with
//!   the `OpenAPI` document.
//! * [`macro@hhub_error`] turns a plain enum into a context-aware error type.
//! * [`macro@hhub_slice`] wraps feature state so it can be registered in the API state.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a synchronous entry point running on a
/// `hhub-runtime` profile.
///
/// # Arguments
///
/// * `high_performance` - server profile with larger stacks and long-lived workers.
/// * `memory_efficient` - half the workers and smaller stacks.
/// * `default` (or no argument) - auto-detected worker count.
///
/// # Examples
///
/// ```rust,ignore
/// #[hhub_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data transfer object.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` unless already present.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * **Serde Policy**:
///     * `rename_all = "snake_case"` unless overridden, matching the public wire format.
///     * `deny_unknown_fields` unless disabled.
///
/// # Example
///
/// ```rust,ignore
/// use hhub_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct HeroSummary {
///     pub id: i32,
///     pub super_name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with the `OpenAPI` document.
///
/// Arguments are forwarded verbatim to `utoipa::path` (`get`, `path = "..."`, `responses(...)`,
/// `tag = ...`). The attribute is only emitted with the `server` feature, so the handler stays a
/// plain async function otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use hhub_derive::api_handler;
///
/// #[api_handler(get, path = "/heroes", responses((status = OK, body = [HeroSummary])))]
/// pub async fn list_heroes() -> Json<Vec<HeroSummary>> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Defines a workspace error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and to results carrying the
///   source type of any variant with a `source` field.
/// * `From<Source>` for every variant holding a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * `Name::kind(&self) -> &'static str` returning the variant name, for structured logs.
/// * A private `format_context` helper used inside `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[hhub_derive::hhub_error]
/// pub enum StoreError {
///     #[error("Database error{}: {source}", format_context(.context))]
///     Database { source: sea_orm::DbErr, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<(), StoreError> {
///     run_query().context("Loading heroes")?;
///     Err("unreachable state".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn hhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares the shared state of a feature slice.
///
/// Generates `<Name>Inner` with the declared fields, an `Arc`-backed `<Name>` handle that derefs to
/// it, and the `FeatureSlice` impl used by the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[hhub_derive::hhub_slice]
/// pub struct Roster {
///     pub service: RosterService,
/// }
///
/// let slice = Roster::new(RosterInner { service });
/// ```
#[proc_macro_attribute]
pub fn hhub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
