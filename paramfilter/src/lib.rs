//! Scope-aware redaction of sensitive parameters before logging.
//!
//! A [`ParamFilter`] holds a normalized table of sensitive field names, optionally
//! scoped per logical service, and produces a sanitized deep copy of any parameter
//! tree with matching values replaced by [`FILTERED`].
//!
//! What this crate does:
//! - normalizes declarative rules ([`FilterSpec`]) into a [`FilterRuleSet`]
//! - walks mappings, sequences, records, and scalars through the [`Params`] contract
//! - matches field names case-insensitively and preserves the original key spelling
//! - provides log-sink adapters for `tracing` and (behind a feature flag) `slog`
//!
//! What it does not do:
//! - configure a logger or load rules from disk
//! - inspect values (no pattern-based detection)
//!
//! The `Record` derive macro lives in `paramfilter-derive` and is re-exported
//! from this crate.
//!
//! # Example
//!
//! ```rust
//! use paramfilter::{FILTERED, ParamFilter};
//! use serde_json::json;
//!
//! let filter = ParamFilter::builder()
//!     .scope("Identity Service", ["password"])
//!     .build()
//!     .unwrap();
//!
//! let params = json!({"username": "peccy", "Password": "p@ssw0rd"});
//! let filtered = filter.filter("Identity Service", &params);
//!
//! assert_eq!(filtered["username"], "peccy");
//! assert_eq!(filtered["Password"], FILTERED);
//! ```
//!
//! Structs opt in with `#[derive(Record)]`, which reports every field under its
//! declared spelling:
//!
//! ```ignore
//! #[derive(paramfilter::Record)]
//! struct Login {
//!     username: String,
//!     password: String,
//! }
//!
//! let filtered = filter.filter("Identity Service", &login);
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use paramfilter_derive::Record;
pub use serde_json;

#[allow(unused_extern_crates)]
extern crate self as paramfilter;

mod error;
mod filter;
mod output;
mod rules;
#[cfg(feature = "slog")]
pub mod slog;
pub mod tracing;
mod traverse;

pub use error::FilterError;
pub use filter::{DEFAULT_MAX_DEPTH, FILTERED, FilterBuilder, ParamFilter, UNSERIALIZABLE};
pub use output::FilteredParams;
pub use rules::{FilterRuleSet, FilterSpec, Matchers, WILDCARD_SCOPE, normalize_field_name};
pub use traverse::{Params, Shape};
