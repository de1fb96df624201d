//! Well-known standard-library symbol registry.
//!
//! Code generation refers to a fixed set of standard-library entities
//! (`Any`, `IntArray`, `Iterator.next`, the failure throwers, ...) and to
//! overloaded operators picked by operand types. This crate resolves both
//! against a semantic model and hands out stable [`Symbol`] handles.
//!
//! # Architecture
//!
//! - [`catalog`]: eager, table-driven resolution of every [`WellKnown`] entry
//! - [`resolve`]: structural overload resolution by parameter types
//! - [`memo`]: at-most-once caching of operator lookups
//! - [`derived`]: grouped views (integer classes, array classes, progressions)
//! - [`registry`]: the [`SymbolRegistry`] facade tying them together
//!
//! The semantic model is reached only through the
//! [`NamespaceQuery`](wk_model::NamespaceQuery) and
//! [`SymbolTable`](wk_model::SymbolTable) traits from `wk_model`.
//!
//! # Debugging
//!
//! Call [`init_tracing`] and set `RUST_LOG=wk_symbols=debug` to see catalog
//! construction and memo misses, or `RUST_LOG=wk_symbols=trace` for every
//! lookup.

pub mod catalog;
pub mod derived;
mod error;
pub mod memo;
pub mod names;
pub mod registry;
pub mod resolve;

pub use catalog::{ArityPolicy, ArrayAccessors, Catalog, CatalogEntry, EntryKind, WellKnown};
pub use derived::DerivedCollections;
pub use error::{CatalogError, OverloadError};
pub use memo::{BinaryKey, MemoTable, UnaryKey};
pub use names::OperatorNames;
pub use registry::SymbolRegistry;
pub use resolve::OverloadResolver;
pub use wk_model::Symbol;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
