//! The semantic-model boundary of the well-known symbol registry.
//!
//! The registry does not own a semantic model. It talks to one through two
//! services defined here:
//!
//! - [`NamespaceQuery`]: declarations visible under a name in a package or
//!   in a type's member scope
//! - [`SymbolTable`]: interning of declarations into stable [`Symbol`] handles
//!
//! Alongside the traits this crate provides the data they exchange
//! ([`Type`], [`Declaration`]) and in-memory implementations of both services
//! ([`StdlibModel`], [`InternedSymbolTable`]).

mod decl;
mod query;
mod stdlib;
mod symbol;
mod ty;

pub use decl::{ClassDecl, DeclId, DeclKind, Declaration, FunctionDecl};
pub use query::{NamespaceQuery, Scope};
pub use stdlib::{packages, StdlibModel};
pub use symbol::{InternedSymbolTable, Symbol, SymbolTable};
pub use ty::{display_params, ClassKey, ClassType, PrimitiveKind, Type, TypeDisplay};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{DeclId, Symbol};
    wk_ir::static_assert_size!(Symbol, 4);
    wk_ir::static_assert_size!(DeclId, 4);
}
