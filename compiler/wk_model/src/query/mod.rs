//! Namespace query boundary.

use wk_ir::{Name, PackagePath, StringInterner};

use crate::{Declaration, Type};

/// Where a name is looked up.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Top-level declarations of a package.
    Package(PackagePath),
    /// Member declarations of a type, selected by its class key.
    Members(Type),
}

impl Scope {
    /// Render the scope for diagnostics (`std.collections`, `members of Int`).
    pub fn describe(&self, interner: &StringInterner) -> String {
        match self {
            Scope::Package(path) => path.display(interner).to_string(),
            Scope::Members(ty) => format!("members of {}", ty.display(interner)),
        }
    }
}

/// Looks up declarations visible under a name.
///
/// Implementations return every class and function named `name` in `scope`,
/// including all overloads, in a stable order. An unknown scope yields an
/// empty list.
pub trait NamespaceQuery: Send + Sync {
    fn lookup(&self, scope: &Scope, name: Name) -> Vec<Declaration>;
}

impl<Q: NamespaceQuery + ?Sized> NamespaceQuery for &Q {
    fn lookup(&self, scope: &Scope, name: Name) -> Vec<Declaration> {
        (**self).lookup(scope, name)
    }
}
