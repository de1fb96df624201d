//! In-memory semantic model of a standard library.
//!
//! [`StdlibModel`] is populated through a small builder API and answers
//! namespace queries from hash maps. It stands in for the compiler's real
//! semantic model wherever one is not available, and [`standard`] builds the
//! standard-library shape the well-known catalog expects.
//!
//! Overloads are returned in insertion order.

mod standard;

pub use standard::packages;

use rustc_hash::FxHashMap;
use wk_ir::{Name, PackagePath, StringInterner};

use crate::{
    ClassDecl, ClassKey, DeclId, DeclKind, Declaration, FunctionDecl, NamespaceQuery, Scope, Type,
};

type ScopeTable = FxHashMap<Name, Vec<Declaration>>;

/// Builder-populated semantic model answering [`NamespaceQuery`].
#[derive(Default)]
pub struct StdlibModel {
    next_id: u32,
    packages: FxHashMap<PackagePath, ScopeTable>,
    members: FxHashMap<ClassKey, ScopeTable>,
    /// Package of each declared class, used as the package of its members.
    class_packages: FxHashMap<ClassKey, PackagePath>,
}

impl StdlibModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full standard library expected by the well-known catalog.
    pub fn standard_library(interner: &StringInterner) -> Self {
        standard::build(interner)
    }

    fn fresh_id(&mut self) -> DeclId {
        let id = DeclId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert_top_level(&mut self, package: &PackagePath, decl: Declaration) -> Declaration {
        self.packages
            .entry(package.clone())
            .or_default()
            .entry(decl.name)
            .or_default()
            .push(decl.clone());
        decl
    }

    /// Declare a class whose default type is the class applied to its own
    /// type parameters.
    pub fn add_class(
        &mut self,
        package: &PackagePath,
        name: Name,
        type_params: Vec<Name>,
    ) -> Declaration {
        let args = type_params.iter().copied().map(Type::Param).collect();
        let default_type = Type::generic(package.clone(), name, args);
        self.add_class_with_type(package, name, type_params, default_type)
    }

    /// Declare a class with an explicit default type.
    ///
    /// Used for the primitive and primitive-array classes, whose default
    /// types are `Type::Primitive` / `Type::PrimitiveArray` rather than a
    /// `Type::Class`.
    pub fn add_class_with_type(
        &mut self,
        package: &PackagePath,
        name: Name,
        type_params: Vec<Name>,
        default_type: Type,
    ) -> Declaration {
        self.class_packages
            .insert(default_type.class_key(), package.clone());
        let decl = Declaration {
            id: self.fresh_id(),
            name,
            kind: DeclKind::Class(ClassDecl {
                package: package.clone(),
                type_params,
                default_type,
            }),
        };
        self.insert_top_level(package, decl)
    }

    /// Declare a top-level function.
    pub fn add_function(
        &mut self,
        package: &PackagePath,
        name: Name,
        params: Vec<Type>,
        return_type: Type,
    ) -> Declaration {
        self.add_top_level_function(package, name, None, params, return_type)
    }

    /// Declare a top-level extension function on `receiver`.
    pub fn add_extension(
        &mut self,
        package: &PackagePath,
        name: Name,
        receiver: Type,
        params: Vec<Type>,
        return_type: Type,
    ) -> Declaration {
        self.add_top_level_function(package, name, Some(receiver), params, return_type)
    }

    fn add_top_level_function(
        &mut self,
        package: &PackagePath,
        name: Name,
        extension_receiver: Option<Type>,
        params: Vec<Type>,
        return_type: Type,
    ) -> Declaration {
        let decl = Declaration {
            id: self.fresh_id(),
            name,
            kind: DeclKind::Function(FunctionDecl {
                package: package.clone(),
                params,
                return_type,
                owner: None,
                extension_receiver,
            }),
        };
        self.insert_top_level(package, decl)
    }

    /// Declare a member function in the member scope of `owner`.
    pub fn add_member(
        &mut self,
        owner: &Type,
        name: Name,
        params: Vec<Type>,
        return_type: Type,
    ) -> Declaration {
        let key = owner.class_key();
        let package = self.class_packages.get(&key).cloned().unwrap_or_default();
        let decl = Declaration {
            id: self.fresh_id(),
            name,
            kind: DeclKind::Function(FunctionDecl {
                package,
                params,
                return_type,
                owner: Some(owner.clone()),
                extension_receiver: None,
            }),
        };
        self.members
            .entry(key)
            .or_default()
            .entry(name)
            .or_default()
            .push(decl.clone());
        decl
    }

    /// Remove every declaration named `name` in `scope`, returning how many
    /// were removed.
    pub fn remove(&mut self, scope: &Scope, name: Name) -> usize {
        let table = match scope {
            Scope::Package(path) => self.packages.get_mut(path),
            Scope::Members(ty) => self.members.get_mut(&ty.class_key()),
        };
        table
            .and_then(|table| table.remove(&name))
            .map_or(0, |removed| removed.len())
    }

    /// Total number of declarations currently visible.
    pub fn len(&self) -> usize {
        self.packages
            .values()
            .chain(self.members.values())
            .flat_map(|table| table.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NamespaceQuery for StdlibModel {
    fn lookup(&self, scope: &Scope, name: Name) -> Vec<Declaration> {
        let table = match scope {
            Scope::Package(path) => self.packages.get(path),
            Scope::Members(ty) => self.members.get(&ty.class_key()),
        };
        let found = table
            .and_then(|table| table.get(&name))
            .cloned()
            .unwrap_or_default();
        tracing::trace!(?scope, ?name, found = found.len(), "namespace lookup");
        found
    }
}
