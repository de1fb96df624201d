//! Declarations of standard-library classes and functions.
//!
//! A `Declaration` is what the namespace query hands back: an identity
//! ([`DeclId`]), a name, and either a class or a function signature. The
//! registry never builds declarations itself; it only filters and interns
//! the ones the model reports.

use wk_ir::{Name, PackagePath};

use crate::Type;

/// Identity of a declaration within one semantic model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DeclId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A class declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDecl {
    pub package: PackagePath,
    pub type_params: Vec<Name>,
    /// The class applied to its own type parameters (`Array<T>`).
    ///
    /// For primitive classes this is `Type::Primitive`, for primitive array
    /// classes `Type::PrimitiveArray`.
    pub default_type: Type,
}

/// A function declaration, top-level or member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Package the function (or its owner class) is declared in.
    pub package: PackagePath,
    /// Ordered parameter types, excluding any receiver.
    pub params: Vec<Type>,
    pub return_type: Type,
    /// The type whose member scope declares this function.
    pub owner: Option<Type>,
    /// The receiver of an extension function.
    pub extension_receiver: Option<Type>,
}

impl FunctionDecl {
    /// Whether the parameter list equals `args` position by position.
    pub fn params_match(&self, args: &[Type]) -> bool {
        self.params.len() == args.len() && self.params.iter().zip(args).all(|(p, a)| p == a)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclKind {
    Class(ClassDecl),
    Function(FunctionDecl),
}

/// A class or function declared by the semantic model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub id: DeclId,
    pub name: Name,
    pub kind: DeclKind,
}

impl Declaration {
    pub fn as_class(&self) -> Option<&ClassDecl> {
        match &self.kind {
            DeclKind::Class(class) => Some(class),
            DeclKind::Function(_) => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDecl> {
        match &self.kind {
            DeclKind::Function(function) => Some(function),
            DeclKind::Class(_) => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, DeclKind::Class(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, DeclKind::Function(_))
    }

    /// Short description of the kind, for error messages.
    pub fn kind_str(&self) -> &'static str {
        match self.kind {
            DeclKind::Class(_) => "class",
            DeclKind::Function(_) => "function",
        }
    }
}
