//! Structural type identities for standard-library types.
//!
//! Unlike the compiler's inference types, these are plain values compared by
//! structural equality: two `Type`s built independently from the same pieces
//! are equal and hash equally, which is what overload matching and the
//! operator caches key on.
//!
//! Primitive types and arrays of primitives form a small closed set and get
//! dedicated variants; every other named type is a [`ClassType`].

use std::fmt;

use wk_ir::{Name, PackagePath, StringInterner};

/// The closed set of primitive kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveKind {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Char,
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Integer kinds, narrowest first.
    pub const INTEGERS: [PrimitiveKind; 4] = [
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
    ];

    /// Numeric kinds, narrowest first.
    pub const NUMERIC: [PrimitiveKind; 6] = [
        PrimitiveKind::Byte,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Class name of the primitive (`Int`).
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Int",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
        }
    }

    /// Class name of the array of this primitive (`IntArray`).
    pub const fn array_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "BooleanArray",
            PrimitiveKind::Char => "CharArray",
            PrimitiveKind::Byte => "ByteArray",
            PrimitiveKind::Short => "ShortArray",
            PrimitiveKind::Int => "IntArray",
            PrimitiveKind::Long => "LongArray",
            PrimitiveKind::Float => "FloatArray",
            PrimitiveKind::Double => "DoubleArray",
        }
    }

    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long
        )
    }

    pub const fn is_floating(self) -> bool {
        matches!(self, PrimitiveKind::Float | PrimitiveKind::Double)
    }

    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_floating()
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, possibly generic, non-primitive type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassType {
    pub package: PackagePath,
    pub name: Name,
    pub args: Vec<Type>,
}

/// Structural type identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Primitive(PrimitiveKind),
    PrimitiveArray(PrimitiveKind),
    Class(ClassType),
    /// Reference to a type parameter of the enclosing declaration.
    Param(Name),
}

impl Type {
    pub const BOOLEAN: Type = Type::Primitive(PrimitiveKind::Boolean);
    pub const CHAR: Type = Type::Primitive(PrimitiveKind::Char);
    pub const BYTE: Type = Type::Primitive(PrimitiveKind::Byte);
    pub const SHORT: Type = Type::Primitive(PrimitiveKind::Short);
    pub const INT: Type = Type::Primitive(PrimitiveKind::Int);
    pub const LONG: Type = Type::Primitive(PrimitiveKind::Long);
    pub const FLOAT: Type = Type::Primitive(PrimitiveKind::Float);
    pub const DOUBLE: Type = Type::Primitive(PrimitiveKind::Double);

    /// A non-generic class type.
    pub fn class(package: PackagePath, name: Name) -> Self {
        Type::Class(ClassType {
            package,
            name,
            args: Vec::new(),
        })
    }

    /// A class type applied to type arguments.
    pub fn generic(package: PackagePath, name: Name, args: Vec<Type>) -> Self {
        Type::Class(ClassType {
            package,
            name,
            args,
        })
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Type::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// The head constructor of this type, without type arguments.
    ///
    /// Member scopes are keyed by class key: `Array<Int>` and `Array<T>` share
    /// the members of `Array`.
    pub fn class_key(&self) -> ClassKey {
        match self {
            Type::Primitive(kind) => ClassKey::Primitive(*kind),
            Type::PrimitiveArray(kind) => ClassKey::PrimitiveArray(*kind),
            Type::Class(class) => ClassKey::Class {
                package: class.package.clone(),
                name: class.name,
            },
            Type::Param(name) => ClassKey::Param(*name),
        }
    }

    /// Render the type with names resolved through `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> TypeDisplay<'a> {
        TypeDisplay { ty: self, interner }
    }
}

/// Head constructor of a [`Type`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassKey {
    Primitive(PrimitiveKind),
    PrimitiveArray(PrimitiveKind),
    Class { package: PackagePath, name: Name },
    Param(Name),
}

/// Human-readable rendering of a [`Type`]; package paths are omitted.
pub struct TypeDisplay<'a> {
    ty: &'a Type,
    interner: &'a StringInterner,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Type::Primitive(kind) => f.write_str(kind.name()),
            Type::PrimitiveArray(kind) => f.write_str(kind.array_name()),
            Type::Param(name) => f.write_str(self.interner.lookup(*name)),
            Type::Class(class) => {
                f.write_str(self.interner.lookup(class.name))?;
                if !class.args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in class.args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg.display(self.interner))?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
        }
    }
}

/// Render a parameter list as `(Int, Long)`.
pub fn display_params(params: &[Type], interner: &StringInterner) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|ty| ty.display(interner).to_string())
        .collect();
    format!("({})", rendered.join(", "))
}
