//! The well-known catalog as data.
//!
//! Every entry the code generator can ask for is a [`WellKnown`] variant, and
//! every variant has exactly one [`CatalogRule`] saying where to look, what
//! name to look for, what kind of declaration it must be, and how many
//! declarations are acceptable. Adding an entry means adding a variant and a
//! row; the resolver itself never changes.

use std::fmt;

use wk_model::packages::{COLLECTIONS, INTERNAL, RANGES, REFLECT, STD, TEXT};
use wk_model::PrimitiveKind;

use WellKnown as W;

/// Logical name of a cataloged standard-library entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WellKnown {
    // Failure throwers
    ThrowNullPointerException,
    ThrowNoWhenBranchMatchedException,
    ThrowTypeCastException,
    ThrowUninitializedPropertyAccessException,

    // Core classes
    Any,
    Unit,
    Nothing,
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Throwable,

    Iterator,
    StringBuilder,
    DefaultConstructorMarker,

    // Arrays
    Array,
    BooleanArray,
    CharArray,
    ByteArray,
    ShortArray,
    IntArray,
    LongArray,
    FloatArray,
    DoubleArray,

    // Progressions
    CharProgression,
    IntProgression,
    LongProgression,

    // Reflection support
    FunctionReferenceImpl,
    Property0Impl,
    Property1Impl,
    Property2Impl,
    MutableProperty0Impl,
    MutableProperty1Impl,
    MutableProperty2Impl,

    // Members
    AnyEquals,
    AnyHashCode,
    AnyToString,
    IteratorHasNext,
    IteratorNext,

    // Overload groups
    Assert,
    AreEqualByValue,
    Ieee754Equals,
}

impl WellKnown {
    /// Number of catalog entries.
    pub const COUNT: usize = 47;

    /// Every entry, in resolution order.
    pub const ALL: [WellKnown; Self::COUNT] = [
        WellKnown::ThrowNullPointerException,
        WellKnown::ThrowNoWhenBranchMatchedException,
        WellKnown::ThrowTypeCastException,
        WellKnown::ThrowUninitializedPropertyAccessException,
        WellKnown::Any,
        WellKnown::Unit,
        WellKnown::Nothing,
        WellKnown::Boolean,
        WellKnown::Char,
        WellKnown::Byte,
        WellKnown::Short,
        WellKnown::Int,
        WellKnown::Long,
        WellKnown::Float,
        WellKnown::Double,
        WellKnown::String,
        WellKnown::Throwable,
        WellKnown::Iterator,
        WellKnown::StringBuilder,
        WellKnown::DefaultConstructorMarker,
        WellKnown::Array,
        WellKnown::BooleanArray,
        WellKnown::CharArray,
        WellKnown::ByteArray,
        WellKnown::ShortArray,
        WellKnown::IntArray,
        WellKnown::LongArray,
        WellKnown::FloatArray,
        WellKnown::DoubleArray,
        WellKnown::CharProgression,
        WellKnown::IntProgression,
        WellKnown::LongProgression,
        WellKnown::FunctionReferenceImpl,
        WellKnown::Property0Impl,
        WellKnown::Property1Impl,
        WellKnown::Property2Impl,
        WellKnown::MutableProperty0Impl,
        WellKnown::MutableProperty1Impl,
        WellKnown::MutableProperty2Impl,
        WellKnown::AnyEquals,
        WellKnown::AnyHashCode,
        WellKnown::AnyToString,
        WellKnown::IteratorHasNext,
        WellKnown::IteratorNext,
        WellKnown::Assert,
        WellKnown::AreEqualByValue,
        WellKnown::Ieee754Equals,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The resolution rule for this entry.
    #[inline]
    pub fn rule(self) -> &'static CatalogRule {
        &CATALOG_RULES[self.index()]
    }

    /// Catalog entry of the class for a primitive kind.
    pub const fn primitive(kind: PrimitiveKind) -> WellKnown {
        match kind {
            PrimitiveKind::Boolean => WellKnown::Boolean,
            PrimitiveKind::Char => WellKnown::Char,
            PrimitiveKind::Byte => WellKnown::Byte,
            PrimitiveKind::Short => WellKnown::Short,
            PrimitiveKind::Int => WellKnown::Int,
            PrimitiveKind::Long => WellKnown::Long,
            PrimitiveKind::Float => WellKnown::Float,
            PrimitiveKind::Double => WellKnown::Double,
        }
    }

    /// Catalog entry of the array class for a primitive kind.
    pub const fn primitive_array(kind: PrimitiveKind) -> WellKnown {
        match kind {
            PrimitiveKind::Boolean => WellKnown::BooleanArray,
            PrimitiveKind::Char => WellKnown::CharArray,
            PrimitiveKind::Byte => WellKnown::ByteArray,
            PrimitiveKind::Short => WellKnown::ShortArray,
            PrimitiveKind::Int => WellKnown::IntArray,
            PrimitiveKind::Long => WellKnown::LongArray,
            PrimitiveKind::Float => WellKnown::FloatArray,
            PrimitiveKind::Double => WellKnown::DoubleArray,
        }
    }
}

impl fmt::Display for WellKnown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// How many declarations a rule accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArityPolicy {
    /// The query must return exactly one declaration.
    ExactlyOne,
    /// Every returned declaration is kept, in query order; at least one is
    /// required.
    Group,
}

impl ArityPolicy {
    /// Expectation wording used in error messages.
    pub const fn expectation(self) -> &'static str {
        match self {
            ArityPolicy::ExactlyOne => "exactly one",
            ArityPolicy::Group => "at least one",
        }
    }
}

/// Kind of declaration a rule must resolve to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Class,
    Function,
}

impl EntryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            EntryKind::Class => "class",
            EntryKind::Function => "function",
        }
    }
}

/// Where a rule looks its name up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RuleScope {
    /// Top-level declarations of a dotted package.
    Package(&'static str),
    /// Member scope of a class entry resolved earlier in the table.
    Member(WellKnown),
}

/// One row of the catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CatalogRule {
    pub entry: WellKnown,
    pub scope: RuleScope,
    pub name: &'static str,
    pub kind: EntryKind,
    pub policy: ArityPolicy,
}

const fn class(entry: WellKnown, package: &'static str, name: &'static str) -> CatalogRule {
    CatalogRule {
        entry,
        scope: RuleScope::Package(package),
        name,
        kind: EntryKind::Class,
        policy: ArityPolicy::ExactlyOne,
    }
}

const fn function(entry: WellKnown, package: &'static str, name: &'static str) -> CatalogRule {
    CatalogRule {
        entry,
        scope: RuleScope::Package(package),
        name,
        kind: EntryKind::Function,
        policy: ArityPolicy::ExactlyOne,
    }
}

const fn member(entry: WellKnown, owner: WellKnown, name: &'static str) -> CatalogRule {
    CatalogRule {
        entry,
        scope: RuleScope::Member(owner),
        name,
        kind: EntryKind::Function,
        policy: ArityPolicy::ExactlyOne,
    }
}

const fn group(entry: WellKnown, package: &'static str, name: &'static str) -> CatalogRule {
    CatalogRule {
        entry,
        scope: RuleScope::Package(package),
        name,
        kind: EntryKind::Function,
        policy: ArityPolicy::Group,
    }
}

/// The catalog, indexed by [`WellKnown::index`].
pub static CATALOG_RULES: [CatalogRule; WellKnown::COUNT] = [
    function(W::ThrowNullPointerException, INTERNAL, "ThrowNullPointerException"),
    function(W::ThrowNoWhenBranchMatchedException, INTERNAL, "ThrowNoWhenBranchMatchedException"),
    function(W::ThrowTypeCastException, INTERNAL, "ThrowTypeCastException"),
    function(
        W::ThrowUninitializedPropertyAccessException,
        INTERNAL,
        "ThrowUninitializedPropertyAccessException",
    ),
    class(W::Any, STD, "Any"),
    class(W::Unit, STD, "Unit"),
    class(W::Nothing, STD, "Nothing"),
    class(W::Boolean, STD, "Boolean"),
    class(W::Char, STD, "Char"),
    class(W::Byte, STD, "Byte"),
    class(W::Short, STD, "Short"),
    class(W::Int, STD, "Int"),
    class(W::Long, STD, "Long"),
    class(W::Float, STD, "Float"),
    class(W::Double, STD, "Double"),
    class(W::String, STD, "String"),
    class(W::Throwable, STD, "Throwable"),
    class(W::Iterator, COLLECTIONS, "Iterator"),
    class(W::StringBuilder, TEXT, "StringBuilder"),
    class(W::DefaultConstructorMarker, INTERNAL, "DefaultConstructorMarker"),
    class(W::Array, STD, "Array"),
    class(W::BooleanArray, STD, "BooleanArray"),
    class(W::CharArray, STD, "CharArray"),
    class(W::ByteArray, STD, "ByteArray"),
    class(W::ShortArray, STD, "ShortArray"),
    class(W::IntArray, STD, "IntArray"),
    class(W::LongArray, STD, "LongArray"),
    class(W::FloatArray, STD, "FloatArray"),
    class(W::DoubleArray, STD, "DoubleArray"),
    class(W::CharProgression, RANGES, "CharProgression"),
    class(W::IntProgression, RANGES, "IntProgression"),
    class(W::LongProgression, RANGES, "LongProgression"),
    class(W::FunctionReferenceImpl, REFLECT, "FunctionReferenceImpl"),
    class(W::Property0Impl, REFLECT, "Property0Impl"),
    class(W::Property1Impl, REFLECT, "Property1Impl"),
    class(W::Property2Impl, REFLECT, "Property2Impl"),
    class(W::MutableProperty0Impl, REFLECT, "MutableProperty0Impl"),
    class(W::MutableProperty1Impl, REFLECT, "MutableProperty1Impl"),
    class(W::MutableProperty2Impl, REFLECT, "MutableProperty2Impl"),
    member(W::AnyEquals, W::Any, "equals"),
    member(W::AnyHashCode, W::Any, "hashCode"),
    member(W::AnyToString, W::Any, "toString"),
    member(W::IteratorHasNext, W::Iterator, "hasNext"),
    member(W::IteratorNext, W::Iterator, "next"),
    group(W::Assert, STD, "assert"),
    group(W::AreEqualByValue, INTERNAL, "areEqualByValue"),
    group(W::Ieee754Equals, INTERNAL, "ieee754Equals"),
];

/// Member functions resolved on every array class.
pub const ARRAY_ACCESSOR_NAMES: [&str; 3] = ["get", "set", "size"];
