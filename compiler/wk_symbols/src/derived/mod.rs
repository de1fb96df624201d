//! Collections computed from catalog entries.
//!
//! Code generation often needs "all integer classes" or "every array class"
//! rather than one entry. These are assembled once from the catalog, without
//! further namespace queries, and never fail: every entry they read is
//! guaranteed by a successful catalog resolution.

use rustc_hash::{FxHashMap, FxHashSet};
use wk_model::{PrimitiveKind, Symbol, Type};

use crate::{Catalog, WellKnown};

const PROGRESSIONS: [WellKnown; 3] = [
    WellKnown::CharProgression,
    WellKnown::IntProgression,
    WellKnown::LongProgression,
];

/// Grouped views over the catalog.
#[derive(Clone, Debug)]
pub struct DerivedCollections {
    integer_classes: [Symbol; 4],
    integer_types: [Type; 4],
    primitive_classes: [Symbol; 8],
    /// Primitive arrays in `PrimitiveKind::ALL` order, then `Array`.
    array_classes: [Symbol; 9],
    array_kinds: FxHashMap<Symbol, PrimitiveKind>,
    progression_classes: [Symbol; 3],
    progression_types: FxHashSet<Type>,
}

impl DerivedCollections {
    pub fn new(catalog: &Catalog) -> Self {
        let integer_classes =
            PrimitiveKind::INTEGERS.map(|kind| catalog.symbol(WellKnown::primitive(kind)));
        let integer_types = PrimitiveKind::INTEGERS.map(Type::Primitive);
        let primitive_classes =
            PrimitiveKind::ALL.map(|kind| catalog.symbol(WellKnown::primitive(kind)));

        let primitive_arrays =
            PrimitiveKind::ALL.map(|kind| catalog.symbol(WellKnown::primitive_array(kind)));
        let generic_array = catalog.symbol(WellKnown::Array);
        let mut array_classes = [generic_array; 9];
        array_classes[..8].copy_from_slice(&primitive_arrays);
        let array_kinds = primitive_arrays
            .into_iter()
            .zip(PrimitiveKind::ALL)
            .collect();

        let progression_classes = PROGRESSIONS.map(|key| catalog.symbol(key));
        let progression_types = PROGRESSIONS
            .iter()
            .filter_map(|&key| catalog.class_type(key).cloned())
            .collect();

        DerivedCollections {
            integer_classes,
            integer_types,
            primitive_classes,
            array_classes,
            array_kinds,
            progression_classes,
            progression_types,
        }
    }

    /// `Byte`, `Short`, `Int`, `Long`, in that order.
    pub fn integer_classes(&self) -> &[Symbol; 4] {
        &self.integer_classes
    }

    /// Types of [`integer_classes`](Self::integer_classes), same order.
    pub fn integer_types(&self) -> &[Type; 4] {
        &self.integer_types
    }

    /// The eight primitive classes in `PrimitiveKind::ALL` order.
    pub fn primitive_classes(&self) -> &[Symbol; 8] {
        &self.primitive_classes
    }

    pub fn primitive_class(&self, kind: PrimitiveKind) -> Symbol {
        self.primitive_classes[kind_index(kind)]
    }

    /// Every array class: the eight primitive arrays, then `Array`.
    pub fn array_classes(&self) -> &[Symbol; 9] {
        &self.array_classes
    }

    pub fn primitive_array_classes(&self) -> &[Symbol] {
        &self.array_classes[..8]
    }

    pub fn generic_array(&self) -> Symbol {
        self.array_classes[8]
    }

    /// Array class holding elements of `kind`.
    pub fn array_for(&self, kind: PrimitiveKind) -> Symbol {
        self.array_classes[kind_index(kind)]
    }

    /// Element kind of a primitive array class; `None` for `Array` and
    /// non-array symbols.
    pub fn array_kind(&self, array: Symbol) -> Option<PrimitiveKind> {
        self.array_kinds.get(&array).copied()
    }

    /// `CharProgression`, `IntProgression`, `LongProgression`.
    pub fn progression_classes(&self) -> &[Symbol; 3] {
        &self.progression_classes
    }

    pub fn progression_types(&self) -> &FxHashSet<Type> {
        &self.progression_types
    }

    pub fn is_progression_type(&self, ty: &Type) -> bool {
        self.progression_types.contains(ty)
    }
}

fn kind_index(kind: PrimitiveKind) -> usize {
    kind as usize
}
