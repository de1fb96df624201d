//! Property-based tests for operator resolution.
//!
//! Random sequences of operator queries over the numeric primitives must
//! always resolve to the overload declared for exactly those operand types,
//! and the caches must hold one entry per distinct key no matter how often
//! or in what order keys repeat.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use wk_ir::StringInterner;
use wk_model::{InternedSymbolTable, PrimitiveKind, StdlibModel, Type};
use wk_symbols::SymbolRegistry;

fn numeric_kind() -> impl Strategy<Value = PrimitiveKind> {
    prop::sample::select(PrimitiveKind::NUMERIC.to_vec())
}

/// Index into `OperatorNames::arithmetic()`.
fn arithmetic_op() -> impl Strategy<Value = usize> {
    0..5usize
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn binary_operator_matches_operand_types(
        queries in prop::collection::vec((arithmetic_op(), numeric_kind(), numeric_kind()), 1..24)
    ) {
        let interner = StringInterner::new();
        let model = StdlibModel::standard_library(&interner);
        let symbols = InternedSymbolTable::new();
        let registry = SymbolRegistry::new(&model, &symbols, &interner).unwrap();
        let ops = registry.names().arithmetic();

        for &(op, lhs, rhs) in &queries {
            let symbol = registry
                .get_binary_operator(ops[op], &Type::Primitive(lhs), &Type::Primitive(rhs))
                .unwrap();
            let decl = registry.declaration(symbol).unwrap();
            let function = decl.as_function().unwrap();

            prop_assert_eq!(decl.name, ops[op]);
            prop_assert_eq!(&function.params, &vec![Type::Primitive(rhs)]);
            prop_assert_eq!(&function.owner, &Some(Type::Primitive(lhs)));
        }

        let distinct: BTreeSet<_> = queries.iter().copied().collect();
        prop_assert_eq!(registry.cached_binary_len(), distinct.len());
    }

    #[test]
    fn unary_operator_is_stable_across_repeats(kind in numeric_kind(), repeats in 1..8usize) {
        let interner = StringInterner::new();
        let model = StdlibModel::standard_library(&interner);
        let symbols = InternedSymbolTable::new();
        let registry = SymbolRegistry::new(&model, &symbols, &interner).unwrap();
        let inc = registry.names().inc;
        let receiver = Type::Primitive(kind);

        let first = registry.get_unary_operator(inc, &receiver).unwrap();
        for _ in 0..repeats {
            prop_assert_eq!(registry.get_unary_operator(inc, &receiver).unwrap(), first);
        }
        prop_assert_eq!(registry.cached_unary_len(), 1);

        let decl = registry.declaration(first).unwrap();
        prop_assert_eq!(&decl.as_function().unwrap().return_type, &receiver);
    }
}
