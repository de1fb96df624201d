// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end registry tests against the in-memory standard library.
//!
//! Every test builds a [`StdlibModel`], optionally reshapes it, and observes
//! the registry through a [`CountingQuery`] so the number of namespace scans
//! is visible.
//!
//! ```bash
//! cargo test -p wk_symbols --test registry
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use pretty_assertions::assert_eq;
use wk_ir::{Name, PackagePath, StringInterner};
use wk_model::{
    Declaration, InternedSymbolTable, NamespaceQuery, PrimitiveKind, Scope, StdlibModel,
    SymbolTable, Type,
};
use wk_symbols::{CatalogError, OverloadError, SymbolRegistry, WellKnown};

/// Namespace query that counts every lookup it forwards.
struct CountingQuery {
    model: StdlibModel,
    lookups: AtomicUsize,
}

impl CountingQuery {
    fn new(model: StdlibModel) -> Self {
        CountingQuery {
            model,
            lookups: AtomicUsize::new(0),
        }
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl NamespaceQuery for CountingQuery {
    fn lookup(&self, scope: &Scope, name: Name) -> Vec<Declaration> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.model.lookup(scope, name)
    }
}

struct World {
    interner: StringInterner,
    query: CountingQuery,
    symbols: InternedSymbolTable,
}

impl World {
    fn standard() -> Self {
        Self::reshaped(|_, _| {})
    }

    fn reshaped(edit: impl FnOnce(&mut StdlibModel, &StringInterner)) -> Self {
        wk_symbols::init_tracing();
        let interner = StringInterner::new();
        let mut model = StdlibModel::standard_library(&interner);
        edit(&mut model, &interner);
        World {
            query: CountingQuery::new(model),
            interner,
            symbols: InternedSymbolTable::new(),
        }
    }

    fn registry(&self) -> Result<SymbolRegistry<'_>, CatalogError> {
        SymbolRegistry::new(&self.query, &self.symbols, &self.interner)
    }

    fn name_of(&self, symbol: wk_symbols::Symbol) -> &'static str {
        let decl = self.symbols.declaration(symbol).expect("symbol is interned");
        self.interner.lookup(decl.name)
    }
}

#[test]
fn interning_is_idempotent_across_the_registry() {
    let world = World::standard();
    let registry = world.registry().unwrap();
    let interned_after_catalog = world.symbols.len();

    let any = registry
        .declaration(registry.symbol(WellKnown::Any))
        .unwrap();
    assert_eq!(world.symbols.intern(&any), registry.symbol(WellKnown::Any));
    assert_eq!(world.symbols.len(), interned_after_catalog);
}

#[test]
fn binary_operator_scans_at_most_once() {
    let world = World::standard();
    let registry = world.registry().unwrap();
    let plus = registry.names().plus;
    let before = world.query.lookups();

    let first = registry.get_binary_operator(plus, &Type::INT, &Type::INT);
    let after_first = world.query.lookups();
    let second = registry.get_binary_operator(plus, &Type::INT, &Type::INT);

    assert_eq!(after_first - before, 1);
    assert_eq!(world.query.lookups(), after_first);
    assert_eq!(first, second);
    assert!(first.is_ok());
}

#[test]
fn unary_operator_scans_at_most_once() {
    let world = World::standard();
    let registry = world.registry().unwrap();
    let not = registry.names().not;
    let before = world.query.lookups();

    for _ in 0..5 {
        registry.get_unary_operator(not, &Type::BOOLEAN).unwrap();
    }
    assert_eq!(world.query.lookups() - before, 1);
    assert_eq!(registry.cached_unary_len(), 1);
}

#[test]
fn concurrent_queries_of_one_key_scan_once() {
    const THREADS: usize = 8;

    let world = World::standard();
    let registry = world.registry().unwrap();
    let compare_to = registry.names().compare_to;
    let before = world.query.lookups();
    let barrier = Arc::new(Barrier::new(THREADS));

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let registry = &registry;
                scope.spawn(move || {
                    barrier.wait();
                    registry.get_binary_operator(compare_to, &Type::LONG, &Type::LONG)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("registry thread panicked"))
            .collect()
    });

    assert_eq!(world.query.lookups() - before, 1);
    let first = results[0].clone().unwrap();
    assert!(results.iter().all(|result| result == &Ok(first)));
}

#[test]
fn integer_classes_are_byte_short_int_long() {
    let world = World::standard();
    let registry = world.registry().unwrap();

    let names: Vec<&str> = registry
        .derived()
        .integer_classes()
        .iter()
        .map(|&symbol| world.name_of(symbol))
        .collect();
    assert_eq!(names, vec!["Byte", "Short", "Int", "Long"]);
}

#[test]
fn array_classes_are_eight_primitive_and_one_generic() {
    let world = World::standard();
    let registry = world.registry().unwrap();
    let arrays = registry.derived().array_classes();

    let mut distinct = arrays.to_vec();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 9);

    for (symbol, kind) in arrays.iter().zip(PrimitiveKind::ALL) {
        assert_eq!(world.name_of(*symbol), kind.array_name());
    }
    assert_eq!(world.name_of(arrays[8]), "Array");
}

#[test]
fn int_plus_int_has_single_int_parameter() {
    let world = World::standard();
    let registry = world.registry().unwrap();
    let names = registry.names();

    let plus = registry
        .get_function(&Type::INT, names.plus, &[Type::INT])
        .unwrap();
    let decl = registry.declaration(plus).unwrap();
    assert_eq!(decl.as_function().unwrap().params, vec![Type::INT]);

    assert!(registry
        .get_function(&Type::INT, names.and, &[Type::INT])
        .is_ok());
}

#[test]
fn missing_iterator_fails_construction() {
    let world = World::reshaped(|model, interner| {
        let collections = Scope::Package(PackagePath::parse("std.collections", interner));
        model.remove(&collections, interner.intern("Iterator"));
    });

    match world.registry() {
        Err(CatalogError::MissingOrAmbiguous {
            entry, name, found, ..
        }) => {
            assert_eq!(entry, "Iterator");
            assert_eq!(name, "Iterator");
            assert_eq!(found, 0);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("registry built without Iterator"),
    }
}

#[test]
fn duplicate_zero_parameter_operator_is_ambiguous() {
    let world = World::reshaped(|model, interner| {
        model.add_member(&Type::INT, interner.intern("inc"), Vec::new(), Type::INT);
    });
    let registry = world.registry().unwrap();

    let result = registry.get_unary_operator(registry.names().inc, &Type::INT);
    assert!(matches!(
        result,
        Err(OverloadError::Ambiguous { candidates: 2, .. })
    ));
    assert_eq!(registry.cached_unary_len(), 0);
}

#[test]
fn group_entries_keep_query_order() {
    let world = World::standard();
    let registry = world.registry().unwrap();

    let params: Vec<Vec<Type>> = registry
        .catalog()
        .group(WellKnown::Ieee754Equals)
        .iter()
        .map(|&symbol| {
            let decl = registry.declaration(symbol).unwrap();
            decl.as_function().unwrap().params.clone()
        })
        .collect();
    assert_eq!(
        params,
        vec![
            vec![Type::FLOAT, Type::FLOAT],
            vec![Type::DOUBLE, Type::DOUBLE]
        ]
    );
}

#[test]
fn empty_group_fails_construction() {
    let world = World::reshaped(|model, interner| {
        let std_pkg = Scope::Package(PackagePath::parse("std", interner));
        model.remove(&std_pkg, interner.intern("assert"));
    });

    assert!(matches!(
        world.registry(),
        Err(CatalogError::MissingOrAmbiguous { ref entry, found: 0, .. }) if entry == "Assert"
    ));
}

#[test]
fn failures_are_not_cached() {
    let world = World::standard();
    let registry = world.registry().unwrap();
    let rem = registry.names().rem;
    let before = world.query.lookups();

    for _ in 0..3 {
        let result = registry.get_binary_operator(rem, &Type::BOOLEAN, &Type::BOOLEAN);
        assert!(matches!(result, Err(OverloadError::NotFound { .. })));
    }
    assert_eq!(world.query.lookups() - before, 3);
    assert_eq!(registry.cached_binary_len(), 0);
}

#[test]
fn class_in_place_of_member_function_is_wrong_kind() {
    let world = World::reshaped(|model, interner| {
        let internal = PackagePath::parse("std.internal", interner);
        let name = interner.intern("ThrowTypeCastException");
        model.remove(&Scope::Package(internal.clone()), name);
        model.add_class(&internal, name, Vec::new());
    });

    assert!(matches!(
        world.registry(),
        Err(CatalogError::WrongKind { expected: "function", found: "class", .. })
    ));
}

#[test]
fn construction_scans_each_rule_once() {
    let world = World::standard();
    let _registry = world.registry().unwrap();

    // One lookup per catalog rule plus three accessors for each of the nine arrays.
    assert_eq!(world.query.lookups(), WellKnown::COUNT + 9 * 3);
}
