#![allow(clippy::expect_used, reason = "tests fail loudly on unexpected shapes")]

use super::*;
use pretty_assertions::assert_eq;
use wk_ir::PackagePath;
use wk_model::{InternedSymbolTable, PrimitiveKind, StdlibModel};

struct Fixture {
    interner: StringInterner,
    model: StdlibModel,
    symbols: InternedSymbolTable,
}

impl Fixture {
    fn standard() -> Self {
        let interner = StringInterner::new();
        let model = StdlibModel::standard_library(&interner);
        Fixture {
            interner,
            model,
            symbols: InternedSymbolTable::new(),
        }
    }

    fn resolver(&self) -> OverloadResolver<'_> {
        OverloadResolver::new(&self.model, &self.symbols, &self.interner)
    }

    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn params_of(&self, symbol: Symbol) -> Vec<Type> {
        self.symbols
            .declaration(symbol)
            .and_then(|decl| decl.as_function().map(|f| f.params.clone()))
            .expect("resolved symbol is a function")
    }
}

#[test]
fn picks_overload_by_parameter_types() {
    let fx = Fixture::standard();
    let plus = fx.name("plus");

    let int_plus_int = fx
        .resolver()
        .resolve_function(&Type::INT, plus, &[Type::INT])
        .expect("Int.plus(Int)");
    assert_eq!(fx.params_of(int_plus_int), vec![Type::INT]);

    let int_plus_double = fx
        .resolver()
        .resolve_function(&Type::INT, plus, &[Type::DOUBLE])
        .expect("Int.plus(Double)");
    assert_ne!(int_plus_int, int_plus_double);
    assert_eq!(fx.params_of(int_plus_double), vec![Type::DOUBLE]);
}

#[test]
fn bitwise_and_on_int_is_unique() {
    let fx = Fixture::standard();
    let and = fx
        .resolver()
        .resolve_function(&Type::INT, fx.name("and"), &[Type::INT]);
    assert!(and.is_ok());
}

#[test]
fn same_declaration_resolves_to_same_symbol() {
    let fx = Fixture::standard();
    let compare_to = fx.name("compareTo");
    let first = fx
        .resolver()
        .resolve_function(&Type::LONG, compare_to, &[Type::SHORT]);
    let second = fx
        .resolver()
        .resolve_function(&Type::LONG, compare_to, &[Type::SHORT]);
    assert_eq!(first, second);
}

#[test]
fn arity_mismatch_is_not_found() {
    let fx = Fixture::standard();
    let err = fx
        .resolver()
        .resolve_function(&Type::INT, fx.name("plus"), &[Type::INT, Type::INT])
        .expect_err("no two-argument plus");

    assert_eq!(
        err,
        OverloadError::NotFound {
            receiver: "Int".to_owned(),
            name: "plus".to_owned(),
            args: "(Int, Int)".to_owned(),
        }
    );
}

#[test]
fn unknown_receiver_is_not_found() {
    let fx = Fixture::standard();
    let unknown = Type::class(PackagePath::parse("std", &fx.interner), fx.name("Regex"));
    let err = fx
        .resolver()
        .resolve_unary(&unknown, fx.name("inc"))
        .expect_err("Regex has no members");
    assert!(matches!(err, OverloadError::NotFound { ref receiver, .. } if receiver == "Regex"));
}

#[test]
fn bitwise_is_not_declared_on_floating_types() {
    let fx = Fixture::standard();
    let result = fx
        .resolver()
        .resolve_function(&Type::DOUBLE, fx.name("and"), &[Type::DOUBLE]);
    assert!(matches!(result, Err(OverloadError::NotFound { .. })));
}

#[test]
fn duplicate_unary_overloads_are_ambiguous() {
    let mut fx = Fixture::standard();
    let inc = fx.name("inc");
    fx.model.add_member(&Type::INT, inc, Vec::new(), Type::INT);

    let err = fx
        .resolver()
        .resolve_unary(&Type::INT, inc)
        .expect_err("two zero-parameter inc");
    assert_eq!(
        err,
        OverloadError::Ambiguous {
            receiver: "Int".to_owned(),
            name: "inc".to_owned(),
            args: "()".to_owned(),
            candidates: 2,
        }
    );
}

#[test]
fn ambiguity_counts_every_candidate() {
    let mut fx = Fixture::standard();
    let not = fx.name("not");
    fx.model.add_member(&Type::BOOLEAN, not, Vec::new(), Type::BOOLEAN);
    fx.model.add_member(&Type::BOOLEAN, not, Vec::new(), Type::BOOLEAN);

    let err = fx
        .resolver()
        .resolve_unary(&Type::BOOLEAN, not)
        .expect_err("three zero-parameter not");
    assert!(matches!(err, OverloadError::Ambiguous { candidates: 3, .. }));
}

/// Answers every lookup with the same declarations.
struct FixedQuery(Vec<Declaration>);

impl NamespaceQuery for FixedQuery {
    fn lookup(&self, _scope: &Scope, _name: Name) -> Vec<Declaration> {
        self.0.clone()
    }
}

#[test]
fn classes_in_the_overload_set_are_ignored() {
    let interner = StringInterner::new();
    let mut model = StdlibModel::new();
    let pkg = PackagePath::parse("std", &interner);
    let get = interner.intern("get");
    let class = model.add_class(&pkg, get, Vec::new());
    let function = model.add_member(&Type::INT, get, Vec::new(), Type::INT);
    let query = FixedQuery(vec![class, function.clone()]);
    let symbols = InternedSymbolTable::new();

    let resolver = OverloadResolver::new(&query, &symbols, &interner);
    let symbol = resolver.resolve_unary(&Type::INT, get).expect("Int.get");
    assert_eq!(symbols.declaration(symbol), Some(function));
}

#[test]
fn homogeneous_resolution_repeats_the_type() {
    let fx = Fixture::standard();
    let set = fx.name("set");
    let long_array = Type::PrimitiveArray(PrimitiveKind::Long);

    // LongArray.set takes (Int, Long), never (Long, Long).
    let result = fx
        .resolver()
        .resolve_homogeneous(&long_array, set, 2, &Type::LONG);
    assert!(matches!(result, Err(OverloadError::NotFound { ref args, .. }) if args == "(Long, Long)"));

    let xor = fx
        .resolver()
        .resolve_homogeneous(&Type::LONG, fx.name("xor"), 1, &Type::LONG)
        .expect("Long.xor(Long)");
    assert_eq!(fx.params_of(xor), vec![Type::LONG]);
}
