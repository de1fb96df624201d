#![allow(clippy::expect_used, reason = "tests fail loudly on unexpected shapes")]

use super::*;
use crate::{DeclKind, FunctionDecl, Type};
use pretty_assertions::assert_eq;
use wk_ir::{PackagePath, StringInterner};

fn decl(interner: &StringInterner, id: u32, name: &str) -> Declaration {
    Declaration {
        id: DeclId::from_raw(id),
        name: interner.intern(name),
        kind: DeclKind::Function(FunctionDecl {
            package: PackagePath::parse("std.internal", interner),
            params: Vec::new(),
            return_type: Type::INT,
            owner: None,
            extension_receiver: None,
        }),
    }
}

#[test]
fn interning_is_idempotent() {
    let interner = StringInterner::new();
    let table = InternedSymbolTable::new();
    let d = decl(&interner, 7, "ThrowTypeCastException");

    let first = table.intern(&d);
    let second = table.intern(&d);
    assert_eq!(first, second);
    assert_eq!(table.len(), 1);
}

#[test]
fn distinct_declarations_get_distinct_symbols() {
    let interner = StringInterner::new();
    let table = InternedSymbolTable::new();
    let a = table.intern(&decl(&interner, 1, "assert"));
    let b = table.intern(&decl(&interner, 2, "assert"));
    assert_ne!(a, b);
    assert_eq!(table.len(), 2);
}

#[test]
fn declaration_round_trips() {
    let interner = StringInterner::new();
    let table = InternedSymbolTable::new();
    let d = decl(&interner, 3, "areEqualByValue");
    let symbol = table.intern(&d);

    assert_eq!(table.declaration(symbol), Some(d));
    assert_eq!(table.declaration(Symbol::from_raw(99)), None);
}

#[test]
fn concurrent_interning_agrees() {
    let interner = StringInterner::new();
    let table = InternedSymbolTable::new();
    let d = decl(&interner, 11, "inc");

    let symbols: Vec<Symbol> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| table.intern(&d))).collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("interning thread panicked"))
            .collect()
    });

    assert!(symbols.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(table.len(), 1);
}
