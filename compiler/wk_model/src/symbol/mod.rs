//! Symbol handles and the symbol table that interns declarations.
//!
//! The code generator never holds a [`Declaration`] directly; it holds a
//! [`Symbol`], a `Copy` handle whose equality is declaration identity.
//! Interning the same declaration twice must yield equal symbols, so the
//! registry can resolve the same entity from many call sites without
//! creating duplicates.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{DeclId, Declaration};

/// Stable handle to an interned declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Symbol(raw)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Converts declarations into stable handles.
pub trait SymbolTable: Send + Sync {
    /// Intern `decl`. Idempotent: equal declarations yield equal symbols.
    fn intern(&self, decl: &Declaration) -> Symbol;

    /// The declaration a symbol was interned from.
    fn declaration(&self, symbol: Symbol) -> Option<Declaration>;
}

impl<T: SymbolTable + ?Sized> SymbolTable for &T {
    fn intern(&self, decl: &Declaration) -> Symbol {
        (**self).intern(decl)
    }

    fn declaration(&self, symbol: Symbol) -> Option<Declaration> {
        (**self).declaration(symbol)
    }
}

#[derive(Default)]
struct TableInner {
    by_decl: FxHashMap<DeclId, Symbol>,
    decls: Vec<Declaration>,
}

/// In-memory symbol table deduplicating by [`DeclId`].
///
/// # Thread Safety
/// A single `RwLock` guards the dedup map: already-interned declarations
/// only take a read guard, new ones re-check under the write guard so two
/// threads racing on one declaration still agree on its symbol.
#[derive(Default)]
pub struct InternedSymbolTable {
    inner: RwLock<TableInner>,
}

impl InternedSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct declarations interned so far.
    pub fn len(&self) -> usize {
        self.inner.read().decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SymbolTable for InternedSymbolTable {
    fn intern(&self, decl: &Declaration) -> Symbol {
        if let Some(&symbol) = self.inner.read().by_decl.get(&decl.id) {
            return symbol;
        }

        let mut guard = self.inner.write();

        // Double-check after acquiring write lock
        if let Some(&symbol) = guard.by_decl.get(&decl.id) {
            return symbol;
        }

        let raw = u32::try_from(guard.decls.len())
            .unwrap_or_else(|_| panic!("symbol table exceeded u32::MAX declarations"));
        let symbol = Symbol(raw);
        guard.decls.push(decl.clone());
        guard.by_decl.insert(decl.id, symbol);
        tracing::trace!(?symbol, decl = decl.id.raw(), "interned declaration");
        symbol
    }

    fn declaration(&self, symbol: Symbol) -> Option<Declaration> {
        self.inner.read().decls.get(symbol.index()).cloned()
    }
}

#[cfg(test)]
mod tests;
