//! Memoized operator lookup.
//!
//! Code generation asks for the same operators (`Int.plus(Int)`,
//! `Long.compareTo(Long)`, ...) from many unrelated sites. A [`MemoTable`]
//! remembers each successful resolution by its structural key, so the
//! namespace is scanned once per key for the lifetime of the registry.
//!
//! # Thread Safety
//! Same read-then-write scheme as the symbol table, with one difference:
//! the resolver runs while the write guard is held. Two threads missing on
//! one key therefore never both scan; the second one finds the first one's
//! entry when it re-checks. Resolvers must not re-enter the same table.

use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use wk_ir::Name;
use wk_model::{Symbol, Type};

/// Key of a binary operator query: the member `op` of `lhs` taking `[rhs]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryKey {
    pub op: Name,
    pub lhs: Type,
    pub rhs: Type,
}

/// Key of a unary operator query: the zero-parameter member `op` of `receiver`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnaryKey {
    pub op: Name,
    pub receiver: Type,
}

/// Grow-only cache from structural keys to resolved symbols.
///
/// Failed resolutions are never stored.
pub struct MemoTable<K> {
    entries: RwLock<FxHashMap<K, Symbol>>,
}

impl<K: Eq + Hash + fmt::Debug> MemoTable<K> {
    pub fn new() -> Self {
        MemoTable {
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// The cached symbol for `key`, without resolving.
    pub fn get(&self, key: &K) -> Option<Symbol> {
        self.entries.read().get(key).copied()
    }

    /// The cached symbol for `key`, or the result of `resolve` on a miss.
    ///
    /// `resolve` runs at most once per key across all threads, unless it
    /// fails; a failure is returned as-is and leaves the key absent.
    pub fn get_or_resolve<E>(
        &self,
        key: K,
        resolve: impl FnOnce(&K) -> Result<Symbol, E>,
    ) -> Result<Symbol, E> {
        // Fast path: read lock
        if let Some(&symbol) = self.entries.read().get(&key) {
            tracing::trace!(?key, ?symbol, "memo hit");
            return Ok(symbol);
        }

        // Slow path: write lock, held across resolution
        let mut guard = self.entries.write();
        if let Some(&symbol) = guard.get(&key) {
            tracing::trace!(?key, ?symbol, "memo hit after contention");
            return Ok(symbol);
        }

        let symbol = resolve(&key)?;
        tracing::debug!(?key, ?symbol, "memo miss resolved");
        guard.insert(key, symbol);
        Ok(symbol)
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K: Eq + Hash + fmt::Debug> Default for MemoTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for MemoTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoTable")
            .field("len", &self.entries.read().len())
            .finish()
    }
}
