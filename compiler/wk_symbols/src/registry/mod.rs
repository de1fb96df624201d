//! The registry facade handed to code generation.
//!
//! [`SymbolRegistry`] borrows the two semantic-model services and owns
//! everything resolved through them: the eager catalog, the derived
//! collections, the pre-interned operator names and the two operator caches.
//! It is `Sync`; one registry can serve every code-generation worker.

use wk_ir::{Name, StringInterner};
use wk_model::{Declaration, NamespaceQuery, Symbol, SymbolTable, Type};

use crate::{
    BinaryKey, Catalog, CatalogError, DerivedCollections, MemoTable, OperatorNames,
    OverloadError, OverloadResolver, UnaryKey, WellKnown,
};

/// Well-known standard-library symbols for one compilation.
pub struct SymbolRegistry<'db> {
    query: &'db dyn NamespaceQuery,
    symbols: &'db dyn SymbolTable,
    interner: &'db StringInterner,
    catalog: Catalog,
    derived: DerivedCollections,
    names: OperatorNames,
    binary: MemoTable<BinaryKey>,
    unary: MemoTable<UnaryKey>,
}

impl<'db> SymbolRegistry<'db> {
    /// Resolve the catalog and build the registry.
    ///
    /// Fails with the first catalog entry the standard library cannot
    /// satisfy; no registry exists in that case.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(
        query: &'db dyn NamespaceQuery,
        symbols: &'db dyn SymbolTable,
        interner: &'db StringInterner,
    ) -> Result<Self, CatalogError> {
        let catalog = Catalog::resolve(query, symbols, interner)?;
        let derived = DerivedCollections::new(&catalog);
        let names = OperatorNames::new(interner);

        Ok(SymbolRegistry {
            query,
            symbols,
            interner,
            catalog,
            derived,
            names,
            binary: MemoTable::new(),
            unary: MemoTable::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn derived(&self) -> &DerivedCollections {
        &self.derived
    }

    pub fn names(&self) -> &OperatorNames {
        &self.names
    }

    pub fn interner(&self) -> &'db StringInterner {
        self.interner
    }

    /// Shorthand for `catalog().symbol(key)`.
    pub fn symbol(&self, key: WellKnown) -> Symbol {
        self.catalog.symbol(key)
    }

    /// The declaration behind a symbol, from the symbol table.
    pub fn declaration(&self, symbol: Symbol) -> Option<Declaration> {
        self.symbols.declaration(symbol)
    }

    /// An uncached structural resolver over the same services.
    pub fn resolver(&self) -> OverloadResolver<'db> {
        OverloadResolver::new(self.query, self.symbols, self.interner)
    }

    /// The member `name` of `receiver` whose parameters equal `args`.
    ///
    /// Not memoized; use the operator lookups for hot paths.
    pub fn get_function(
        &self,
        receiver: &Type,
        name: Name,
        args: &[Type],
    ) -> Result<Symbol, OverloadError> {
        self.resolver().resolve_function(receiver, name, args)
    }

    /// The zero-parameter operator `op` of `receiver` (`unaryMinus`, `inc`, ...).
    pub fn get_unary_operator(&self, op: Name, receiver: &Type) -> Result<Symbol, OverloadError> {
        let key = UnaryKey {
            op,
            receiver: receiver.clone(),
        };
        self.unary.get_or_resolve(key, |key| {
            self.resolver().resolve_unary(&key.receiver, key.op)
        })
    }

    /// The operator `op` declared on `lhs` taking exactly `[rhs]`.
    pub fn get_binary_operator(
        &self,
        op: Name,
        lhs: &Type,
        rhs: &Type,
    ) -> Result<Symbol, OverloadError> {
        let key = BinaryKey {
            op,
            lhs: lhs.clone(),
            rhs: rhs.clone(),
        };
        self.binary.get_or_resolve(key, |key| {
            self.resolver()
                .resolve_function(&key.lhs, key.op, std::slice::from_ref(&key.rhs))
        })
    }

    /// Number of memoized binary operator keys.
    pub fn cached_binary_len(&self) -> usize {
        self.binary.len()
    }

    /// Number of memoized unary operator keys.
    pub fn cached_unary_len(&self) -> usize {
        self.unary.len()
    }
}
