//! Eager catalog resolution.
//!
//! [`Catalog::resolve`] walks [`CATALOG_RULES`] once, in table order, and
//! turns every row into interned symbols. The first row the standard library
//! cannot satisfy aborts the whole walk: there is no partially populated
//! catalog, because every later compilation stage assumes all entries exist.
//!
//! Besides the table rows, the walk resolves the `get`/`set`/`size` members
//! of every array class ([`ArrayAccessors`]).

mod rules;

pub use rules::{
    ArityPolicy, CatalogRule, EntryKind, RuleScope, WellKnown, ARRAY_ACCESSOR_NAMES, CATALOG_RULES,
};

use rustc_hash::FxHashMap;
use wk_ir::{PackagePath, StringInterner};
use wk_model::{Declaration, NamespaceQuery, Scope, Symbol, SymbolTable, Type};

use crate::CatalogError;

/// A resolved catalog row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEntry {
    /// An [`ArityPolicy::ExactlyOne`] row.
    Single(Symbol),
    /// An [`ArityPolicy::Group`] row, in query order.
    Group(Vec<Symbol>),
}

impl CatalogEntry {
    /// All symbols of the entry; a single entry is a one-element slice.
    pub fn symbols(&self) -> &[Symbol] {
        match self {
            CatalogEntry::Single(symbol) => std::slice::from_ref(symbol),
            CatalogEntry::Group(symbols) => symbols,
        }
    }
}

/// Member functions shared by every array class.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArrayAccessors {
    pub get: Symbol,
    pub set: Symbol,
    pub size: Symbol,
}

/// The immutable result of catalog resolution.
#[derive(Debug)]
pub struct Catalog {
    /// Indexed by [`WellKnown::index`].
    entries: Vec<CatalogEntry>,
    /// Default type of every class entry, indexed like `entries`.
    class_types: Vec<Option<Type>>,
    array_accessors: FxHashMap<Symbol, ArrayAccessors>,
}

impl Catalog {
    /// Resolve every catalog rule against `query`, interning through `symbols`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve(
        query: &dyn NamespaceQuery,
        symbols: &dyn SymbolTable,
        interner: &StringInterner,
    ) -> Result<Self, CatalogError> {
        let mut resolver = CatalogResolver {
            query,
            symbols,
            interner,
            entries: Vec::with_capacity(WellKnown::COUNT),
            class_types: Vec::with_capacity(WellKnown::COUNT),
        };

        for rule in &CATALOG_RULES {
            resolver.resolve_rule(rule)?;
        }
        let array_accessors = resolver.resolve_array_accessors()?;

        tracing::debug!(
            entries = resolver.entries.len(),
            arrays = array_accessors.len(),
            "well-known catalog resolved"
        );

        Ok(Catalog {
            entries: resolver.entries,
            class_types: resolver.class_types,
            array_accessors,
        })
    }

    pub fn entry(&self, key: WellKnown) -> &CatalogEntry {
        &self.entries[key.index()]
    }

    /// The symbol of an exactly-one entry.
    ///
    /// # Panics
    /// Panics if `key` is a group entry; use [`Catalog::group`] for those.
    pub fn symbol(&self, key: WellKnown) -> Symbol {
        match self.entry(key) {
            CatalogEntry::Single(symbol) => *symbol,
            CatalogEntry::Group(_) => panic!("`{key}` is a group entry, use Catalog::group"),
        }
    }

    /// The symbols of an entry, in query order.
    pub fn group(&self, key: WellKnown) -> &[Symbol] {
        self.entry(key).symbols()
    }

    /// Default type of a class entry (`Array<T>`, `Int`, ...).
    pub fn class_type(&self, key: WellKnown) -> Option<&Type> {
        self.class_types[key.index()].as_ref()
    }

    /// Accessors of an array class symbol.
    pub fn array_accessors(&self, array: Symbol) -> Option<ArrayAccessors> {
        self.array_accessors.get(&array).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WellKnown, &CatalogEntry)> {
        WellKnown::ALL.into_iter().zip(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct CatalogResolver<'a> {
    query: &'a dyn NamespaceQuery,
    symbols: &'a dyn SymbolTable,
    interner: &'a StringInterner,
    entries: Vec<CatalogEntry>,
    class_types: Vec<Option<Type>>,
}

impl CatalogResolver<'_> {
    fn scope_for(&self, rule: &CatalogRule) -> Result<Scope, CatalogError> {
        match rule.scope {
            RuleScope::Package(dotted) => {
                Ok(Scope::Package(PackagePath::parse(dotted, self.interner)))
            }
            RuleScope::Member(owner) => self.member_scope(owner, &rule.entry.to_string()),
        }
    }

    /// Member scope of an already-resolved class entry.
    fn member_scope(&self, owner: WellKnown, entry: &str) -> Result<Scope, CatalogError> {
        self.class_types
            .get(owner.index())
            .and_then(Option::as_ref)
            .map(|ty| Scope::Members(ty.clone()))
            .ok_or_else(|| CatalogError::InvalidOwner {
                entry: entry.to_owned(),
                owner: owner.to_string(),
            })
    }

    fn resolve_rule(&mut self, rule: &CatalogRule) -> Result<(), CatalogError> {
        debug_assert_eq!(rule.entry.index(), self.entries.len());

        let scope = self.scope_for(rule)?;
        let decls = self.lookup_checked(
            &scope,
            rule.name,
            rule.kind,
            rule.policy,
            &rule.entry.to_string(),
        )?;

        let class_type = match (rule.kind, decls.as_slice()) {
            (EntryKind::Class, [decl]) => decl.as_class().map(|class| class.default_type.clone()),
            _ => None,
        };
        let entry = match rule.policy {
            ArityPolicy::ExactlyOne => CatalogEntry::Single(self.symbols.intern(&decls[0])),
            ArityPolicy::Group => {
                CatalogEntry::Group(decls.iter().map(|d| self.symbols.intern(d)).collect())
            }
        };

        self.entries.push(entry);
        self.class_types.push(class_type);
        Ok(())
    }

    /// Look `name` up in `scope` and enforce the arity policy and kind.
    fn lookup_checked(
        &self,
        scope: &Scope,
        name: &str,
        kind: EntryKind,
        policy: ArityPolicy,
        entry: &str,
    ) -> Result<Vec<Declaration>, CatalogError> {
        let decls = self.query.lookup(scope, self.interner.intern(name));

        let arity_ok = match policy {
            ArityPolicy::ExactlyOne => decls.len() == 1,
            ArityPolicy::Group => !decls.is_empty(),
        };
        if !arity_ok {
            let err = CatalogError::MissingOrAmbiguous {
                entry: entry.to_owned(),
                scope: scope.describe(self.interner),
                name: name.to_owned(),
                expected: policy.expectation(),
                found: decls.len(),
            };
            tracing::error!(%err, "well-known catalog entry failed");
            return Err(err);
        }

        let wrong = decls.iter().find(|decl| match kind {
            EntryKind::Class => !decl.is_class(),
            EntryKind::Function => !decl.is_function(),
        });
        if let Some(decl) = wrong {
            let err = CatalogError::WrongKind {
                entry: entry.to_owned(),
                scope: scope.describe(self.interner),
                name: name.to_owned(),
                expected: kind.as_str(),
                found: decl.kind_str(),
            };
            tracing::error!(%err, "well-known catalog entry failed");
            return Err(err);
        }

        Ok(decls)
    }

    fn resolve_array_accessors(&self) -> Result<FxHashMap<Symbol, ArrayAccessors>, CatalogError> {
        const ARRAYS: [WellKnown; 9] = [
            WellKnown::Array,
            WellKnown::BooleanArray,
            WellKnown::CharArray,
            WellKnown::ByteArray,
            WellKnown::ShortArray,
            WellKnown::IntArray,
            WellKnown::LongArray,
            WellKnown::FloatArray,
            WellKnown::DoubleArray,
        ];

        let mut accessors = FxHashMap::default();
        for array in ARRAYS {
            let scope = self.member_scope(array, &array.to_string())?;

            let [get, set, size] = ARRAY_ACCESSOR_NAMES.map(|member| {
                self.lookup_checked(
                    &scope,
                    member,
                    EntryKind::Function,
                    ArityPolicy::ExactlyOne,
                    &format!("{array}.{member}"),
                )
                .map(|decls| self.symbols.intern(&decls[0]))
            });

            accessors.insert(
                self.entries[array.index()].symbols()[0],
                ArrayAccessors {
                    get: get?,
                    set: set?,
                    size: size?,
                },
            );
        }
        Ok(accessors)
    }
}
