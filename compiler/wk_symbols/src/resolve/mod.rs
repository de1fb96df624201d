//! Structural overload resolution.
//!
//! Operators and member functions are overloaded by parameter type, so a
//! name alone does not identify a declaration. The resolver scans the member
//! scope of the receiver and keeps the functions whose parameter list is
//! *structurally* equal to the requested argument types. Exactly one survivor
//! is required; there is no fallback to "the first overload".

use wk_ir::{Name, StringInterner};
use wk_model::{display_params, Declaration, NamespaceQuery, Scope, Symbol, SymbolTable, Type};

use crate::OverloadError;

/// Uncached structural resolver over the two semantic-model services.
#[derive(Copy, Clone)]
pub struct OverloadResolver<'a> {
    query: &'a dyn NamespaceQuery,
    symbols: &'a dyn SymbolTable,
    interner: &'a StringInterner,
}

impl<'a> OverloadResolver<'a> {
    pub fn new(
        query: &'a dyn NamespaceQuery,
        symbols: &'a dyn SymbolTable,
        interner: &'a StringInterner,
    ) -> Self {
        OverloadResolver {
            query,
            symbols,
            interner,
        }
    }

    /// The member `name` of `receiver` whose parameters equal `args`.
    ///
    /// Class declarations sharing the name are skipped.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn resolve_function(
        &self,
        receiver: &Type,
        name: Name,
        args: &[Type],
    ) -> Result<Symbol, OverloadError> {
        let overloads = self.query.lookup(&Scope::Members(receiver.clone()), name);
        let mut matching = overloads.iter().filter(|decl| is_match(decl, args));

        match (matching.next(), matching.next()) {
            (Some(decl), None) => {
                let symbol = self.symbols.intern(decl);
                tracing::trace!(?symbol, overloads = overloads.len(), "overload resolved");
                Ok(symbol)
            }
            (None, _) => {
                let err = OverloadError::NotFound {
                    receiver: receiver.display(self.interner).to_string(),
                    name: self.interner.lookup(name).to_owned(),
                    args: display_params(args, self.interner),
                };
                tracing::error!(%err, "overload resolution failed");
                Err(err)
            }
            (Some(_), Some(_)) => {
                let err = OverloadError::Ambiguous {
                    receiver: receiver.display(self.interner).to_string(),
                    name: self.interner.lookup(name).to_owned(),
                    args: display_params(args, self.interner),
                    candidates: 2 + matching.count(),
                };
                tracing::error!(%err, "overload resolution failed");
                Err(err)
            }
        }
    }

    /// The zero-parameter member `name` of `receiver`.
    pub fn resolve_unary(&self, receiver: &Type, name: Name) -> Result<Symbol, OverloadError> {
        self.resolve_function(receiver, name, &[])
    }

    /// The member `name` of `receiver` taking `arity` parameters, all of type `ty`.
    pub fn resolve_homogeneous(
        &self,
        receiver: &Type,
        name: Name,
        arity: usize,
        ty: &Type,
    ) -> Result<Symbol, OverloadError> {
        let args = vec![ty.clone(); arity];
        self.resolve_function(receiver, name, &args)
    }
}

fn is_match(decl: &Declaration, args: &[Type]) -> bool {
    decl.as_function()
        .is_some_and(|function| function.params_match(args))
}

#[cfg(test)]
mod tests;
