//! Registry errors.
//!
//! Both error kinds mean the standard library being compiled against does not
//! have the shape the compiler expects. They are internal compiler errors,
//! never diagnostics about the user's program, so every variant carries
//! already-rendered strings naming exactly what failed.

/// Failure to build the well-known catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A required declaration is absent or not uniquely determined.
    #[error(
        "standard library mismatch for `{entry}`: expected {expected} `{name}` in {scope}, found {found}"
    )]
    MissingOrAmbiguous {
        entry: String,
        scope: String,
        name: String,
        expected: &'static str,
        found: usize,
    },

    /// The declaration exists but is a class where a function was expected,
    /// or the other way round.
    #[error("standard library mismatch for `{entry}`: `{name}` in {scope} is a {found}, expected a {expected}")]
    WrongKind {
        entry: String,
        scope: String,
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A member rule names an owner that is not an already-resolved class entry.
    #[error("catalog rule `{entry}` is scoped to `{owner}`, which is not a resolved class entry")]
    InvalidOwner { entry: String, owner: String },
}

/// Failure of a structural overload query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OverloadError {
    #[error("no overload `{receiver}.{name}{args}` in the standard library")]
    NotFound {
        receiver: String,
        name: String,
        args: String,
    },

    #[error("ambiguous overload `{receiver}.{name}{args}`: {candidates} declarations match")]
    Ambiguous {
        receiver: String,
        name: String,
        args: String,
        candidates: usize,
    },
}
