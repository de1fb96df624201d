//! Interned identifiers shared by the semantic model and the symbol registry.
//!
//! - [`Name`]: 32-bit interned identifier
//! - [`StringInterner`]: sharded, thread-safe interner producing `Name`s
//! - [`PackagePath`]: dotted package path built from `Name` segments
//!
//! All types are `Clone + Eq + Hash + Debug` so they can be used directly as
//! cache keys.

mod interner;
mod name;
mod path;

pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use path::{PackagePath, PathDisplay};

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in types that end up in cache keys.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Name;
    static_assert_size!(Name, 4);
}
