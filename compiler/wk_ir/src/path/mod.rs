//! Dotted package paths (`std.collections`).

use std::fmt;

use smallvec::SmallVec;

use crate::{Name, StringInterner};

/// A package path as a list of interned segments.
///
/// The root package is the empty path. Paths compare segment-wise, so two
/// paths parsed from the same dotted string with the same interner are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PackagePath {
    segments: SmallVec<[Name; 4]>,
}

impl PackagePath {
    /// The root package.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a dotted path, interning each segment.
    ///
    /// Empty segments are skipped, so `""` is the root package and
    /// `"std..text"` equals `"std.text"`.
    pub fn parse(dotted: &str, interner: &StringInterner) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(|segment| interner.intern(segment))
                .collect(),
        }
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Name>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// A child package of this one.
    #[must_use]
    pub fn child(&self, segment: Name) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Whether `self` is `other` or one of its sub-packages.
    pub fn starts_with(&self, other: &PackagePath) -> bool {
        self.segments.starts_with(&other.segments)
    }

    /// Display with the segments resolved through `interner`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> PathDisplay<'a> {
        PathDisplay {
            path: self,
            interner,
        }
    }
}

/// Dotted rendering of a [`PackagePath`].
pub struct PathDisplay<'a> {
    path: &'a PackagePath,
    interner: &'a StringInterner,
}

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.path.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(self.interner.lookup(*segment))?;
        }
        Ok(())
    }
}
