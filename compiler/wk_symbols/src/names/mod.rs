//! Pre-interned operator names.
//!
//! Operator lookups are keyed by [`Name`], so callers should not intern
//! `"plus"` on every query. [`OperatorNames`] interns every operator name
//! once, when the registry is built, and hands out the `Name` values.

use wk_ir::{Name, StringInterner};

/// Interned names of the standard-library operator members.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperatorNames {
    // Arithmetic
    pub plus: Name,
    pub minus: Name,
    pub times: Name,
    pub div: Name,
    pub rem: Name,

    // Bitwise and shifts
    pub and: Name,
    pub or: Name,
    pub xor: Name,
    pub shl: Name,
    pub shr: Name,
    pub ushr: Name,
    pub inv: Name,

    // Unary
    pub not: Name,
    pub inc: Name,
    pub dec: Name,
    pub unary_minus: Name,
    pub unary_plus: Name,

    // Comparison
    pub compare_to: Name,
    pub equals: Name,
}

impl OperatorNames {
    pub fn new(interner: &StringInterner) -> Self {
        Self {
            plus: interner.intern("plus"),
            minus: interner.intern("minus"),
            times: interner.intern("times"),
            div: interner.intern("div"),
            rem: interner.intern("rem"),
            and: interner.intern("and"),
            or: interner.intern("or"),
            xor: interner.intern("xor"),
            shl: interner.intern("shl"),
            shr: interner.intern("shr"),
            ushr: interner.intern("ushr"),
            inv: interner.intern("inv"),
            not: interner.intern("not"),
            inc: interner.intern("inc"),
            dec: interner.intern("dec"),
            unary_minus: interner.intern("unaryMinus"),
            unary_plus: interner.intern("unaryPlus"),
            compare_to: interner.intern("compareTo"),
            equals: interner.intern("equals"),
        }
    }

    /// `plus`, `minus`, `times`, `div`, `rem`.
    pub fn arithmetic(&self) -> [Name; 5] {
        [self.plus, self.minus, self.times, self.div, self.rem]
    }

    /// `and`, `or`, `xor`.
    pub fn bitwise(&self) -> [Name; 3] {
        [self.and, self.or, self.xor]
    }

    /// `shl`, `shr`, `ushr`; the shift amount is always an `Int`.
    pub fn shifts(&self) -> [Name; 3] {
        [self.shl, self.shr, self.ushr]
    }

    /// Whether `name` is a zero-parameter operator member.
    #[inline]
    pub fn is_unary(&self, name: Name) -> bool {
        name == self.not
            || name == self.inc
            || name == self.dec
            || name == self.unary_minus
            || name == self.unary_plus
            || name == self.inv
    }
}
