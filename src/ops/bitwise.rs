//! Not, And, Or, Xor.
//!
//! There's no monotone/antitone structure on bitwise ops across
//! arbitrary bit positions, so these go through
//! [`crate::bridge::extract_ternary`]/[`crate::bridge::from_ternary`]
//! instead of [`crate::harness::transfer`]: lift both operands to
//! [`crate::ternary::TernaryVector`], evaluate per-bit, lower back.

use crate::limits::DEFAULT_MAX_INTERVALS;
use crate::sets::IntervalSet;

pub fn not(a: &IntervalSet) -> IntervalSet {
    if a.is_empty() {
        return IntervalSet::empty(a.width());
    }
    let t = crate::bridge::extract_ternary(a).not();
    crate::bridge::from_ternary(&t, DEFAULT_MAX_INTERVALS)
}

pub fn and(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    bitwise(a, b, |x, y| x.and(y))
}

pub fn or(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    bitwise(a, b, |x, y| x.or(y))
}

pub fn xor(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    bitwise(a, b, |x, y| x.xor(y))
}

fn bitwise(
    a: &IntervalSet,
    b: &IntervalSet,
    op: impl Fn(&crate::ternary::TernaryVector, &crate::ternary::TernaryVector) -> crate::ternary::TernaryVector,
) -> IntervalSet {
    assert_eq!(a.width(), b.width(), "bitwise ops require matching widths");
    if a.is_empty() || b.is_empty() {
        return IntervalSet::empty(a.width());
    }
    let ta = crate::bridge::extract_ternary(a);
    let tb = crate::bridge::extract_ternary(b);
    let result = op(&ta, &tb);
    crate::bridge::from_ternary(&result, DEFAULT_MAX_INTERVALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Bits;

    #[test]
    fn not_of_precise_value() {
        let a = IntervalSet::precise(Bits::new(4, 0b0101));
        assert_eq!(not(&a).get_precise_value(), Some(Bits::new(4, 0b1010)));
    }

    #[test]
    fn and_with_zero_is_zero() {
        let a = IntervalSet::maximal(4);
        let b = IntervalSet::precise(Bits::zero(4));
        assert_eq!(and(&a, &b).get_precise_value(), Some(Bits::zero(4)));
    }

    #[test]
    fn or_with_max_is_max() {
        let a = IntervalSet::maximal(4);
        let b = IntervalSet::precise(Bits::max(4));
        assert_eq!(or(&a, &b).get_precise_value(), Some(Bits::max(4)));
    }

    #[test]
    fn empty_operand_yields_empty() {
        let a = IntervalSet::empty(4);
        let b = IntervalSet::precise(Bits::new(4, 3));
        assert!(and(&a, &b).is_empty());
    }
}
