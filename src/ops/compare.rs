//! Eq, Ne, ULt, UGt, SLt, SGt.
//!
//! Each produces a 1-bit [`IntervalSet`]. Equality and ordering are
//! decided from the operands' shape directly (precise/disjoint,
//! convex-hull disjointness) rather than through the corner harness,
//! since there's no arithmetic overflow to classify here. Signed
//! comparisons delegate to the unsigned ones, biasing first when the
//! operands don't already share a sign class.

use crate::bits::Bits;
use crate::ops::arith::add;
use crate::sets::IntervalSet;

fn one_bit(value: Option<bool>) -> IntervalSet {
    match value {
        Some(true) => IntervalSet::precise(Bits::one(1)),
        Some(false) => IntervalSet::precise(Bits::zero(1)),
        None => IntervalSet::maximal(1),
    }
}

/// `1` if both operands are precise and equal; `0` if they share no
/// values; else `⊤`.
pub fn eq(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    if a.is_empty() || b.is_empty() {
        return IntervalSet::empty(1);
    }
    match (a.get_precise_value(), b.get_precise_value()) {
        (Some(x), Some(y)) if x == y => one_bit(Some(true)),
        _ if a.disjoint(b) => one_bit(Some(false)),
        _ => one_bit(None),
    }
}

pub fn ne(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    crate::ops::bitwise::not(&eq(a, b))
}

/// `1` if `a`'s convex hull lies entirely below `b`'s; `0` if entirely
/// above or equal; else `⊤`.
pub fn ult(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    if a.is_empty() || b.is_empty() {
        return IntervalSet::empty(1);
    }
    let hull_a = a.convex_hull().expect("non-empty set has a hull");
    let hull_b = b.convex_hull().expect("non-empty set has a hull");
    if hull_a.hi() < hull_b.lo() {
        one_bit(Some(true))
    } else if hull_b.hi() < hull_a.lo() {
        one_bit(Some(false))
    } else {
        one_bit(None)
    }
}

pub fn ugt(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    ult(b, a)
}

/// Whether `a` lies entirely in one sign class: `Some(true)` if every
/// value's MSB is `1` (negative), `Some(false)` if every MSB is `0`
/// (non-negative), `None` if mixed or empty.
fn sign_class(a: &IntervalSet) -> Option<bool> {
    let hi = a.upper_bound()?;
    let lo = a.lower_bound()?;
    if !hi.msb() {
        Some(false)
    } else if lo.msb() {
        Some(true)
    } else {
        None
    }
}

fn bias(a: &IntervalSet) -> IntervalSet {
    let w = a.width();
    let offset = IntervalSet::precise(Bits::new(w, 1u128 << (w - 1)));
    add(a, &offset)
}

/// Signed less-than. Delegates directly to [`ult`] when both operands
/// share a sign class; otherwise adds the signed-bias offset
/// `2^(w-1)` to both and delegates — this bias addition goes through
/// ordinary interval arithmetic and so may coarsen
/// precision versus a direct signed comparison.
pub fn slt(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    match (sign_class(a), sign_class(b)) {
        (Some(ca), Some(cb)) if ca == cb => ult(a, b),
        _ => ult(&bias(a), &bias(b)),
    }
}

pub fn sgt(a: &IntervalSet, b: &IntervalSet) -> IntervalSet {
    slt(b, a)
}
