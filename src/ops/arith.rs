//! Add, Sub, Neg, UMul, UDiv.
//!
//! Each transfer function supplies a `calc` closure to
//! [`crate::harness::transfer`], adapted to fixed-width [`Bits`] with
//! explicit overflow bits instead of checked-arithmetic `Option`s.

use crate::bits::Bits;
use crate::factory::Factory;
use crate::harness::{transfer_binary, transfer_unary, Tonicity};
use crate::sets::IntervalSet;

/// `lhs + rhs`, truncated to `lhs`'s width.
pub fn add(lhs: &IntervalSet, rhs: &IntervalSet) -> IntervalSet {
    let width = lhs.width();
    transfer_binary(lhs, rhs, (Tonicity::Monotone, Tonicity::Monotone), width, move |ops| {
        let widened = ops[0].widening_add(&ops[1]);
        (widened.truncate(width), widened.bit(width), false)
    })
}

/// `lhs - rhs`, truncated to `lhs`'s width.
pub fn sub(lhs: &IntervalSet, rhs: &IntervalSet) -> IntervalSet {
    let width = lhs.width();
    transfer_binary(lhs, rhs, (Tonicity::Monotone, Tonicity::Antitone), width, move |ops| {
        let overflow = ops[0] < ops[1];
        (ops[0].wrapping_sub(&ops[1]), overflow, false)
    })
}

/// `-a` (two's-complement negation).
pub fn neg(a: &IntervalSet) -> IntervalSet {
    let width = a.width();
    transfer_unary(a, Tonicity::Antitone, width, move |ops| {
        let overflow = !ops[0].is_zero();
        (ops[0].wrapping_neg(), overflow, false)
    })
}

/// Unsigned multiplication, producing a result of `out_width` bits.
///
/// `overflow1` trips when the true product's highest set bit is at or
/// beyond `out_width`; `overflow2` when it's at or beyond `out_width +
/// 1`. Computed against the untruncated product (`Bits::umul_overflowing`)
/// so operands whose combined width exceeds 128 bits (and would
/// otherwise wrap inside a `u128`) still report overflow correctly.
pub fn umul(lhs: &IntervalSet, rhs: &IntervalSet, out_width: u32) -> IntervalSet {
    transfer_binary(lhs, rhs, (Tonicity::Monotone, Tonicity::Monotone), out_width, move |ops| {
        ops[0].umul_overflowing(&ops[1], out_width)
    })
}

/// Unsigned division. Never overflows; division by zero is defined to
/// return `2^w - 1`.
///
/// If the divisor set covers zero, the zero case is handled
/// separately: intersect the divisor with `NonZero(w)`, run the
/// ordinary transfer on what remains, then union in `{MAX}`.
pub fn udiv(lhs: &IntervalSet, rhs: &IntervalSet) -> IntervalSet {
    let width = lhs.width();
    if !rhs.covers_zero() {
        return udiv_nonzero(lhs, rhs, width);
    }

    let nonzero_rhs = rhs.intersect(&IntervalSet::non_zero(width));
    let from_nonzero = if nonzero_rhs.is_empty() {
        IntervalSet::empty(width)
    } else {
        udiv_nonzero(lhs, &nonzero_rhs, width)
    };
    from_nonzero.combine(&IntervalSet::precise(Bits::max(width)))
}

fn udiv_nonzero(lhs: &IntervalSet, rhs: &IntervalSet, width: u32) -> IntervalSet {
    transfer_binary(lhs, rhs, (Tonicity::Monotone, Tonicity::Antitone), width, |ops| {
        (ops[0].wrapping_div(&ops[1]), false, false)
    })
}
