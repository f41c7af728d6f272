//! ZeroExtend, SignExtend, Truncate.
//!
//! All three are monotone unary operations whose per-interval
//! endpoints transform independently, so unlike the rest of `ops/`
//! they bypass [`crate::harness::transfer_unary`] and map directly
//! over intervals — there's no overflow/corner classification needed
//! since extension never loses information and truncation's single
//! edge case is a direct per-interval check.

use crate::bits::Bits;
use crate::interval::Interval;
use crate::sets::IntervalSet;

/// Widen every value by zero-filling the high bits.
///
/// # Panics
/// Panics if `new_width < a.width()`.
pub fn zero_extend(a: &IntervalSet, new_width: u32) -> IntervalSet {
    map_intervals(a, new_width, |iv| {
        Interval::new_unchecked(iv.lo().zero_extend(new_width), iv.hi().zero_extend(new_width))
    })
}

/// Widen every value, sign-extending: each interval's endpoints extend
/// independently (not the whole set as one signed range), since
/// intervals here are always unsigned ranges.
///
/// # Panics
/// Panics if `new_width < a.width()`.
pub fn sign_extend(a: &IntervalSet, new_width: u32) -> IntervalSet {
    map_intervals(a, new_width, |iv| {
        Interval::new_unchecked(iv.lo().sign_extend(new_width), iv.hi().sign_extend(new_width))
    })
}

fn map_intervals(a: &IntervalSet, new_width: u32, f: impl Fn(&Interval) -> Interval) -> IntervalSet {
    let mapped: Vec<Interval> = a.iter().map(f).collect();
    IntervalSet::new(new_width, mapped)
}

/// Narrow to `new_width` bits, discarding high bits.
///
/// Per interval `[lo, hi]`: if `hi - lo >= 2^new_width`, the interval
/// already spans every truncated value, so the result is
/// `Maximal(new_width)`; otherwise the truncated endpoints `[lo[0:w],
/// hi[0:w]]` may be improper (wrap), which normalization handles.
///
/// # Panics
/// Panics if `new_width > a.width()`.
pub fn truncate(a: &IntervalSet, new_width: u32) -> IntervalSet {
    let mut out: Vec<Interval> = Vec::with_capacity(a.number_of_intervals());
    for iv in a.iter() {
        if new_width < 128 && iv.len_minus_one() >= 1u128 << new_width {
            return IntervalSet::maximal(new_width);
        }
        out.push(Interval::new_unchecked(iv.lo().truncate(new_width), iv.hi().truncate(new_width)));
    }
    IntervalSet::new(new_width, out)
}
