//! Gate and OneHot.

use crate::bits::Bits;
use crate::sets::IntervalSet;

/// Scan direction for [`one_hot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    LsbToMsb,
    MsbToLsb,
}

/// `cond` is a 1-bit set gating the multi-bit `val`.
///
/// - `cond` precisely `0`: the gate is always closed, result is
///   `Precise(0)` at `val`'s width.
/// - `cond` precisely `1`: the gate is always open, result is `val`.
/// - `cond` covers both `0` and `1`: result is `Combine(val,
///   Precise(0))`.
/// - `cond` cannot cover zero (including the empty case): result is
///   `val`.
pub fn gate(cond: &IntervalSet, val: &IntervalSet) -> IntervalSet {
    let width = val.width();
    match cond.get_precise_value().map(|v| v.value()) {
        Some(0) => IntervalSet::precise(Bits::zero(width)),
        Some(_) => val.clone(),
        None if cond.covers_zero() => val.combine(&IntervalSet::precise(Bits::zero(width))),
        None => val.clone(),
    }
}

/// Lift `val` to ternary, evaluate the ternary one-hot scan in `side`
/// order, lower back with `max_intervals`. Result width is `val.width()
/// + 1`.
pub fn one_hot(val: &IntervalSet, side: Side, max_intervals: usize) -> IntervalSet {
    if val.is_empty() {
        return IntervalSet::empty(val.width() + 1);
    }
    let t = crate::bridge::extract_ternary(val);
    let result = match side {
        Side::LsbToMsb => t.one_hot_lsb_to_msb(),
        Side::MsbToLsb => t.one_hot_msb_to_lsb(),
    };
    crate::bridge::from_ternary(&result, max_intervals)
}
