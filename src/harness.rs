//! The variadic transfer-function harness (spec.md §4.4).
//!
//! Most arithmetic transfer functions share the same shape: minimize
//! each operand, enumerate corner combinations, classify the result by
//! overflow. This module is that shared shape; `calc` closures in
//! [`crate::ops`] supply the per-operation arithmetic and overflow
//! semantics.
//!
//! Grounded on the teacher's "case-split enum over a signed/unsigned
//! corner analysis" pattern (`ops/math/mul.rs`'s `MCat`); here the
//! case split is the enumeration's overflow classification instead of
//! a multiplication sign table, generalized from binary to variadic
//! via [`itertools::Itertools::multi_cartesian_product`].

use itertools::Itertools;

use crate::bits::Bits;
use crate::interval::Interval;
use crate::limits::{DEFAULT_MAX_INTERVALS, HARNESS_OPERAND_CAP, HARNESS_OPERAND_CAP_TAIL, HARNESS_WIDE_OPERANDS};
use crate::minimize::minimize_intervals;
use crate::sets::IntervalSet;

/// Direction of monotonicity of an operand's contribution to a
/// transfer function's result (spec.md §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tonicity {
    /// `f(x, ..) <= f(y, ..)` whenever `x <= y`.
    Monotone,
    /// `f(x, ..) >= f(y, ..)` whenever `x <= y`.
    Antitone,
}

/// Run the variadic harness: minimize operands, enumerate corners,
/// classify by overflow, normalize and minimize the result.
///
/// `calc` computes the concrete operation plus two overflow flags:
/// `overflow1` is true if the true result would carry into bit `w`,
/// `overflow2` if it would carry into bit `w + 1` (spec.md §4.4).
///
/// # Panics
/// Panics if `operands.len() != tonicity.len()`.
pub fn transfer<F>(operands: &[IntervalSet], tonicity: &[Tonicity], out_width: u32, calc: F) -> IntervalSet
where
    F: Fn(&[Bits]) -> (Bits, bool, bool),
{
    assert_eq!(operands.len(), tonicity.len(), "one tonicity tag per operand");

    if operands.iter().any(IntervalSet::is_empty) {
        return IntervalSet::empty(out_width);
    }

    let minimized: Vec<IntervalSet> = operands
        .iter()
        .enumerate()
        .map(|(i, set)| {
            let cap = if i < HARNESS_WIDE_OPERANDS {
                HARNESS_OPERAND_CAP
            } else {
                HARNESS_OPERAND_CAP_TAIL
            };
            minimize_intervals(set, cap)
        })
        .collect();

    let mut accumulated: Vec<Interval> = Vec::new();

    let combos = minimized
        .iter()
        .map(|set| set.intervals().iter())
        .multi_cartesian_product();

    for combo in combos {
        let lower_corner: Vec<Bits> = combo
            .iter()
            .zip(tonicity)
            .map(|(iv, t)| match t {
                Tonicity::Monotone => iv.lo(),
                Tonicity::Antitone => iv.hi(),
            })
            .collect();
        let upper_corner: Vec<Bits> = combo
            .iter()
            .zip(tonicity)
            .map(|(iv, t)| match t {
                Tonicity::Monotone => iv.hi(),
                Tonicity::Antitone => iv.lo(),
            })
            .collect();

        let (lower_result, lower_of1, lower_of2) = calc(&lower_corner);
        let (upper_result, upper_of1, upper_of2) = calc(&upper_corner);

        if lower_of2 || upper_of2 {
            // spec.md §4.4 step 4, "double overflow on either side": a
            // carry this deep means the corners no longer bound
            // anything meaningful; no other combination can narrow it.
            return IntervalSet::maximal(out_width);
        } else if lower_of1 == upper_of1 {
            // both corners wrapped the same number of times (zero or
            // one), so the wrap cancels and order is preserved.
            if lower_result <= upper_result {
                accumulated.push(Interval::new_unchecked(lower_result, upper_result));
            } else {
                return IntervalSet::maximal(out_width);
            }
        } else if upper_result > lower_result {
            // one-sided overflow, but the wrapped endpoints didn't
            // invert as expected (spec.md §9 open question): the
            // sentinel that flags this as unsound to split precisely.
            return IntervalSet::maximal(out_width);
        } else {
            accumulated.push(Interval::new_unchecked(lower_result, Bits::max(out_width)));
            accumulated.push(Interval::new_unchecked(Bits::zero(out_width), upper_result));
        }
    }

    let result = IntervalSet::new(out_width, accumulated);
    minimize_intervals(&result, DEFAULT_MAX_INTERVALS)
}

/// Unary specialization of [`transfer`].
pub fn transfer_unary<F>(a: &IntervalSet, tonicity: Tonicity, out_width: u32, calc: F) -> IntervalSet
where
    F: Fn(&[Bits]) -> (Bits, bool, bool),
{
    transfer(&[a.clone()], &[tonicity], out_width, calc)
}

/// Binary specialization of [`transfer`].
pub fn transfer_binary<F>(
    a: &IntervalSet,
    b: &IntervalSet,
    tonicity: (Tonicity, Tonicity),
    out_width: u32,
    calc: F,
) -> IntervalSet
where
    F: Fn(&[Bits]) -> (Bits, bool, bool),
{
    transfer(&[a.clone(), b.clone()], &[tonicity.0, tonicity.1], out_width, calc)
}
