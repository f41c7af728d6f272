//! Concat.
//!
//! Monotone variadic under unsigned interpretation: prepending more
//! significant bits preserves order, so concatenation goes through the
//! same corner-enumeration harness as the arithmetic ops, just with a
//! `calc` that delegates to [`crate::bits::Bits::concat`] instead of
//! doing arithmetic.

use crate::harness::{transfer, Tonicity};
use crate::sets::IntervalSet;

/// Concatenate `operands` msb-first: `operands[0]` becomes the high
/// bits of the result, `operands.last()` the low bits.
///
/// # Panics
/// Panics if `operands` is empty, or if the combined width would
/// exceed [`crate::bits::MAX_WIDTH`].
pub fn concat(operands: &[IntervalSet]) -> IntervalSet {
    assert!(!operands.is_empty(), "Concat requires at least one operand");
    let out_width: u32 = operands.iter().map(IntervalSet::width).sum();
    let tonicity = vec![Tonicity::Monotone; operands.len()];

    transfer(operands, &tonicity, out_width, |ops| {
        let mut iter = ops.iter();
        let mut acc = *iter.next().unwrap();
        for part in iter {
            acc = acc.concat(part);
        }
        (acc, false, false)
    })
}
