//! `arbitrary::Arbitrary` impls feeding the `fuzz/` crate.
//!
//! Each concrete type picks its own pieces off the `Unstructured` byte
//! stream directly rather than deriving, since [`Bits`] needs its
//! value masked to a width chosen first.

use arbitrary::{Arbitrary, Result, Unstructured};

use crate::bits::{Bits, MAX_WIDTH};
use crate::interval::Interval;
use crate::sets::IntervalSet;

/// Bias widths toward the small end: fuzzing is most useful where
/// `2^width` exhaustive checks against the concrete semantics are
/// still cheap.
fn arbitrary_width(u: &mut Unstructured<'_>) -> Result<u32> {
    let small = u.ratio(9u8, 10u8)?;
    if small {
        Ok(u.int_in_range(1..=8)?)
    } else {
        Ok(u.int_in_range(1..=MAX_WIDTH)?)
    }
}

impl<'a> Arbitrary<'a> for Bits {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let width = arbitrary_width(u)?;
        let raw: u128 = u.arbitrary()?;
        Ok(Bits::new(width, raw))
    }
}

/// An arbitrary `Interval` sharing `width` with whatever context
/// constructed it (there is no standalone `Arbitrary for Interval`:
/// an interval's width is meaningless without a set to anchor it to).
fn arbitrary_interval(u: &mut Unstructured<'_>, width: u32) -> Result<Interval> {
    let a: u128 = u.arbitrary()?;
    let b: u128 = u.arbitrary()?;
    let lo = Bits::new(width, a);
    let hi = Bits::new(width, b);
    // Interval::new performs the wraparound split and may return two
    // intervals; an Arbitrary impl must return exactly one value, so
    // just take the first half when the pair was improper.
    Ok(Interval::new(lo, hi).remove(0))
}

impl<'a> Arbitrary<'a> for IntervalSet {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let width = arbitrary_width(u)?;
        let count = u.int_in_range(0..=3u8)?;
        let mut intervals = Vec::with_capacity(count as usize);
        for _ in 0..count {
            intervals.push(arbitrary_interval(u, width)?);
        }
        Ok(IntervalSet::new(width, intervals))
    }
}
