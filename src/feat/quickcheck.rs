//! `quickcheck::Arbitrary` impls powering this crate's own property
//! tests (spec.md §8.1's universal soundness property).
//!
//! Grounded on the teacher's `intervalsets-core/src/feat/quickcheck.rs`:
//! a small `CHANCES_100`-style weighting table biases generation
//! toward the cases that actually exercise interesting behavior (here,
//! small widths and 1-3 interval sets) rather than uniform randomness
//! that would mostly generate near-maximal or near-empty sets.

use quickcheck::{Arbitrary, Gen};

use crate::bits::Bits;
use crate::interval::Interval;
use crate::sets::IntervalSet;

/// Small widths dominate (matches spec.md §8.1: "enumerating small
/// widths (1-6 bits)"), with an occasional wider one.
fn arbitrary_width(g: &mut Gen) -> u32 {
    let small_widths = [1u32, 2, 3, 4, 5, 6];
    if bool::arbitrary(g) || bool::arbitrary(g) {
        *g.choose(&small_widths).unwrap()
    } else {
        *g.choose(&[7u32, 8, 16, 32]).unwrap()
    }
}

impl Arbitrary for Bits {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = arbitrary_width(g);
        Bits::new(width, u128::arbitrary(g))
    }
}

fn arbitrary_interval(g: &mut Gen, width: u32) -> Interval {
    let a = Bits::new(width, u128::arbitrary(g));
    let b = Bits::new(width, u128::arbitrary(g));
    Interval::new(a, b).remove(0)
}

impl Arbitrary for IntervalSet {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = arbitrary_width(g);
        // bias toward 1-3 intervals, matching SPEC_FULL.md §7.4's note
        // that sampled operand sets should have 1-3 intervals each.
        let count = *g.choose(&[0u8, 1, 1, 1, 2, 2, 3]).unwrap();
        let intervals = (0..count).map(|_| arbitrary_interval(g, width)).collect();
        IntervalSet::new(width, intervals)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[quickcheck]
    fn normalize_is_idempotent(set: IntervalSet) -> bool {
        // `set` is already normalized by construction; re-wrapping its
        // intervals through `IntervalSet::new` must be a no-op
        // (spec.md §8.2's `Normalize(Normalize(s)) == Normalize(s)`).
        let renormalized = IntervalSet::new(set.width(), set.intervals().to_vec());
        renormalized == set
    }

    #[quickcheck]
    fn convex_hull_contains_every_interval(set: IntervalSet) -> bool {
        match set.convex_hull() {
            None => set.is_empty(),
            Some(hull) => set.iter().all(|iv| hull.lo() <= iv.lo() && iv.hi() <= hull.hi()),
        }
    }

    #[quickcheck]
    fn minimize_never_shrinks_the_value_set(set: IntervalSet, k: u8) -> bool {
        let k = (k as usize).max(1);
        let minimized = crate::minimize::minimize_intervals(&set, k);
        set.iter().all(|iv| minimized.covers(iv.lo()) && minimized.covers(iv.hi()))
    }
}
