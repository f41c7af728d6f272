//! Cross-module round-trip laws (spec.md §8.2), grounded on the
//! teacher's top-level `intervalsets/tests/integration.rs`: exercises
//! laws that span more than one module (normalize, minimize, the
//! ternary bridge, extend/truncate) the way the teacher's integration
//! tests exercise whole-crate behavior rather than one file's unit.

use bvabs::ops;
use bvabs::{Bits, Factory, Interval, IntervalSet};

fn iv(lo: u128, hi: u128, w: u32) -> Interval {
    Interval::new(Bits::new(w, lo), Bits::new(w, hi)).remove(0)
}

#[test]
fn normalize_is_idempotent() {
    let once = IntervalSet::new(8, vec![iv(0, 4, 8), iv(5, 9, 8), iv(50, 60, 8)]);
    let twice = IntervalSet::new(8, once.intervals().to_vec());
    assert_eq!(once, twice);
}

#[test]
fn bridge_round_trip_contains_source_set() {
    // spec.md §8.2: FromTernary(ExtractTernary(s), inf) superset-of s,
    // tight when s is a single ternary-representable interval.
    let set = IntervalSet::new(8, vec![iv(8, 11, 8)]);
    let ternary = bvabs::bridge::extract_ternary(&set);
    let back = bvabs::bridge::from_ternary(&ternary, 16);
    for v in 8..=11u128 {
        assert!(back.covers(Bits::new(8, v)));
    }
    // tight: [8, 11] is exactly representable (lo=0b1000, hi=0b1011
    // share prefix "10").
    assert_eq!(back, set);
}

#[test]
fn bridge_round_trip_is_never_tighter_than_source() {
    let set = IntervalSet::new(8, vec![iv(3, 100, 8), iv(200, 210, 8)]);
    let ternary = bvabs::bridge::extract_ternary(&set);
    let back = bvabs::bridge::from_ternary(&ternary, 16);
    for iv in set.iter() {
        assert!(back.covers(iv.lo()));
        assert!(back.covers(iv.hi()));
    }
}

#[test]
fn minimize_idempotent_once_at_budget() {
    let set = IntervalSet::new(8, vec![iv(0, 4, 8), iv(50, 60, 8), iv(200, 210, 8)]);
    let once = bvabs::minimize::minimize_intervals(&set, 2);
    let twice = bvabs::minimize::minimize_intervals(&once, 2);
    assert_eq!(once, twice);
    assert!(once.number_of_intervals() <= 2);
}

#[test]
fn minimize_is_a_superset_of_the_input() {
    let set = IntervalSet::new(8, vec![iv(0, 4, 8), iv(50, 60, 8), iv(200, 210, 8)]);
    let minimized = bvabs::minimize::minimize_intervals(&set, 1);
    for v in [0u128, 4, 50, 60, 200, 210] {
        assert!(minimized.covers(Bits::new(8, v)));
    }
}

#[test]
fn zero_extend_of_truncate_contains_original_masked_to_narrow_width() {
    // spec.md §8.2: ZeroExtend(Truncate(s, w), w') superset-of
    // s intersect [0, 2^w - 1] when w' >= w.
    let set = IntervalSet::new(8, vec![iv(250, 255, 8), iv(0, 10, 8)]);
    let truncated = ops::extend::truncate(&set, 4);
    let back = ops::extend::zero_extend(&truncated, 8);
    for v in [250u128, 255, 0, 10] {
        let masked = v & 0xF;
        assert!(back.covers(Bits::new(8, masked)));
    }
}

#[test]
fn s1_add_precise_plus_range() {
    let a = IntervalSet::precise(Bits::new(8, 5));
    let b = IntervalSet::new(8, vec![iv(3, 7, 8)]);
    let result = ops::arith::add(&a, &b);
    assert_eq!(result, IntervalSet::new(8, vec![iv(8, 12, 8)]));
}

#[test]
fn s5_minimize_merges_smallest_gap_first() {
    let set = IntervalSet::new(8, vec![iv(0, 0, 8), iv(2, 2, 8), iv(10, 20, 8)]);
    let minimized = bvabs::minimize::minimize_intervals(&set, 2);
    assert_eq!(minimized, IntervalSet::new(8, vec![iv(0, 2, 8), iv(10, 20, 8)]));
}

#[test]
fn s6_slt_crossing_zero_bias() {
    let a = IntervalSet::precise(Bits::new(8, 0xFF)); // -1
    let b = IntervalSet::precise(Bits::new(8, 0x01)); // 1
    let result = ops::compare::slt(&a, &b);
    assert_eq!(result, IntervalSet::precise(Bits::one(1)));
}

#[test]
fn soundness_sampled_over_small_widths() {
    // spec.md §8.1: sample a handful of small-width operand bundles
    // and check the concrete result always lies in the abstract one.
    for width in 1..=6u32 {
        let max = (1u128 << width) - 1;
        let a = IntervalSet::new(width, vec![iv(0, max / 2, width)]);
        let b = IntervalSet::new(width, vec![iv(max / 2, max, width)]);
        let sum = ops::arith::add(&a, &b);
        for x in 0..=(max / 2) {
            for y in (max / 2)..=max {
                let expected = Bits::new(width, x).wrapping_add(&Bits::new(width, y));
                assert!(sum.covers(expected), "width {width}: {x} + {y} = {expected:?} not covered by {sum}");
            }
        }
    }
}
