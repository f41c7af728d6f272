//! The ternary↔interval bridge.
//!
//! This is the mechanism by which arbitrarily-structured bitwise
//! operations get an interval-set semantics: lift to
//! [`crate::ternary::TernaryVector`], evaluate bit-by-bit, lower back.
//! Two one-directional functions, composed by [`crate::ops::bitwise`];
//! no recursion or cyclic dependency between the two directions.

use crate::bits::Bits;
use crate::interval::Interval;
use crate::knownbits::KnownBits;
use crate::sets::IntervalSet;
use crate::ternary::{TernaryVector, Trit};

/// Lift a normalized, non-empty [`IntervalSet`] to the tightest
/// [`TernaryVector`] consistent with every value in the set.
///
/// For each interval, the longest common MSB prefix of `lo` and `hi`
/// is known; the remaining suffix is `⊤`. The per-interval vectors are
/// then folded together with a bitwise meet.
///
/// # Panics
/// Panics if `set` is empty (there is no ternary vector consistent
/// with an empty set of values).
pub fn extract_ternary(set: &IntervalSet) -> TernaryVector {
    assert!(!set.is_empty(), "ExtractTernary requires a non-empty set");

    let mut intervals = set.iter();
    let first = intervals.next().unwrap();
    let mut acc = ternary_of_interval(first, set.width());
    for iv in intervals {
        acc.update_with_intersection(&ternary_of_interval(iv, set.width()));
    }
    acc
}

/// `ExtractKnownBits(set)` (spec.md §6.1): the known-bits summary of
/// the tightest ternary vector consistent with `set`, i.e.
/// `KnownBits::from_ternary(&extract_ternary(set))`.
///
/// # Panics
/// Panics if `set` is empty, same as [`extract_ternary`].
pub fn extract_known_bits(set: &IntervalSet) -> KnownBits {
    KnownBits::from_ternary(&extract_ternary(set))
}

fn ternary_of_interval(iv: &Interval, width: u32) -> TernaryVector {
    let lo = iv.lo();
    let hi = iv.hi();
    let mut v = TernaryVector::unknown(width);
    let mut i = width;
    loop {
        if i == 0 {
            break;
        }
        i -= 1;
        if lo.bit(i) == hi.bit(i) {
            v.set_bit(i, if lo.bit(i) { Trit::One } else { Trit::Zero });
        } else {
            // first mismatching bit (scanning msb to lsb): every bit
            // at or below this one is unknown.
            break;
        }
    }
    v
}

/// Lower a [`TernaryVector`] to an [`IntervalSet`] with at most
/// `max_intervals` intervals.
///
/// Walks the vector's unknown bits MSB→LSB, keeping a sliding window
/// of at most `max_intervals + 1` unknown-bit positions; once the
/// window would overflow, the oldest (highest) unknown bit is folded
/// into a contiguous low run (`lsb_xs`) instead of being enumerated.
/// That window bound alone can still enumerate up to `2^(max_intervals
/// + 1)` intervals when interspersed unknown bits don't happen to
/// merge on normalization (e.g. `1⊤1⊤1⊤` with `max_intervals == 1`), so
/// the final step re-minimizes down to the stated cap.
pub fn from_ternary(t: &TernaryVector, max_intervals: usize) -> IntervalSet {
    let width = t.width();

    if t.is_fully_known() {
        return IntervalSet::precise(t.to_known_bits_value());
    }

    // Position of the lowest *known* bit: everything below it is `⊤`
    // and forms the initial contiguous low run.
    let mut lsb_xs = 0u32;
    while lsb_xs < width && !t.is_known(lsb_xs) {
        lsb_xs += 1;
    }

    // Remaining unknown-bit positions strictly above lsb_xs, in
    // msb-to-lsb order, bounded to a sliding window of size
    // `max_intervals + 1`; positions that fall out of the window get
    // absorbed into the low run by raising `lsb_xs`.
    let mut window: Vec<u32> = Vec::new();
    for pos in (lsb_xs..width).rev() {
        if !t.is_known(pos) {
            window.push(pos);
        }
    }
    window.reverse(); // msb-to-lsb order now ascending-index order is lsb-first; keep explicit below.
    window.sort_unstable();
    window.reverse(); // descending: highest bit position first

    while window.len() > max_intervals.saturating_add(1) {
        // absorb the *lowest* of the tracked unknown bits (closest to
        // lsb_xs) into the low run, since it's cheapest to fold.
        let absorbed = window.pop().unwrap();
        lsb_xs = lsb_xs.max(absorbed + 1);
    }
    // any bit positions between the old lsb_xs and the new one must
    // also be dropped from the window (they're now part of the run).
    window.retain(|&pos| pos >= lsb_xs);

    let run_len = lsb_xs;
    let step = if run_len >= 128 { 0u128 } else { 1u128 << run_len };

    // known, non-⊤ bits at/above lsb_xs contribute a fixed base value.
    let mut base = 0u128;
    for pos in lsb_xs..width {
        if let Trit::One = t.bit(pos) {
            base |= 1u128 << pos;
        }
    }

    let k = window.len();
    let mut intervals = Vec::with_capacity(1usize << k);
    for mask in 0..(1u128 << k) {
        let mut value = base;
        for (bit_idx, &pos) in window.iter().enumerate() {
            let bit = (mask >> bit_idx) & 1;
            value |= bit << pos;
        }
        let lo = Bits::new(width, value);
        let hi = if step == 0 {
            Bits::max(width)
        } else {
            Bits::new(width, value + (step - 1))
        };
        intervals.push(Interval::new_unchecked(lo, hi));
    }

    // The sliding window above can still retain up to `max_intervals +
    // 1` interspersed unknown-bit positions (spec.md §4.2's own window
    // bound), which enumerates up to 2^(max_intervals + 1) intervals
    // when none of them happen to be adjacent after normalization.
    // Re-minimize so callers (notably `ops::bitwise`, which never
    // re-minimizes its own result) can rely on the stated "at most
    // `max_intervals`" guarantee unconditionally.
    crate::minimize::minimize_intervals(&IntervalSet::new(width, intervals), max_intervals.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_ternary_single_interval() {
        // [8, 11] = 0b1000..0b1011: common prefix "10", suffix unknown.
        let set = IntervalSet::new(
            4,
            vec![Interval::new_unchecked(Bits::new(4, 8), Bits::new(4, 11))],
        );
        let t = extract_ternary(&set);
        assert_eq!(t.bit(3), Trit::One);
        assert_eq!(t.bit(2), Trit::Zero);
        assert_eq!(t.bit(1), Trit::Top);
        assert_eq!(t.bit(0), Trit::Top);
    }

    #[test]
    fn extract_ternary_folds_across_intervals() {
        let set = IntervalSet::new(
            4,
            vec![
                Interval::new_unchecked(Bits::new(4, 0), Bits::new(4, 0)),
                Interval::new_unchecked(Bits::new(4, 8), Bits::new(4, 8)),
            ],
        );
        let t = extract_ternary(&set);
        // {0, 8}: bit 3 disagrees (0 vs 1) -> top; bits 2,1,0 agree at 0.
        assert_eq!(t.bit(3), Trit::Top);
        assert_eq!(t.bit(2), Trit::Zero);
        assert_eq!(t.bit(1), Trit::Zero);
        assert_eq!(t.bit(0), Trit::Zero);
    }

    #[test]
    fn from_ternary_fully_known_is_precise() {
        let t = TernaryVector::from_bits(Bits::new(4, 7));
        let set = from_ternary(&t, 16);
        assert_eq!(set.get_precise_value(), Some(Bits::new(4, 7)));
    }

    #[test]
    fn from_ternary_interspersed_unknowns_still_respect_budget() {
        // 1⊤1⊤1⊤ (bits 5..0): alternating known/unknown bits means the
        // sliding window alone would retain both unknown positions
        // inside its max_intervals+1 slack and enumerate 4 intervals
        // for a budget of 1 before the final re-minimize step.
        let mut t = TernaryVector::unknown(6);
        t.set_bit(5, Trit::One);
        t.set_bit(3, Trit::One);
        t.set_bit(1, Trit::One);
        let set = from_ternary(&t, 1);
        assert_eq!(set.number_of_intervals(), 1);
        // still must cover every concrete filling of the unknown bits
        // 4, 2, 0, with bits 5, 3, 1 fixed to 1.
        let known = (1 << 5) | (1 << 3) | (1 << 1);
        for unknown_bit4 in [0u128, 1] {
            for unknown_bit2 in [0u128, 1] {
                for unknown_bit0 in [0u128, 1] {
                    let v = known | (unknown_bit4 << 4) | (unknown_bit2 << 2) | unknown_bit0;
                    assert!(set.covers(Bits::new(6, v)));
                }
            }
        }
    }

    #[test]
    fn from_ternary_respects_budget() {
        // fully unknown 4-bit vector: naive expansion is 16 singletons,
        // but budget of 1 should collapse to the maximal interval.
        let t = TernaryVector::unknown(4);
        let set = from_ternary(&t, 1);
        assert!(set.number_of_intervals() <= 1);
        assert_eq!(set, IntervalSet::maximal(4));
    }

    #[test]
    fn from_ternary_round_trip_contains_source_set() {
        let set = IntervalSet::new(
            4,
            vec![Interval::new_unchecked(Bits::new(4, 8), Bits::new(4, 11))],
        );
        let t = extract_ternary(&set);
        let back = from_ternary(&t, 16);
        for v in 8..=11u128 {
            assert!(back.covers(Bits::new(4, v)));
        }
    }

    #[test]
    fn extract_known_bits_matches_direct_ternary_conversion() {
        let set = IntervalSet::new(
            4,
            vec![Interval::new_unchecked(Bits::new(4, 8), Bits::new(4, 11))],
        );
        let kb = extract_known_bits(&set);
        let expected = KnownBits::from_ternary(&extract_ternary(&set));
        assert_eq!(kb, expected);
        assert_eq!(kb.mask.value(), 0b1100);
        assert_eq!(kb.values.value(), 0b1000);
    }

    #[test]
    fn s4_and_example() {
        // S4: And(FromTernary(⊤⊤01, 4), Precise(0b1110)) over width 4.
        let mut t = TernaryVector::unknown(4);
        t.set_bit(1, Trit::Zero);
        t.set_bit(0, Trit::One);
        let lhs = from_ternary(&t, 4);
        let rhs_ternary = TernaryVector::from_bits(Bits::new(4, 0b1110));
        let lhs_ternary = extract_ternary(&lhs);
        let anded = lhs_ternary.and(&rhs_ternary);
        let result = from_ternary(&anded, 4);
        for v in [0u128, 4, 8, 12] {
            assert!(result.covers(Bits::new(4, v)));
        }
    }
}
