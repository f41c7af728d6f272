//! AndReduce, OrReduce, XorReduce.
//!
//! Each reduction collapses a multi-bit set to a 1-bit
//! [`IntervalSet`]: `Precise(0)`, `Precise(1)`, or `Maximal(1)` when
//! the bit is genuinely undetermined.

use crate::bits::Bits;
use crate::sets::IntervalSet;

fn one_bit(value: Option<bool>) -> IntervalSet {
    match value {
        Some(true) => IntervalSet::precise(Bits::one(1)),
        Some(false) => IntervalSet::precise(Bits::zero(1)),
        None => IntervalSet::maximal(1),
    }
}

/// `1` iff `a` is precisely `{MAX}`; `0` if `a` does not cover `MAX`;
/// else `⊤`.
pub fn and_reduce(a: &IntervalSet) -> IntervalSet {
    if a.get_precise_value() == Some(Bits::max(a.width())) {
        one_bit(Some(true))
    } else if !a.covers_max() {
        one_bit(Some(false))
    } else {
        one_bit(None)
    }
}

/// `0` iff `a` is precisely `{0}`; `1` if `a` does not cover `0`; else
/// `⊤`.
pub fn or_reduce(a: &IntervalSet) -> IntervalSet {
    if a.get_precise_value() == Some(Bits::zero(a.width())) {
        one_bit(Some(false))
    } else if !a.covers_zero() {
        one_bit(Some(true))
    } else {
        one_bit(None)
    }
}

/// `⊤` unless every interval in `a` is a singleton and all singletons
/// share the same parity, in which case that shared parity.
pub fn xor_reduce(a: &IntervalSet) -> IntervalSet {
    let mut parity: Option<bool> = None;
    for iv in a.iter() {
        if !iv.is_singleton() {
            return one_bit(None);
        }
        let this_parity = popcount_parity(&iv.lo());
        match parity {
            None => parity = Some(this_parity),
            Some(existing) if existing == this_parity => {}
            Some(_) => return one_bit(None),
        }
    }
    one_bit(parity)
}

fn popcount_parity(v: &Bits) -> bool {
    (0..v.width()).fold(false, |acc, i| acc ^ v.bit(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    #[test]
    fn and_reduce_precise_max() {
        let a = IntervalSet::precise(Bits::max(4));
        assert_eq!(and_reduce(&a).get_precise_value(), Some(Bits::one(1)));
    }

    #[test]
    fn and_reduce_does_not_cover_max() {
        let a = IntervalSet::new(4, vec![Interval::new_unchecked(Bits::zero(4), Bits::new(4, 10))]);
        assert_eq!(and_reduce(&a).get_precise_value(), Some(Bits::zero(1)));
    }

    #[test]
    fn and_reduce_ambiguous_is_top() {
        let a = IntervalSet::maximal(4);
        assert_eq!(and_reduce(&a), IntervalSet::maximal(1));
    }

    #[test]
    fn or_reduce_precise_zero() {
        let a = IntervalSet::precise(Bits::zero(4));
        assert_eq!(or_reduce(&a).get_precise_value(), Some(Bits::zero(1)));
    }

    #[test]
    fn xor_reduce_matching_parity_singletons() {
        let a = IntervalSet::new(
            4,
            vec![Interval::single(Bits::new(4, 0b0011)), Interval::single(Bits::new(4, 0b0101))],
        );
        // 0b0011 has parity 0 (two set bits), 0b0101 has parity 0 too.
        assert_eq!(xor_reduce(&a).get_precise_value(), Some(Bits::zero(1)));
    }

    #[test]
    fn xor_reduce_non_singleton_is_top() {
        let a = IntervalSet::new(4, vec![Interval::new_unchecked(Bits::zero(4), Bits::new(4, 3))]);
        assert_eq!(xor_reduce(&a), IntervalSet::maximal(1));
    }
}
