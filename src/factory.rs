//! [`Factory`]: named constructors for [`IntervalSet`], mirroring the
//! teacher's `EmptyFactory`/`FiniteFactory` trait split
//! (`factory.rs`) but specialized to a single fixed value domain
//! ([`Bits`]) instead of a generic `Converter<T>` — there is nothing
//! to convert from, so one trait replaces the teacher's factory
//! hierarchy.
//!
//! Each panicking constructor has a `strict_`-prefixed twin returning
//! `Result<_, Error>`, following the teacher's `closed`/`strict_closed`
//! pairing: the panicking form is for call sites that already know
//! their inputs are well-formed (widths agree, budgets are
//! non-negative), the `strict_` form is for boundaries that accept
//! external input.

use crate::bits::Bits;
use crate::error::Error;
use crate::sets::IntervalSet;
use crate::ternary::TernaryVector;

/// Named constructors for [`IntervalSet`] (spec.md §4.1, §6.1).
///
/// Implemented on `IntervalSet` itself, the way the teacher implements
/// `EnumInterval` as its own default factory.
pub trait Factory {
    /// `{}` at the given width.
    fn empty(width: u32) -> Self;

    /// `{[0, 2^width - 1]}`.
    fn maximal(width: u32) -> Self;

    /// `{v}`.
    fn precise(v: Bits) -> Self;

    /// `{[1, 2^width - 1]}`.
    fn non_zero(width: u32) -> Self;

    /// Lower a ternary vector to an interval set of at most
    /// `max_intervals` intervals (spec.md §4.2).
    fn from_ternary(t: &TernaryVector, max_intervals: usize) -> Self;

    /// As [`Factory::from_ternary`], but rejecting a zero budget
    /// instead of silently treating it as one.
    fn strict_from_ternary(t: &TernaryVector, max_intervals: usize) -> Result<Self, Error>
    where
        Self: Sized;
}

impl Factory for IntervalSet {
    fn empty(width: u32) -> Self {
        IntervalSet::empty(width)
    }

    fn maximal(width: u32) -> Self {
        IntervalSet::maximal(width)
    }

    fn precise(v: Bits) -> Self {
        IntervalSet::precise(v)
    }

    fn non_zero(width: u32) -> Self {
        IntervalSet::non_zero(width)
    }

    fn from_ternary(t: &TernaryVector, max_intervals: usize) -> Self {
        crate::bridge::from_ternary(t, max_intervals)
    }

    fn strict_from_ternary(t: &TernaryVector, max_intervals: usize) -> Result<Self, Error> {
        if max_intervals == 0 {
            return Err(Error::NegativeBudget { budget: 0 });
        }
        Ok(crate::bridge::from_ternary(t, max_intervals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_from_ternary_rejects_zero_budget() {
        let t = TernaryVector::unknown(4);
        assert!(IntervalSet::strict_from_ternary(&t, 0).is_err());
        assert!(IntervalSet::strict_from_ternary(&t, 1).is_ok());
    }

    #[test]
    fn factory_methods_match_inherent_ones() {
        assert_eq!(IntervalSet::empty(8), <IntervalSet as Factory>::empty(8));
        assert_eq!(IntervalSet::maximal(8), <IntervalSet as Factory>::maximal(8));
        assert_eq!(
            IntervalSet::precise(Bits::new(8, 3)),
            <IntervalSet as Factory>::precise(Bits::new(8, 3))
        );
    }
}
