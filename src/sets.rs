//! [`IntervalSet`]: a width-tagged, normalized union of disjoint
//! proper [`Interval`]s.
//!
//! A thin `Vec`-backed wrapper whose only public mutation surface is
//! "build a new one and normalize it", never in-place mutation of an
//! existing value.

use core::fmt;

use crate::bits::Bits;
use crate::interval::Interval;

/// A normalized union of disjoint, non-adjacent, proper intervals,
/// sorted by `lo`, all sharing a common bit-vector width.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalSet {
    width: u32,
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Build an `IntervalSet` from an arbitrary (possibly improper,
    /// unsorted, overlapping) list of same-width intervals and
    /// normalize it.
    ///
    /// # Panics
    /// Panics if any interval's width differs from `width`.
    pub fn new(width: u32, intervals: Vec<Interval>) -> Self {
        for iv in &intervals {
            assert_eq!(iv.width(), width, "interval width does not match set width");
        }
        let mut set = Self { width, intervals };
        set.normalize();
        set
    }

    /// Build directly from already-normalized intervals. Behavior is
    /// unspecified (not undefined: just wrong results, never memory
    /// unsafety) if the invariants don't hold.
    pub(crate) fn new_unchecked(width: u32, intervals: Vec<Interval>) -> Self {
        Self { width, intervals }
    }

    /// The empty set at the given width.
    pub fn empty(width: u32) -> Self {
        Self { width, intervals: Vec::new() }
    }

    /// `{[0, 2^width - 1]}`: the full range of the type.
    pub fn maximal(width: u32) -> Self {
        Self::new_unchecked(width, vec![Interval::new_unchecked(Bits::zero(width), Bits::max(width))])
    }

    /// `{v}`.
    pub fn precise(v: Bits) -> Self {
        Self::new_unchecked(v.width(), vec![Interval::single(v)])
    }

    /// `{[1, 2^width - 1]}`.
    pub fn non_zero(width: u32) -> Self {
        if width == 0 {
            return Self::empty(width);
        }
        let one = Bits::one(width);
        let max = Bits::max(width);
        if one > max {
            Self::empty(width)
        } else {
            Self::new_unchecked(width, vec![Interval::new_unchecked(one, max)])
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    #[inline]
    pub fn number_of_intervals(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn is_precise(&self) -> bool {
        matches!(self.intervals.as_slice(), [iv] if iv.is_singleton())
    }

    /// The precise value, if this set contains exactly one.
    pub fn get_precise_value(&self) -> Option<Bits> {
        match self.intervals.as_slice() {
            [iv] if iv.is_singleton() => Some(iv.lo()),
            _ => None,
        }
    }

    pub fn covers(&self, v: Bits) -> bool {
        // intervals are sorted and disjoint, so binary search is valid,
        // but linear scan is simple and the set sizes here are tiny
        // (<= 16 after minimization).
        self.intervals.iter().any(|iv| iv.contains(v))
    }

    pub fn covers_zero(&self) -> bool {
        self.covers(Bits::zero(self.width))
    }

    pub fn covers_max(&self) -> bool {
        self.covers(Bits::max(self.width))
    }

    pub fn lower_bound(&self) -> Option<Bits> {
        self.intervals.first().map(Interval::lo)
    }

    pub fn upper_bound(&self) -> Option<Bits> {
        self.intervals.last().map(Interval::hi)
    }

    /// The smallest interval containing every value in this set, or
    /// `None` if the set is empty.
    pub fn convex_hull(&self) -> Option<Interval> {
        let (first, rest) = self.intervals.split_first()?;
        Some(rest.iter().fold(*first, |acc, iv| Interval::convex_hull(&acc, iv)))
    }

    /// Whether this set currently satisfies the canonical-form
    /// invariants of spec.md §3.3: every interval shares the set's
    /// width, is proper, and the sequence is sorted by `lo` with no
    /// overlapping or adjacent neighbors.
    ///
    /// Every set built through [`IntervalSet::new`] (or a transfer
    /// function, which always goes through it) is normalized; this
    /// exists to check values built via `new_unchecked` or otherwise
    /// assembled from already-normalized pieces.
    pub fn is_normalized(&self) -> bool {
        self.intervals.iter().all(|iv| iv.width() == self.width && iv.lo() <= iv.hi())
            && self.intervals.windows(2).all(|w| {
                let (prev, next) = (&w[0], &w[1]);
                prev.lo() < next.lo() && !Interval::adjacent(prev, next) && next.lo() > prev.hi()
            })
    }

    /// Transform normalize to canonical form: split any improper
    /// intervals, sort by `lo`, sweep-merge overlapping or adjacent
    /// intervals.
    fn normalize(&mut self) {
        if self.intervals.is_empty() {
            return;
        }

        let width = self.width;
        let mut split = Vec::with_capacity(self.intervals.len());
        for iv in self.intervals.drain(..) {
            if iv.lo() <= iv.hi() {
                split.push(iv);
            } else {
                split.extend(Interval::new(iv.lo(), iv.hi()));
            }
        }

        split.sort();

        let mut merged: Vec<Interval> = Vec::with_capacity(split.len());
        for iv in split {
            match merged.last_mut() {
                Some(last) if iv.lo() <= last.hi() || Interval::adjacent(last, &iv) => {
                    if iv.hi() > last.hi() {
                        *last = Interval::new_unchecked(last.lo(), iv.hi());
                    }
                }
                _ => merged.push(iv),
            }
        }

        debug_assert!(merged.iter().all(|iv| iv.width() == width));
        self.intervals = merged;
    }

    /// Union of two sets, normalized.
    ///
    /// # Panics
    /// Panics if the two sets don't share a width.
    pub fn combine(&self, other: &IntervalSet) -> IntervalSet {
        assert_eq!(self.width, other.width, "Combine requires matching widths");
        let mut all = self.intervals.clone();
        all.extend(other.intervals.iter().copied());
        IntervalSet::new(self.width, all)
    }

    /// Set intersection.
    ///
    /// # Panics
    /// Panics if the two sets don't share a width.
    pub fn intersect(&self, other: &IntervalSet) -> IntervalSet {
        assert_eq!(self.width, other.width, "Intersect requires matching widths");
        let mut result = Vec::new();
        let (mut i, mut j) = (0usize, 0usize);
        while i < self.intervals.len() && j < other.intervals.len() {
            let a = self.intervals[i];
            let b = other.intervals[j];
            if !Interval::disjoint(&a, &b) {
                let lo = a.lo().max(b.lo());
                let hi = a.hi().min(b.hi());
                result.push(Interval::new_unchecked(lo, hi));
            }
            if a.hi() <= b.hi() {
                i += 1;
            } else {
                j += 1;
            }
        }
        IntervalSet::new_unchecked(self.width, result)
    }

    /// Whether the two sets share no values.
    ///
    /// # Panics
    /// Panics if the two sets don't share a width.
    pub fn disjoint(&self, other: &IntervalSet) -> bool {
        self.intersect(other).is_empty()
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{iv}")?;
        }
        write!(f, "}}_{}", self.width)
    }
}
