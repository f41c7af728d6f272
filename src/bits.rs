//! Fixed-width unsigned bit-vectors.
//!
//! [`Bits`] is the concrete value domain for every other type in this
//! crate: [`crate::interval::Interval`] and [`crate::sets::IntervalSet`]
//! are built from pairs and runs of `Bits`, and
//! [`crate::ternary::TernaryVector`] tracks per-bit knowledge about a
//! `Bits` value.

use core::cmp::Ordering;
use core::fmt;

/// Maximum bit-vector width this crate supports.
///
/// Chosen to match the payload type (`u128`); widths above this would
/// need a bignum backing store, which is out of scope (spec.md §1:
/// "tracking ... non-power-of-two numeric domains" is a non-goal, and
/// arbitrary-precision bit-vectors are not part of the described IR).
pub const MAX_WIDTH: u32 = 128;

/// An immutable fixed-width unsigned integer.
///
/// # Invariant
///
/// Bits at position `>= width` are always zero. Every constructor and
/// arithmetic operation masks its result to `width`, so the invariant
/// holds unconditionally; [`Bits::debug_check_invariant`] additionally
/// asserts it in debug builds at the handful of sites that bypass the
/// normal constructors.
#[derive(Debug, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bits {
    width: u32,
    value: u128,
}

#[inline(always)]
const fn mask_for(width: u32) -> u128 {
    if width >= MAX_WIDTH {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// 128x128 -> 256 bit unsigned widening multiply, as `(hi, lo)` limbs.
///
/// Standard schoolbook decomposition into 64-bit halves; used where a
/// single `u128` can't hold the exact product (see
/// [`Bits::umul_overflowing`]).
#[inline]
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
    let a_lo = a & u64::MAX as u128;
    let a_hi = a >> 64;
    let b_lo = b & u64::MAX as u128;
    let b_hi = b >> 64;

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    let cross = (lo_lo >> 64) + (hi_lo & u64::MAX as u128) + (lo_hi & u64::MAX as u128);

    let lo = (lo_lo & u64::MAX as u128) | (cross << 64);
    let hi = hi_hi + (hi_lo >> 64) + (lo_hi >> 64) + (cross >> 64);
    (hi, lo)
}

/// Position of the highest set bit of `v`, or `None` if `v == 0`.
#[inline]
fn highest_set_bit_u128(v: u128) -> Option<u32> {
    if v == 0 {
        None
    } else {
        Some(127 - v.leading_zeros())
    }
}

impl Bits {
    /// Construct a `Bits` from a raw payload, masking off any bits at
    /// or above `width`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or exceeds [`MAX_WIDTH`] (a
    /// precondition violation per spec.md §6.3/§7: there is no
    /// well-defined bit-vector abstraction for a zero- or
    /// over-wide vector, so this is a fatal assertion rather than a
    /// recoverable error).
    #[inline]
    pub fn new(width: u32, value: u128) -> Self {
        assert!(width >= 1 && width <= MAX_WIDTH, "bit width out of range: {width}");
        Self { width, value: value & mask_for(width) }
    }

    /// Construct a `Bits`, failing instead of panicking if `value`
    /// does not fit in `width` bits.
    ///
    /// This is the one genuinely fallible boundary in this module: an
    /// IR constant-folding pass handing a literal to this crate is
    /// external input, not an internal precondition (see SPEC_FULL.md
    /// §6.3).
    pub fn try_new(width: u32, value: u128) -> Result<Self, crate::error::Error> {
        if !(1..=MAX_WIDTH).contains(&width) {
            return Err(crate::error::Error::InvalidWidth { width });
        }
        if value & !mask_for(width) != 0 {
            return Err(crate::error::Error::ValueOutOfRange { width, value });
        }
        Ok(Self { width, value })
    }

    /// The all-zeros value of the given width.
    #[inline]
    pub fn zero(width: u32) -> Self {
        Self::new(width, 0)
    }

    /// The value `1` at the given width.
    #[inline]
    pub fn one(width: u32) -> Self {
        Self::new(width, 1)
    }

    /// The all-ones (maximum unsigned) value of the given width.
    #[inline]
    pub fn max(width: u32) -> Self {
        Self::new(width, mask_for(width))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn value(&self) -> u128 {
        self.value
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    #[inline]
    pub fn is_max(&self) -> bool {
        self.value == mask_for(self.width)
    }

    #[inline]
    pub fn bit(&self, i: u32) -> bool {
        assert!(i < self.width, "bit index {i} out of range for width {}", self.width);
        (self.value >> i) & 1 == 1
    }

    /// Most significant bit.
    #[inline]
    pub fn msb(&self) -> bool {
        self.bit(self.width - 1)
    }

    /// Least significant bit.
    #[inline]
    pub fn lsb(&self) -> bool {
        self.bit(0)
    }

    fn require_same_width(&self, rhs: &Self) {
        assert_eq!(
            self.width, rhs.width,
            "bit width mismatch: {} vs {}",
            self.width, rhs.width
        );
    }

    /// Wrapping addition modulo `2^width`.
    #[inline]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.require_same_width(rhs);
        Self::new(self.width, self.value.wrapping_add(rhs.value))
    }

    /// Addition at `width + 1` bits: the extra bit is the carry-out,
    /// so the harness (SPEC_FULL.md §4) can read overflow straight off
    /// bit `width` instead of computing it separately.
    #[inline]
    pub fn widening_add(&self, rhs: &Self) -> Self {
        self.require_same_width(rhs);
        Self::new(self.width + 1, self.value + rhs.value)
    }

    #[inline]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.require_same_width(rhs);
        Self::new(self.width, self.value.wrapping_sub(rhs.value))
    }

    #[inline]
    pub fn wrapping_neg(&self) -> Self {
        Self::new(self.width, self.value.wrapping_neg())
    }

    #[inline]
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.require_same_width(rhs);
        Self::new(self.width, self.value.wrapping_mul(rhs.value))
    }

    /// Unsigned multiplication against the true (untruncated)
    /// mathematical product rather than one pre-truncated to fit in a
    /// `u128`.
    ///
    /// Two operands up to [`MAX_WIDTH`] bits each can have a product
    /// needing up to `2 * MAX_WIDTH` bits, more than a `u128` payload
    /// holds; computing the product in `u128` first and then asking
    /// which bit is highest (as `wrapping_mul` would) silently
    /// under-reports overflow once the true product exceeds 128 bits.
    /// [`widening_mul`] keeps the full 256-bit product split as
    /// `(hi, lo)` so overflow is read off the untruncated magnitude.
    ///
    /// Returns the product truncated to `out_width` bits, together
    /// with `overflow1` (true product's highest set bit is at or
    /// beyond `out_width`) and `overflow2` (at or beyond `out_width +
    /// 1`) per spec.md §4.4's `UMul` overflow semantics.
    #[inline]
    pub fn umul_overflowing(&self, rhs: &Self, out_width: u32) -> (Self, bool, bool) {
        let (hi, lo) = widening_mul(self.value, rhs.value);
        let highest_set_bit = if hi != 0 {
            highest_set_bit_u128(hi).map(|i| i + 128)
        } else {
            highest_set_bit_u128(lo)
        };
        let overflow1 = highest_set_bit.is_some_and(|i| i >= out_width);
        let overflow2 = highest_set_bit.is_some_and(|i| i >= out_width + 1);
        (Self::new(out_width, lo), overflow1, overflow2)
    }

    /// Unsigned division; division by zero is handled by callers per
    /// spec.md §4.4 (UDiv overflow semantics), not here.
    #[inline]
    pub fn wrapping_div(&self, rhs: &Self) -> Self {
        self.require_same_width(rhs);
        Self::new(self.width, self.value / rhs.value)
    }

    /// Zero-extend to a wider bit-vector.
    ///
    /// # Panics
    /// Panics if `new_width < self.width`.
    #[inline]
    pub fn zero_extend(&self, new_width: u32) -> Self {
        assert!(new_width >= self.width, "zero_extend to narrower width");
        Self::new(new_width, self.value)
    }

    /// Sign-extend to a wider bit-vector, treating `self` as a
    /// two's-complement signed value of its own width.
    ///
    /// # Panics
    /// Panics if `new_width < self.width`.
    #[inline]
    pub fn sign_extend(&self, new_width: u32) -> Self {
        assert!(new_width >= self.width, "sign_extend to narrower width");
        if self.width == new_width {
            return *self;
        }
        if self.msb() {
            let fill = mask_for(new_width) ^ mask_for(self.width);
            Self::new(new_width, self.value | fill)
        } else {
            Self::new(new_width, self.value)
        }
    }

    /// Truncate to a narrower (or equal) bit-vector, discarding high
    /// bits.
    ///
    /// # Panics
    /// Panics if `new_width > self.width`.
    #[inline]
    pub fn truncate(&self, new_width: u32) -> Self {
        assert!(new_width <= self.width, "truncate to wider width");
        Self::new(new_width, self.value)
    }

    /// Extract an inclusive bit range `[lo_bit, hi_bit]`, 0-indexed
    /// from the LSB, as a bit-vector of width `hi_bit - lo_bit + 1`.
    #[inline]
    pub fn slice(&self, lo_bit: u32, hi_bit: u32) -> Self {
        assert!(lo_bit <= hi_bit && hi_bit < self.width, "bit range out of bounds");
        let shifted = self.value >> lo_bit;
        Self::new(hi_bit - lo_bit + 1, shifted)
    }

    /// Concatenate two bit-vectors with `self` as the high (msb) half
    /// and `lsb` as the low half, per spec.md §4.5's `Concat`.
    #[inline]
    pub fn concat(&self, lsb: &Self) -> Self {
        let out_width = self.width + lsb.width;
        assert!(out_width <= MAX_WIDTH, "Concat result exceeds maximum supported width");
        let value = (self.value << lsb.width) | lsb.value;
        Self::new(out_width, value)
    }

    /// `self - 1`, returning `None` if `self` is zero (used by the
    /// minimizer and bridge to compute adjacency without wraparound).
    #[inline]
    pub fn checked_pred(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::new(self.width, self.value - 1))
        }
    }

    /// `self + 1`, returning `None` if `self` is the maximum value.
    #[inline]
    pub fn checked_succ(&self) -> Option<Self> {
        if self.is_max() {
            None
        } else {
            Some(Self::new(self.width, self.value + 1))
        }
    }

    /// Unsigned distance `self - rhs` as a plain integer (not masked
    /// to width), used by the minimizer's gap-size ordering. Requires
    /// `self >= rhs`.
    #[inline]
    pub fn distance(&self, rhs: &Self) -> u128 {
        self.require_same_width(rhs);
        assert!(self.value >= rhs.value);
        self.value - rhs.value
    }

    #[cfg(debug_assertions)]
    pub(crate) fn debug_check_invariant(&self) {
        debug_assert_eq!(self.value & !mask_for(self.width), 0);
    }
}

impl PartialEq for Bits {
    /// Equality requires matching bit widths (spec.md §3.1).
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.value == other.value
    }
}

impl PartialOrd for Bits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bits {
    /// Unsigned comparison. Panics on width mismatch, mirroring
    /// `Bits` equality's width requirement.
    fn cmp(&self, other: &Self) -> Ordering {
        self.require_same_width(other);
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.value, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_overwide_payload() {
        let b = Bits::new(4, 0xFF);
        assert_eq!(b.value(), 0xF);
    }

    #[test]
    fn zero_max_one() {
        assert!(Bits::zero(8).is_zero());
        assert!(Bits::max(8).is_max());
        assert_eq!(Bits::max(8).value(), 255);
        assert_eq!(Bits::one(8).value(), 1);
    }

    #[test]
    fn wrapping_add_wraps() {
        let a = Bits::new(8, 250);
        let b = Bits::new(8, 10);
        assert_eq!(a.wrapping_add(&b).value(), 4);
    }

    #[test]
    fn widening_add_exposes_carry() {
        let a = Bits::new(8, 250);
        let b = Bits::new(8, 10);
        let w = a.widening_add(&b);
        assert_eq!(w.width(), 9);
        assert_eq!(w.value(), 260);
        assert!(w.bit(8));
    }

    #[test]
    fn sign_extend_fills_ones_when_negative() {
        let a = Bits::new(4, 0b1111); // -1 at width 4
        let ext = a.sign_extend(8);
        assert_eq!(ext.value(), 0xFF);

        let b = Bits::new(4, 0b0111); // 7, positive
        let ext = b.sign_extend(8);
        assert_eq!(ext.value(), 7);
    }

    #[test]
    fn truncate_drops_high_bits() {
        let a = Bits::new(8, 0b1011_0101);
        assert_eq!(a.truncate(4).value(), 0b0101);
    }

    #[test]
    fn slice_extracts_bit_range() {
        let a = Bits::new(8, 0b1011_0101);
        assert_eq!(a.slice(4, 7).value(), 0b1011);
    }

    #[test]
    fn concat_places_self_as_msb() {
        let hi = Bits::new(4, 0b1010);
        let lo = Bits::new(4, 0b0101);
        let cat = hi.concat(&lo);
        assert_eq!(cat.width(), 8);
        assert_eq!(cat.value(), 0b1010_0101);
    }

    #[test]
    #[should_panic]
    fn equality_requires_matching_width() {
        let a = Bits::new(4, 1);
        let b = Bits::new(8, 1);
        let _ = a < b;
    }

    #[test]
    fn try_new_rejects_oversized_value() {
        assert!(Bits::try_new(4, 16).is_err());
        assert!(Bits::try_new(4, 15).is_ok());
    }

    #[test]
    fn umul_overflowing_fits_in_output_width() {
        // S3: 3*3 = 9, whose highest set bit (3) is < 4, so no
        // overflow1/overflow2 against a 4-bit output.
        let a = Bits::new(4, 3);
        let (product, of1, of2) = a.umul_overflowing(&a, 4);
        assert_eq!(product.value(), 9);
        assert!(!of1 && !of2);
    }

    #[test]
    fn umul_overflowing_detects_overflow_past_u128() {
        // Two 65-bit all-ones operands: the true product needs up to
        // 130 bits. A `u128`-truncated-first computation would miss
        // this entirely; the widening path must not.
        let a = Bits::max(65);
        let (_, of1, of2) = a.umul_overflowing(&a, 65);
        assert!(of1 && of2);
    }

    #[test]
    fn umul_overflowing_matches_plain_product_within_u128() {
        let a = Bits::new(16, 300);
        let b = Bits::new(16, 7);
        let (product, of1, of2) = a.umul_overflowing(&b, 32);
        assert_eq!(product.value(), 2100);
        assert!(!of1 && !of2);
    }
}
