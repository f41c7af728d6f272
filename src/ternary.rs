//! Per-bit three-valued (`0`, `1`, `⊤`) lattice vectors.
//!
//! `TernaryVector` is the tightest tractable abstraction for bitwise
//! operations: the bridge in [`crate::bridge`] lifts an
//! [`crate::sets::IntervalSet`] to a `TernaryVector`, evaluates the
//! bitwise op per-bit here, and lowers the result back.

use core::fmt;

use crate::bits::Bits;

/// A single bit's state in the ternary lattice: known `0`, known `1`,
/// or unknown (`⊤`, "top").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trit {
    Zero,
    One,
    Top,
}

impl Trit {
    #[inline]
    pub fn is_known(self) -> bool {
        !matches!(self, Trit::Top)
    }

    fn from_bit(b: bool) -> Self {
        if b { Trit::One } else { Trit::Zero }
    }

    /// Meet of two trits in the knowledge lattice: agreement keeps the
    /// value, disagreement (or either side already unknown) yields
    /// `⊤`. Used by [`TernaryVector::update_with_intersection`].
    fn meet(self, other: Trit) -> Trit {
        match (self, other) {
            (Trit::Zero, Trit::Zero) => Trit::Zero,
            (Trit::One, Trit::One) => Trit::One,
            _ => Trit::Top,
        }
    }

    fn and(self, other: Trit) -> Trit {
        match (self, other) {
            (Trit::Zero, _) | (_, Trit::Zero) => Trit::Zero,
            (Trit::One, Trit::One) => Trit::One,
            _ => Trit::Top,
        }
    }

    fn or(self, other: Trit) -> Trit {
        match (self, other) {
            (Trit::One, _) | (_, Trit::One) => Trit::One,
            (Trit::Zero, Trit::Zero) => Trit::Zero,
            _ => Trit::Top,
        }
    }

    fn xor(self, other: Trit) -> Trit {
        match (self, other) {
            (Trit::Zero, Trit::Zero) | (Trit::One, Trit::One) => Trit::Zero,
            (Trit::Zero, Trit::One) | (Trit::One, Trit::Zero) => Trit::One,
            _ => Trit::Top,
        }
    }

    fn not(self) -> Trit {
        match self {
            Trit::Zero => Trit::One,
            Trit::One => Trit::Zero,
            Trit::Top => Trit::Top,
        }
    }
}

/// A sequence of `width` [`Trit`]s, stored MSB-first (index 0 is the
/// most significant bit), matching the msb-to-lsb walk order
/// `FromTernary` uses when it absorbs runs of matching bits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TernaryVector {
    width: u32,
    /// MSB-first: `bits[0]` is bit `width - 1`.
    bits: Vec<Trit>,
}

impl TernaryVector {
    pub fn new(bits: Vec<Trit>) -> Self {
        let width = bits.len() as u32;
        Self { width, bits }
    }

    /// A fully-known vector built from a concrete value.
    pub fn from_bits(v: Bits) -> Self {
        let width = v.width();
        let bits = (0..width)
            .rev()
            .map(|i| Trit::from_bit(v.bit(i)))
            .collect();
        Self { width, bits }
    }

    /// A fully-unknown vector of the given width.
    pub fn unknown(width: u32) -> Self {
        Self { width, bits: vec![Trit::Top; width as usize] }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// bit `i`, 0-indexed from the LSB.
    #[inline]
    pub fn bit(&self, i: u32) -> Trit {
        self.bits[(self.width - 1 - i) as usize]
    }

    #[inline]
    pub fn set_bit(&mut self, i: u32, t: Trit) {
        self.bits[(self.width - 1 - i) as usize] = t;
    }

    /// MSB-first iterator, matching `FromTernary`'s walk order.
    pub fn iter_msb_to_lsb(&self) -> impl Iterator<Item = Trit> + '_ {
        self.bits.iter().copied()
    }

    #[inline]
    pub fn is_known(&self, i: u32) -> bool {
        self.bit(i).is_known()
    }

    pub fn is_fully_known(&self) -> bool {
        self.bits.iter().all(|t| t.is_known())
    }

    /// Concrete value, assuming every bit is known.
    ///
    /// # Panics
    /// Panics if any bit is `⊤`.
    pub fn to_known_bits_value(&self) -> Bits {
        let mut value = 0u128;
        for i in (0..self.width).rev() {
            let t = self.bit(i);
            let bit = match t {
                Trit::Zero => 0,
                Trit::One => 1,
                Trit::Top => panic!("to_known_bits_value called on a vector with unknown bits"),
            };
            value = (value << 1) | bit;
        }
        Bits::new(self.width, value)
    }

    /// Enumerate every concrete filling of the unknown bits, in
    /// msb-to-lsb order of the unknowns.
    pub fn all_bits_values(&self) -> Vec<Bits> {
        let unknown_positions: Vec<u32> = (0..self.width).rev().filter(|&i| !self.is_known(i)).collect();
        let k = unknown_positions.len();
        if k == 0 {
            return vec![self.to_known_bits_value()];
        }
        // known base value, with unknown bit positions left as zero.
        let mut base = 0u128;
        for i in (0..self.width).rev() {
            let bit = match self.bit(i) {
                Trit::One => 1u128,
                _ => 0u128,
            };
            base |= bit << i;
        }

        let mut out = Vec::with_capacity(1usize << k);
        for mask in 0..(1u128 << k) {
            let mut value = base;
            for (bit_idx, &pos) in unknown_positions.iter().enumerate() {
                let bit = (mask >> bit_idx) & 1;
                value |= bit << pos;
            }
            out.push(Bits::new(self.width, value));
        }
        out
    }

    /// Meet two vectors bit-by-bit: bits both sides agree on stay
    /// known, disagreements become `⊤`.
    pub fn update_with_intersection(&mut self, other: &TernaryVector) {
        assert_eq!(self.width, other.width);
        for (a, b) in self.bits.iter_mut().zip(other.bits.iter()) {
            *a = a.meet(*b);
        }
    }

    fn zip_map(a: &TernaryVector, b: &TernaryVector, f: impl Fn(Trit, Trit) -> Trit) -> TernaryVector {
        assert_eq!(a.width, b.width, "ternary vectors must share a width");
        let bits = a.bits.iter().zip(b.bits.iter()).map(|(&x, &y)| f(x, y)).collect();
        TernaryVector { width: a.width, bits }
    }

    pub fn and(&self, other: &TernaryVector) -> TernaryVector {
        Self::zip_map(self, other, Trit::and)
    }

    pub fn or(&self, other: &TernaryVector) -> TernaryVector {
        Self::zip_map(self, other, Trit::or)
    }

    pub fn xor(&self, other: &TernaryVector) -> TernaryVector {
        Self::zip_map(self, other, Trit::xor)
    }

    pub fn not(&self) -> TernaryVector {
        TernaryVector { width: self.width, bits: self.bits.iter().map(|t| t.not()).collect() }
    }

    /// `OneHotLsbToMsb`: bit `i` is set iff `i` is the position of the
    /// lowest set bit; width grows by one (the "no bits set" case).
    pub fn one_hot_lsb_to_msb(&self) -> TernaryVector {
        self.one_hot(false)
    }

    /// `OneHotMsbToLsb`: mirror image, scanning from the msb.
    pub fn one_hot_msb_to_lsb(&self) -> TernaryVector {
        self.one_hot(true)
    }

    /// Bit `i` (`i < w`) of the result is set iff bit `i` of `self` is
    /// the first set bit encountered scanning in `order`; the extra
    /// high bit `w` is set iff no bit of `self` could be set at all.
    fn one_hot(&self, from_msb: bool) -> TernaryVector {
        let w = self.width;
        let mut out = TernaryVector::unknown(w + 1);
        let order: Vec<u32> = if from_msb { (0..w).rev().collect() } else { (0..w).collect() };

        // seen_one / seen_unknown track whether, scanning in `order`,
        // we've already passed a position that is known-one or
        // unknown (either of which could be *the* selected bit).
        let mut seen_one = false;
        let mut seen_unknown = false;

        for &pos in &order {
            if seen_one {
                out.set_bit(pos, Trit::Zero);
                continue;
            }
            match self.bit(pos) {
                Trit::One => {
                    out.set_bit(pos, if seen_unknown { Trit::Top } else { Trit::One });
                    seen_one = true;
                }
                Trit::Zero => {
                    out.set_bit(pos, if seen_unknown { Trit::Top } else { Trit::Zero });
                }
                Trit::Top => {
                    out.set_bit(pos, Trit::Top);
                    seen_unknown = true;
                }
            }
        }

        // "no bit set" sentinel: the extra high bit, set when the
        // whole input could be zero.
        out.set_bit(
            w,
            if seen_one {
                Trit::Zero
            } else if seen_unknown {
                Trit::Top
            } else {
                Trit::One
            },
        );

        out
    }
}

impl fmt::Display for TernaryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.bits {
            let c = match t {
                Trit::Zero => '0',
                Trit::One => '1',
                Trit::Top => 'X',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bits_is_fully_known() {
        let v = TernaryVector::from_bits(Bits::new(4, 0b1010));
        assert!(v.is_fully_known());
        assert_eq!(v.to_known_bits_value(), Bits::new(4, 0b1010));
    }

    #[test]
    fn all_bits_values_enumerates_fillings() {
        let mut v = TernaryVector::unknown(2);
        v.set_bit(1, Trit::One);
        let mut values: Vec<u128> = v.all_bits_values().iter().map(|b| b.value()).collect();
        values.sort();
        assert_eq!(values, vec![0b10, 0b11]);
    }

    #[test]
    fn update_with_intersection_keeps_agreement() {
        let mut a = TernaryVector::from_bits(Bits::new(4, 0b1010));
        let b = TernaryVector::from_bits(Bits::new(4, 0b1000));
        a.update_with_intersection(&b);
        assert_eq!(a.bit(3), Trit::One);
        assert_eq!(a.bit(2), Trit::Zero);
        assert_eq!(a.bit(1), Trit::Top); // disagreement: 1 vs 0
        assert_eq!(a.bit(0), Trit::Zero);
    }

    #[test]
    fn bitwise_ops_absorb_top() {
        let mut a = TernaryVector::unknown(1);
        a.set_bit(0, Trit::Zero);
        let mut b = TernaryVector::unknown(1);
        b.set_bit(0, Trit::Top);
        assert_eq!(a.and(&b).bit(0), Trit::Zero);
        assert_eq!(a.or(&b).bit(0), Trit::Top);
        assert_eq!(a.xor(&b).bit(0), Trit::Top);
    }

    #[test]
    fn one_hot_lsb_to_msb_known_value() {
        let v = TernaryVector::from_bits(Bits::new(4, 0b0100));
        let oh = v.one_hot_lsb_to_msb();
        assert!(oh.is_fully_known());
        let result = oh.to_known_bits_value();
        // bit 2 is the lowest set bit; the extra high bit (no-bits-set) is 0.
        assert_eq!(result.value(), 0b00100);
        assert_eq!(result.width(), 5);
    }

    #[test]
    fn one_hot_lsb_to_msb_all_zero_sets_sentinel() {
        let v = TernaryVector::from_bits(Bits::new(4, 0));
        let oh = v.one_hot_lsb_to_msb();
        assert!(oh.is_fully_known());
        assert_eq!(oh.to_known_bits_value().value(), 0b1_0000);
    }
}
