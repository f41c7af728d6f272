//! [`KnownBits`]: a `(mask, values)` pair derived from a
//! [`crate::ternary::TernaryVector`].

use crate::bits::Bits;
use crate::ternary::{TernaryVector, Trit};

/// A known-bits summary of a value: `mask` has a `1` wherever the bit
/// is known, and `values` holds the known bit values (with `0` at
/// unknown positions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownBits {
    pub mask: Bits,
    pub values: Bits,
}

impl KnownBits {
    pub fn from_ternary(t: &TernaryVector) -> Self {
        let width = t.width();
        let mut mask = 0u128;
        let mut values = 0u128;
        for i in 0..width {
            match t.bit(i) {
                Trit::Zero => mask |= 1 << i,
                Trit::One => {
                    mask |= 1 << i;
                    values |= 1 << i;
                }
                Trit::Top => {}
            }
        }
        Self { mask: Bits::new(width, mask), values: Bits::new(width, values) }
    }
}
