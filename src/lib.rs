//! bvabs
//! -----
//!
//! An abstract-interpretation library over sets of fixed-width
//! unsigned bit-vector intervals.
//!
//! Given an IR expression built from fixed-width bit-vector
//! operations, this crate computes, for each operand, a compact
//! over-approximation of the set of concrete values it may take,
//! represented as a normalized union of closed intervals
//! ([`sets::IntervalSet`]). Optimization passes in a hardware
//! description compiler's IR middle-end consume these approximations
//! for constant folding, dead-code elimination, bit-width narrowing,
//! and comparison simplification.
//!
//! The crate is a pure, stateless library: every public function is a
//! value-to-value transform with no I/O, no shared mutable state, and
//! no panics except on violated preconditions (mismatched widths,
//! zero budgets) — see [`error`] for the boundary APIs that turn those
//! into `Result` instead.
//!
//! ```
//! use bvabs::prelude::*;
//!
//! let x = IntervalSet::precise(Bits::new(8, 5));
//! let y = IntervalSet::new(8, Interval::new(Bits::new(8, 3), Bits::new(8, 7)));
//! let sum = ops::arith::add(&x, &y);
//! assert_eq!(sum.lower_bound(), Some(Bits::new(8, 8)));
//! assert_eq!(sum.upper_bound(), Some(Bits::new(8, 12)));
//! ```
pub mod bits;
pub mod bridge;
pub mod error;
pub mod factory;
pub mod harness;
pub mod interval;
pub mod knownbits;
pub mod limits;
pub mod minimize;
pub mod ops;
pub mod sets;
pub mod ternary;

#[cfg(any(feature = "serde", feature = "arbitrary", feature = "quickcheck"))]
pub mod feat;

pub use bits::Bits;
pub use error::Error;
pub use factory::Factory;
pub use interval::Interval;
pub use sets::IntervalSet;
pub use ternary::{Trit, TernaryVector};
pub use knownbits::KnownBits;

/// Convenience re-exports for call sites that want the whole public
/// surface in scope.
pub mod prelude {
    pub use crate::bits::Bits;
    pub use crate::error::Error;
    pub use crate::factory::Factory;
    pub use crate::harness::Tonicity;
    pub use crate::interval::Interval;
    pub use crate::knownbits::KnownBits;
    pub use crate::sets::IntervalSet;
    pub use crate::ternary::{TernaryVector, Trit};
    pub use crate::ops;
}
