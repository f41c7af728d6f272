//! Error types for the few genuinely fallible boundaries of this crate.
//!
//! Grounded on the teacher's `error.rs`: a single `thiserror`-derived
//! enum aggregating small named error structs/variants, each with a
//! `#[error("...")]` message naming the violated precondition. Per
//! spec.md §6.3/§7, violations of internal preconditions (width
//! mismatches, unnormalized input where normalized input is required,
//! a non-empty-required set given empty) are fatal assertions inside
//! the public transfer function API: no value is safe to return
//! because the lattice has no defined semantics for them, so they stay
//! bare `assert!`/`panic!` (`bits.rs`'s `require_same_width`,
//! `bridge.rs`'s `extract_ternary`) rather than variants here. This
//! type exists only for the handful of boundary constructors
//! (`Bits::try_new`, `Factory::strict_from_ternary`) where external
//! input legitimately needs a recoverable `Result` instead of a panic.
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("bit width {width} is out of range (must be 1..=128)")]
    InvalidWidth { width: u32 },

    #[error("value {value} does not fit in {width} bits")]
    ValueOutOfRange { width: u32, value: u128 },

    #[error("budget must be non-negative, got {budget}")]
    NegativeBudget { budget: i64 },
}
