//! Transfer functions: the abstract-interpretation counterpart of
//! each concrete bit-vector operation.
//!
//! One file per operation family, each exposing free functions over
//! [`crate::sets::IntervalSet`] rather than operator-trait impls, since
//! these operations change bit width and aren't expressible as
//! `Add`/`Mul` and friends without misleading signatures.

pub mod arith;
pub mod bitwise;
pub mod compare;
pub mod concat;
pub mod extend;
pub mod reduce;
pub mod select;
