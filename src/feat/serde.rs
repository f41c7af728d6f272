//! Serde round-trip tests for the types that derive
//! `Serialize`/`Deserialize` behind `#[cfg_attr(feature = "serde", ...)]`
//! (see [`crate::bits::Bits`], [`crate::interval::Interval`],
//! [`crate::sets::IntervalSet`], [`crate::ternary::TernaryVector`]).
//!
//! This crate has no use for a zero-copy or binary wire format, just
//! plain round-trip checks of abstract state through one serializer.
