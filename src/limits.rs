//! Named budget constants.
//!
//! spec.md threads numeric budgets through call sites explicitly
//! rather than through a configuration layer (SPEC_FULL.md §7.3); this
//! module just gives the magic numbers names, the way the teacher
//! names thresholds in `category.rs` instead of inlining them at call
//! sites.

/// Default cap passed to [`crate::minimize::minimize_intervals`] by
/// transfer functions that don't have a more specific budget of their
/// own (spec.md §4.4 step 5).
pub const DEFAULT_MAX_INTERVALS: usize = 16;

/// Per-operand minimize-before-enumerate cap used by the variadic
/// harness for the first [`HARNESS_WIDE_OPERANDS`] operands (spec.md
/// §4.4 step 1).
pub const HARNESS_OPERAND_CAP: usize = 5;

/// Per-operand minimize-before-enumerate cap for operands beyond the
/// first [`HARNESS_WIDE_OPERANDS`] (spec.md §4.4 step 1).
pub const HARNESS_OPERAND_CAP_TAIL: usize = 1;

/// Number of leading operands allowed the wider
/// [`HARNESS_OPERAND_CAP`]; bounds the Cartesian product at `5^12`
/// (spec.md §5).
pub const HARNESS_WIDE_OPERANDS: usize = 12;
