#![no_main]

use libfuzzer_sys::fuzz_target;

use bvabs::ops;
use bvabs::{Bits, Interval, IntervalSet};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Data {
    width_seed: u8,
    a_lo: u128,
    a_hi: u128,
    b_lo: u128,
    b_hi: u128,
    sample_a: u128,
    sample_b: u128,
    op: u8,
}

fn small_width(seed: u8) -> u32 {
    1 + (seed % 6) as u32
}

fn build_set(width: u32, lo: u128, hi: u128) -> IntervalSet {
    IntervalSet::new(width, Interval::new(Bits::new(width, lo), Bits::new(width, hi)))
}

fn sample_in(set: &IntervalSet, raw: u128) -> Option<Bits> {
    if set.is_empty() {
        return None;
    }
    let idx = (raw as usize) % set.number_of_intervals();
    let iv = &set.intervals()[idx];
    let span = iv.len_minus_one();
    let offset = if span == 0 { 0 } else { raw % (span + 1) };
    Some(Bits::new(set.width(), iv.lo().value() + offset))
}

// Asserts the abstract-interpretation soundness property (spec.md
// §8.1): for every transfer function F and every concrete operand
// drawn from its operand set, the concrete result lies in the
// abstract result.
fuzz_target!(|data: Data| {
    let width = small_width(data.width_seed);
    let a = build_set(width, data.a_lo, data.a_hi);
    let b = build_set(width, data.b_lo, data.b_hi);

    let (Some(xa), Some(xb)) = (sample_in(&a, data.sample_a), sample_in(&b, data.sample_b)) else {
        return;
    };

    match data.op % 10 {
        0 => {
            let result = ops::arith::add(&a, &b);
            let expect = xa.wrapping_add(&xb);
            assert!(result.covers(expect));
        }
        1 => {
            let result = ops::arith::sub(&a, &b);
            let expect = xa.wrapping_sub(&xb);
            assert!(result.covers(expect));
        }
        2 => {
            let result = ops::arith::umul(&a, &b, width);
            let expect = xa.wrapping_mul(&xb);
            assert!(result.covers(expect));
        }
        3 => {
            let result = ops::arith::udiv(&a, &b);
            let expect = if xb.is_zero() { Bits::max(width) } else { xa.wrapping_div(&xb) };
            assert!(result.covers(expect));
        }
        4 => {
            let result = ops::bitwise::and(&a, &b);
            let expect = Bits::new(width, xa.value() & xb.value());
            assert!(result.covers(expect));
        }
        5 => {
            let result = ops::bitwise::or(&a, &b);
            let expect = Bits::new(width, xa.value() | xb.value());
            assert!(result.covers(expect));
        }
        6 => {
            let result = ops::bitwise::xor(&a, &b);
            let expect = Bits::new(width, xa.value() ^ xb.value());
            assert!(result.covers(expect));
        }
        7 => {
            let result = ops::compare::ult(&a, &b);
            let expect = if xa < xb { Bits::one(1) } else { Bits::zero(1) };
            assert!(result.covers(expect));
        }
        8 => {
            let result = ops::compare::eq(&a, &b);
            let expect = if xa == xb { Bits::one(1) } else { Bits::zero(1) };
            assert!(result.covers(expect));
        }
        _ => {
            let result = ops::arith::neg(&a);
            let expect = xa.wrapping_neg();
            assert!(result.covers(expect));
        }
    }
});
