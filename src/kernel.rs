//! Digit-selection kernel: given `v = c * 2^q`, finds the shortest decimal
//! `d * 10^k` whose value, read back under round-to-nearest-even, is `v`.
//!
//! This is the hard engineering in the crate. Everything else (the log
//! approximations, the power-of-ten table, the 128x64 multiply) exists
//! only to make this step possible without arbitrary-precision
//! arithmetic or runtime division.

use crate::int_math::{flog10_three_quarters_pow2, flog10pow2, flog2pow10};
use crate::mul_hi::rop;
use crate::pow10_table;

/// The selected shortest decimal: `d * 10^k`, with `10^(n-1) <= d < 10^n`
/// for some `n` in `2..=H` (or `n == 1` only for the tiny subnormal
/// special cases handled by [`tiny_case`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Decimal {
    pub(crate) digits: u64,
    pub(crate) exp10: i32,
}

/// Format-specific constants threaded through the kernel. `P` is the
/// precision (bits of significand including the implicit leading bit),
/// `q_min` the minimum unbiased exponent, and `tiny_case` the lookup for
/// the length-forcing special cases at the smallest subnormals.
pub(crate) struct Params {
    pub(crate) p: u32,
    pub(crate) q_min: i32,
    pub(crate) tiny_case: fn(u64) -> Option<Decimal>,
}

pub(crate) const F64_PARAMS: Params = Params {
    p: 53,
    q_min: -1074,
    tiny_case: tiny_case_f64,
};

pub(crate) const F32_PARAMS: Params = Params {
    p: 24,
    q_min: -149,
    tiny_case: tiny_case_f32,
};

fn tiny_case_f64(s: u64) -> Option<Decimal> {
    // Only s=4 (MIN_VALUE itself) needs forcing: Step 5's general
    // even-tiebreak logic already lands on the correct, shorter answer
    // for every other tiny subnormal, including s=9 (2*MIN_VALUE, which
    // Step 5 resolves to (10, -324), i.e. "1.0E-323" after the
    // formatter strips the trailing zero). A table entry for s=9 would
    // clobber that correct result with the longer, non-canonical
    // "9.9E-324".
    match s {
        4 => Some(Decimal { digits: 49, exp10: -325 }),
        _ => None,
    }
}

fn tiny_case_f32(s: u64) -> Option<Decimal> {
    match s {
        1 => Some(Decimal { digits: 14, exp10: -46 }),
        2 => Some(Decimal { digits: 28, exp10: -46 }),
        4 => Some(Decimal { digits: 42, exp10: -46 }),
        5 => Some(Decimal { digits: 56, exp10: -46 }),
        7 => Some(Decimal { digits: 70, exp10: -46 }),
        8 => Some(Decimal { digits: 84, exp10: -46 }),
        9 => Some(Decimal { digits: 98, exp10: -46 }),
        _ => None,
    }
}

/// Runs the kernel on a finite, non-zero `v = c * 2^q`.
pub(crate) fn select_decimal(q: i32, c: u64, params: &Params) -> Decimal {
    let out = c & 1;

    // Step 1: scale selection. A power of two strictly above MIN_NORMAL
    // (c equal to the implicit leading bit, q not at the subnormal
    // floor) has a rounding interval only 3/4 as wide on the low side,
    // so it gets the "irregular spacing" branch.
    let (cb, cbl, cbr, k, h) = if c != (1u64 << (params.p - 1)) || q == params.q_min {
        let cb = 2 * c;
        let k = flog10pow2(q);
        let h = q + flog2pow10(-k) + 4;
        (cb, cb - 1, cb + 1, k, h)
    } else {
        let cb = 4 * c;
        let k = flog10_three_quarters_pow2(q);
        let h = q + flog2pow10(-k) + 3;
        (cb, cb - 1, cb + 2, k, h)
    };

    // Step 2: fixed-point multiply against the tabulated 10^-k.
    let (g1, g0) = pow10_table::get(-k);
    let vb = rop(g1, g0, cb.wrapping_shl(h as u32));
    let vbl = rop(g1, g0, cbl.wrapping_shl(h as u32));
    let vbr = rop(g1, g0, cbr.wrapping_shl(h as u32));

    let s = vb >> 2;

    // Step 3: two-digit test. If exactly one of the two length-(n-1)
    // decimals obtained by rounding s to the nearest multiple of ten
    // lies in the rounding interval, it round-trips and is shorter.
    if s >= 100 {
        let sp10 = s - (s % 10);
        let tp10 = sp10 + 10;
        let uin = vbl + out <= sp10 << 2;
        let win = (tp10 << 2) + out <= vbr;
        if uin != win {
            return if uin {
                Decimal { digits: sp10 / 10, exp10: k + 1 }
            } else {
                Decimal { digits: tp10 / 10, exp10: k + 1 }
            };
        }
    }

    // Step 4: tiny special cases, forcing a minimum length of 2 (1 for
    // binary32) at the smallest subnormals.
    if s < 10 {
        if let Some(d) = (params.tiny_case)(s) {
            return d;
        }
    }

    // Step 5: three-digit case with even tie-break.
    let t = s + 1;
    let uin = vbl + out <= s << 2;
    let win = (t << 2) + out <= vbr;
    if uin != win {
        return if uin {
            Decimal { digits: s, exp10: k }
        } else {
            Decimal { digits: t, exp10: k }
        };
    }

    let cmp = vb as i64 - 2 * (s + t) as i64;
    if cmp < 0 {
        Decimal { digits: s, exp10: k }
    } else if cmp > 0 {
        Decimal { digits: t, exp10: k }
    } else if s % 2 == 0 {
        Decimal { digits: s, exp10: k }
    } else {
        Decimal { digits: t, exp10: k }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_f64(v: f64) -> (bool, i32, u64) {
        let bits = v.to_bits();
        let sign = bits >> 63 != 0;
        let biased_exp = ((bits >> 52) & 0x7ff) as i32;
        let frac = bits & ((1u64 << 52) - 1);
        if biased_exp == 0 {
            (sign, -1074, frac)
        } else {
            (sign, biased_exp - 1075, frac | (1u64 << 52))
        }
    }

    fn decode_f32(v: f32) -> (bool, i32, u64) {
        let bits = v.to_bits();
        let sign = bits >> 31 != 0;
        let biased_exp = ((bits >> 23) & 0xff) as i32;
        let frac = (bits & ((1u32 << 23) - 1)) as u64;
        if biased_exp == 0 {
            (sign, -149, frac)
        } else {
            (sign, biased_exp - 150, frac | (1u64 << 23))
        }
    }

    #[test]
    fn one_point_zero_round_trips_to_minimal_length() {
        let (_, q, c) = decode_f64(1.0);
        let d = select_decimal(q, c, &F64_PARAMS);
        assert_eq!(d, Decimal { digits: 1, exp10: 0 });
    }

    #[test]
    fn nice_decimals_strip_down_to_the_same_magnitude() {
        let (_, q, c) = decode_f64(1200.0);
        let d = select_decimal(q, c, &F64_PARAMS);
        // Kernel output need not be already-shortest text; it is the
        // formatter's job to strip trailing zeros. Check the value only.
        let value = (d.digits as f64) * 10f64.powi(d.exp10);
        assert_eq!(value, 1200.0);
    }

    #[test]
    fn min_value_f64_hits_tiny_case() {
        let (_, q, c) = decode_f64(f64::from_bits(1));
        let d = select_decimal(q, c, &F64_PARAMS);
        assert_eq!(d, Decimal { digits: 49, exp10: -325 });
    }

    #[test]
    fn min_value_f32_hits_tiny_case() {
        let (_, q, c) = decode_f32(f32::from_bits(1));
        let d = select_decimal(q, c, &F32_PARAMS);
        assert_eq!(d, Decimal { digits: 14, exp10: -46 });
    }

    #[test]
    fn kernel_is_exhaustively_round_trip_correct_for_random_f64() {
        // A deterministic xorshift so the test has no external
        // dependency; this is not meant to replace real randomized
        // stress testing, just to catch gross regressions quickly.
        let mut state: u64 = 0x9E3779B97F4A7C15;
        for _ in 0..20_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let bits = state;
            let biased_exp = (bits >> 52) & 0x7ff;
            if biased_exp == 0x7ff {
                continue;
            }
            let v = f64::from_bits(bits);
            if v == 0.0 {
                continue;
            }
            let (_, q, c) = decode_f64(v.abs());
            let d = select_decimal(q, c, &F64_PARAMS);
            let text = crate::formatter::format_decimal(d, false);
            let parsed: f64 = text.parse().unwrap();
            assert_eq!(parsed, v.abs(), "round-trip failed for {:x} -> {}", bits, text);
        }
    }
}
